use alloy::{
    dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
    sol_types::SolCall,
};
use tracing::{debug, instrument};

use crate::{
    client::{CallRequest, ReadClient},
    errors::{ActionError, ConfigurationError, ReadResultExt},
    helpers::chain::resolve_chain,
    types::params::{ReadContractAbiParams, ReadContractParams},
};

pub const READ_CONTRACT: &str = "readContract";
pub const READ_CONTRACT_ABI: &str = "readContractAbi";

/// Calls a view function described by a `sol!` generated call type and decodes its return.
#[instrument(level = "debug", skip_all, fields(address = %params.address, function = C::SIGNATURE))]
pub async fn read_contract<Cl, C>(
    client: &Cl,
    params: ReadContractParams<C>,
) -> Result<C::Return, ActionError>
where
    Cl: ReadClient + ?Sized,
    C: SolCall,
{
    let chain = resolve_chain(client, params.chain)
        .map_err(|e| ActionError::configuration(READ_CONTRACT, e))?;

    let request = CallRequest::new(chain, params.address, params.call.abi_encode())
        .with_from(params.account)
        .with_block(params.block);

    let output = client
        .call(request)
        .await
        .for_action(READ_CONTRACT)?;

    match C::abi_decode_returns(&output) {
        Ok(decoded) => Ok(decoded),
        Err(_) if output.is_empty() => Err(ActionError::not_found(
            READ_CONTRACT,
            format!("{} on {} returned no data", C::SIGNATURE, params.address),
        )),
        Err(e) => Err(ActionError::malformed(
            READ_CONTRACT,
            format!("failed to decode {} output: {e}", C::SIGNATURE),
        )),
    }
}

/// Calls `params.function_name` as described by a JSON ABI.
///
/// Overloads are tried in ABI order; the first one accepting `params.args` is used.
#[instrument(
    level = "debug",
    skip_all,
    fields(address = %params.address, function = %params.function_name)
)]
pub async fn read_contract_abi<Cl>(
    client: &Cl,
    params: ReadContractAbiParams,
) -> Result<Vec<DynSolValue>, ActionError>
where
    Cl: ReadClient + ?Sized,
{
    let chain = resolve_chain(client, params.chain)
        .map_err(|e| ActionError::configuration(READ_CONTRACT_ABI, e))?;

    let overloads = params
        .abi
        .function(&params.function_name)
        .ok_or_else(|| {
            ActionError::configuration(
                READ_CONTRACT_ABI,
                ConfigurationError::UnknownFunction(params.function_name.clone()),
            )
        })?;

    let (function, calldata) = overloads
        .iter()
        .find_map(|function| {
            function
                .abi_encode_input(&params.args)
                .ok()
                .map(|calldata| (function, calldata))
        })
        .ok_or_else(|| {
            ActionError::configuration(
                READ_CONTRACT_ABI,
                ConfigurationError::InvalidArguments {
                    function: params.function_name.clone(),
                    reason: format!(
                        "no overload accepts the {} supplied argument(s)",
                        params.args.len()
                    ),
                },
            )
        })?;

    debug!(signature = %function.signature(), "Resolved ABI function");

    let request = CallRequest::new(chain, params.address, calldata)
        .with_from(params.account)
        .with_block(params.block);

    let output = client
        .call(request)
        .await
        .for_action(READ_CONTRACT_ABI)?;

    if output.is_empty() && !function.outputs.is_empty() {
        return Err(ActionError::not_found(
            READ_CONTRACT_ABI,
            format!("{} on {} returned no data", function.signature(), params.address),
        ));
    }

    function.abi_decode_output(&output).map_err(|e| {
        ActionError::malformed(
            READ_CONTRACT_ABI,
            format!("failed to decode {} output: {e}", function.signature()),
        )
    })
}

#[cfg(test)]
mod tests {
    use alloy::{json_abi::JsonAbi, rpc::types::BlockNumberOrTag, sol, sol_types::SolValue};
    use alloy_primitives::{Address, Bytes, U256};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        abi::getOwnersCall,
        constants::ARBITRUM_SECURITY_COUNCIL_L1,
        test_fixtures::{MockClient, council_members},
        types::ChainId,
    };

    sol! {
        function isOwner(address owner) external view returns (bool);
    }

    const GET_OWNERS_ABI: &str = r#"[
        {
            "inputs": [],
            "name": "getOwners",
            "outputs": [{ "internalType": "address[]", "name": "", "type": "address[]" }],
            "stateMutability": "view",
            "type": "function"
        },
        {
            "inputs": [{ "internalType": "address", "name": "owner", "type": "address" }],
            "name": "isOwner",
            "outputs": [{ "internalType": "bool", "name": "", "type": "bool" }],
            "stateMutability": "view",
            "type": "function"
        }
    ]"#;

    fn safe_abi() -> JsonAbi {
        serde_json::from_str(GET_OWNERS_ABI).expect("Failed to parse ABI")
    }

    #[tokio::test]
    async fn test_read_contract_typed() {
        let client = MockClient::returning(
            Some(ChainId::Mainnet),
            council_members().abi_encode(),
        );

        let members = read_contract(
            &client,
            ReadContractParams::new(ARBITRUM_SECURITY_COUNCIL_L1, getOwnersCall {}),
        )
        .await
        .expect("Failed to read contract");

        assert_eq!(members, council_members());
    }

    #[tokio::test]
    async fn test_read_contract_passes_account_block_and_chain() {
        let client = MockClient::returning(None, true.abi_encode());
        let caller = Address::repeat_byte(0x42);

        let is_owner = read_contract(
            &client,
            ReadContractParams::new(
                ARBITRUM_SECURITY_COUNCIL_L1,
                isOwnerCall {
                    owner: Address::repeat_byte(0xaa),
                },
            )
            .with_chain(ChainId::Mainnet)
            .from_account(caller)
            .at_block(BlockNumberOrTag::Finalized),
        )
        .await
        .expect("Failed to read contract");

        assert!(is_owner);

        let request = &client.requests()[0];
        assert_eq!(request.chain, ChainId::Mainnet);
        assert_eq!(request.from, Some(caller));
        assert_eq!(request.block, BlockNumberOrTag::Finalized);
        assert_eq!(&request.data[..4], isOwnerCall::SELECTOR.as_slice());
    }

    #[tokio::test]
    async fn test_read_contract_empty_output_is_not_found() {
        let client = MockClient::returning(Some(ChainId::Mainnet), Bytes::new());

        let err = read_contract(
            &client,
            ReadContractParams::new(Address::ZERO, getOwnersCall {}),
        )
        .await
        .unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {err}");
        assert_eq!(err.operation(), READ_CONTRACT);
    }

    #[tokio::test]
    async fn test_read_contract_revert_is_not_found() {
        let client = MockClient::reverting(Some(ChainId::Mainnet));

        let err = read_contract(
            &client,
            ReadContractParams::new(ARBITRUM_SECURITY_COUNCIL_L1, getOwnersCall {}),
        )
        .await
        .unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_read_contract_abi_by_name() {
        let client = MockClient::returning(
            Some(ChainId::Mainnet),
            council_members().abi_encode(),
        );

        let output = read_contract_abi(
            &client,
            ReadContractAbiParams::new(ARBITRUM_SECURITY_COUNCIL_L1, safe_abi(), "getOwners"),
        )
        .await
        .expect("Failed to read contract");

        let expected = DynSolValue::Array(
            council_members()
                .into_iter()
                .map(DynSolValue::Address)
                .collect(),
        );
        assert_eq!(output, vec![expected]);
        assert_eq!(
            client.requests()[0].data.as_ref(),
            getOwnersCall::SELECTOR.as_slice()
        );
    }

    #[tokio::test]
    async fn test_read_contract_abi_with_args() {
        let client = MockClient::returning(Some(ChainId::Mainnet), false.abi_encode());

        let output = read_contract_abi(
            &client,
            ReadContractAbiParams::new(ARBITRUM_SECURITY_COUNCIL_L1, safe_abi(), "isOwner")
                .with_args(vec![DynSolValue::Address(Address::repeat_byte(0x01))]),
        )
        .await
        .expect("Failed to read contract");

        assert_eq!(output, vec![DynSolValue::Bool(false)]);
    }

    #[tokio::test]
    async fn test_read_contract_abi_unknown_function() {
        let client = MockClient::returning(Some(ChainId::Mainnet), Bytes::new());

        let err = read_contract_abi(
            &client,
            ReadContractAbiParams::new(ARBITRUM_SECURITY_COUNCIL_L1, safe_abi(), "getThreshold"),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            ActionError::Configuration {
                source: ConfigurationError::UnknownFunction(ref name),
                ..
            } if name == "getThreshold"
        ));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_contract_abi_argument_mismatch() {
        let client = MockClient::returning(Some(ChainId::Mainnet), Bytes::new());

        let err = read_contract_abi(
            &client,
            ReadContractAbiParams::new(ARBITRUM_SECURITY_COUNCIL_L1, safe_abi(), "isOwner")
                .with_args(vec![DynSolValue::Uint(U256::from(1), 256)]),
        )
        .await
        .unwrap_err();

        assert!(err.is_configuration(), "unexpected error: {err}");
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_read_contract_abi_empty_output_is_not_found() {
        let client = MockClient::returning(Some(ChainId::Mainnet), Bytes::new());

        let err = read_contract_abi(
            &client,
            ReadContractAbiParams::new(ARBITRUM_SECURITY_COUNCIL_L1, safe_abi(), "getOwners"),
        )
        .await
        .unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {err}");
    }
}
