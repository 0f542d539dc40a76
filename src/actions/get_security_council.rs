use alloy::sol_types::SolCall;
use tracing::{debug, instrument};

use crate::{
    abi::getOwnersCall,
    client::{CallRequest, ReadClient},
    errors::{ActionError, ConfigurationError, ReadResultExt},
    helpers::chain::resolve_chain,
    types::{council::SecurityCouncil, params::GetSecurityCouncilParams},
};

pub const GET_SECURITY_COUNCIL: &str = "getSecurityCouncil";

/// Retrieves the members of the security council Safe of the effective chain.
///
/// The effective chain is `params.chain` when supplied, else the client's chain. The
/// council contract is `params.address` when supplied, else the one registered for
/// that chain. Exactly one `getOwners()` call is issued.
///
/// # Errors
/// - `NotFound` if the call reverts, hits an address without code, or yields no members.
/// - `Transport` if the request fails or the response cannot be decoded.
/// - `Configuration` if no chain or no council contract can be resolved.
#[instrument(level = "debug", skip(client))]
pub async fn get_security_council<C: ReadClient + ?Sized>(
    client: &C,
    params: GetSecurityCouncilParams,
) -> Result<SecurityCouncil, ActionError> {
    let chain = resolve_chain(client, params.chain)
        .map_err(|e| ActionError::configuration(GET_SECURITY_COUNCIL, e))?;

    let address = params
        .address
        .or_else(|| chain.security_council())
        .ok_or_else(|| {
            ActionError::configuration(
                GET_SECURITY_COUNCIL,
                ConfigurationError::MissingContract(chain),
            )
        })?;

    let request =
        CallRequest::new(chain, address, getOwnersCall {}.abi_encode()).with_block(params.block);

    let output = client
        .call(request)
        .await
        .for_action(GET_SECURITY_COUNCIL)?;

    if output.is_empty() {
        return Err(ActionError::not_found(
            GET_SECURITY_COUNCIL,
            format!("no contract at {address} on {chain}"),
        ));
    }

    let members = getOwnersCall::abi_decode_returns(&output).map_err(|e| {
        ActionError::malformed(
            GET_SECURITY_COUNCIL,
            format!("failed to decode getOwners() output: {e}"),
        )
    })?;

    if members.is_empty() {
        return Err(ActionError::not_found(
            GET_SECURITY_COUNCIL,
            format!("council at {address} on {chain} has no members"),
        ));
    }

    debug!(members = members.len(), %address, "Fetched security council");

    Ok(SecurityCouncil {
        chain,
        address,
        members,
    })
}
