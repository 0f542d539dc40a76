use alloy::json_abi::JsonAbi;
use anyhow::{Context, Result};
use evm_security_actions::{
    GetSecurityCouncilParams, PublicClient, ReadContractAbiParams, SecurityActionsExt,
};
use tracing_subscriber::EnvFilter;

const SAFE_ABI: &str = r#"[
    {
        "inputs": [],
        "name": "getOwners",
        "outputs": [{ "internalType": "address[]", "name": "", "type": "address[]" }],
        "stateMutability": "view",
        "type": "function"
    }
]"#;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenvy::dotenv().ok();

    let client = if std::env::var("RPC_URL").is_ok() {
        PublicClient::new_from_env()?
            .with_detected_chain()
            .await
            .context("Failed to detect chain of RPC_URL")?
    } else {
        PublicClient::new_mainnet()?
    };

    let actions = client.security_actions();

    let council = actions
        .get_security_council(GetSecurityCouncilParams::new())
        .await
        .context("Failed to fetch security council members")?;

    println!(
        "Security council {} on {} has {} members:",
        council.address,
        council.chain,
        council.size()
    );
    for member in &council.members {
        println!("  {member}");
    }

    // Same read, resolved from a JSON ABI by function name
    let abi: JsonAbi = serde_json::from_str(SAFE_ABI).context("Failed to parse Safe ABI")?;
    let output = actions
        .read_contract_abi(ReadContractAbiParams::new(council.address, abi, "getOwners"))
        .await
        .context("Failed to read getOwners()")?;

    println!("getOwners() via ABI: {output:?}");

    Ok(())
}
