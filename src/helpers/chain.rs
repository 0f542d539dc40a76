use crate::{client::ReadClient, errors::ConfigurationError, types::ChainId};

/// The chain an action runs on: the per-call override if given, else the client's chain.
pub fn resolve_chain<C: ReadClient + ?Sized>(
    client: &C,
    chain_override: Option<ChainId>,
) -> Result<ChainId, ConfigurationError> {
    chain_override
        .or_else(|| client.chain())
        .ok_or(ConfigurationError::ChainNotConfigured)
}
