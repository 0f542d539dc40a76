pub mod abi;
pub mod actions;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod types;

#[cfg(test)]
pub mod test_fixtures;

pub use actions::{SecurityActions, SecurityActionsExt, security_actions};
pub use client::{CallRequest, PublicClient, ReadClient};
pub use config::ClientConfig;
pub use errors::{ActionError, ConfigurationError, ReadError, TransportError};
pub use types::{
    ChainId,
    council::SecurityCouncil,
    params::{GetSecurityCouncilParams, ReadContractAbiParams, ReadContractParams},
};
