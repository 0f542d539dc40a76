use std::time::Duration;

use anyhow::{Context, Result, anyhow};

use crate::{constants::DEFAULT_REQUEST_TIMEOUT, types::ChainId};

pub const RPC_URL_VAR: &str = "RPC_URL";
pub const CHAIN_ID_VAR: &str = "CHAIN_ID";
pub const RPC_TIMEOUT_SECS_VAR: &str = "RPC_TIMEOUT_SECS";

/// Connection settings for a [`PublicClient`](crate::client::PublicClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub chain: Option<ChainId>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(rpc_url: impl Into<String>, chain: Option<ChainId>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn for_chain(chain: ChainId) -> Self {
        Self::new(chain.default_rpc_url(), Some(chain))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rpc_url = lookup(RPC_URL_VAR).context("RPC_URL not set")?;

        let chain = match lookup(CHAIN_ID_VAR) {
            Some(raw) => {
                let id: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid CHAIN_ID '{}'", raw))?;

                Some(ChainId::from_u64(id).ok_or_else(|| anyhow!("Unsupported CHAIN_ID {}", id))?)
            }
            None => None,
        };

        let timeout = match lookup(RPC_TIMEOUT_SECS_VAR) {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid RPC_TIMEOUT_SECS '{}'", raw))?,
            ),
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            rpc_url,
            chain,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_minimal() {
        let config = ClientConfig::from_lookup(lookup_from(&[(RPC_URL_VAR, "http://localhost:8545")]))
            .expect("Failed to parse config");

        assert_eq!(config, ClientConfig::new("http://localhost:8545", None));
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (RPC_URL_VAR, "http://localhost:8545"),
            (CHAIN_ID_VAR, "42161"),
            (RPC_TIMEOUT_SECS_VAR, "5"),
        ]))
        .expect("Failed to parse config");

        assert_eq!(config.chain, Some(ChainId::Arbitrum));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_rpc_url() {
        let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();

        assert!(err.to_string().contains("RPC_URL"));
    }

    #[test]
    fn test_unsupported_chain_id() {
        let err = ClientConfig::from_lookup(lookup_from(&[
            (RPC_URL_VAR, "http://localhost:8545"),
            (CHAIN_ID_VAR, "137"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("Unsupported CHAIN_ID 137"));
    }

    #[test]
    fn test_non_numeric_chain_id() {
        let result = ClientConfig::from_lookup(lookup_from(&[
            (RPC_URL_VAR, "http://localhost:8545"),
            (CHAIN_ID_VAR, "mainnet"),
        ]));

        assert!(result.is_err());
    }
}
