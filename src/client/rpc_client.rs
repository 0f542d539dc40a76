use std::time::Duration;

use alloy::{
    rpc::{
        client::{ClientBuilder, RpcClient},
        json_rpc::ErrorPayload,
        types::{TransactionInput, TransactionRequest},
    },
    transports::http::reqwest,
};
use alloy_primitives::{Bytes, U64};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, trace};

use super::{CallRequest, ReadClient};
use crate::{
    config::ClientConfig,
    constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT},
    errors::{AlloyError, ConfigurationError, ReadError, RpcResultExt, TransportError},
    types::ChainId,
};

// JSON-RPC error code geth and most providers use for reverted calls
const EXECUTION_REVERTED_CODE: i64 = 3;

/// Read-only JSON-RPC client bound to one endpoint.
/// It is cheap to clone, the inner RPC client is reference counted.
#[derive(Debug, Clone)]
pub struct PublicClient {
    inner: RpcClient,
    url: String,
    chain: Option<ChainId>,
}

impl PublicClient {
    pub fn new(rpc_url: &str, chain: Option<ChainId>) -> Result<Self, ConfigurationError> {
        Self::with_timeout(rpc_url, chain, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        rpc_url: &str,
        chain: Option<ChainId>,
        timeout: Duration,
    ) -> Result<Self, ConfigurationError> {
        let url = rpc_url
            .parse::<reqwest::Url>()
            .map_err(|e| ConfigurationError::InvalidUrl {
                url: rpc_url.to_string(),
                reason: e.to_string(),
            })?;

        let http_client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        let inner = ClientBuilder::default().http_with_client(http_client, url);

        Ok(Self {
            inner,
            url: rpc_url.to_string(),
            chain,
        })
    }

    pub fn for_chain(chain: ChainId) -> Result<Self, ConfigurationError> {
        Self::new(chain.default_rpc_url(), Some(chain))
    }

    pub fn new_mainnet() -> Result<Self, ConfigurationError> {
        Self::for_chain(ChainId::Mainnet)
    }

    pub fn new_sepolia() -> Result<Self, ConfigurationError> {
        Self::for_chain(ChainId::Sepolia)
    }

    pub fn new_arbitrum() -> Result<Self, ConfigurationError> {
        Self::for_chain(ChainId::Arbitrum)
    }

    pub fn new_optimism() -> Result<Self, ConfigurationError> {
        Self::for_chain(ChainId::Optimism)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigurationError> {
        Self::with_timeout(&config.rpc_url, config.chain, config.timeout)
    }

    pub fn new_from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;

        Ok(Self::from_config(&config)?)
    }

    pub fn get_url(&self) -> &str {
        &self.url
    }

    pub fn set_chain(&mut self, chain: Option<ChainId>) {
        self.chain = chain;
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_chain_id(&self) -> Result<u64, TransportError> {
        let response: Result<U64, _> = self
            .inner
            .request_noparams("eth_chainId")
            .await;
        let chain_id = response.rpc_context("Failed to get chain id")?;

        Ok(chain_id.to::<u64>())
    }

    /// Fills in the default chain from `eth_chainId` when none was configured.
    pub async fn with_detected_chain(mut self) -> Result<Self, ReadError> {
        if self.chain.is_none() {
            let id = self.get_chain_id().await?;
            let chain = ChainId::from_u64(id).ok_or(ConfigurationError::UnsupportedChain(id))?;

            debug!(%chain, "detected chain from endpoint");
            self.chain = Some(chain);
        }

        Ok(self)
    }
}

fn is_revert(payload: &ErrorPayload) -> bool {
    payload.code == EXECUTION_REVERTED_CODE || payload.message.to_lowercase().contains("revert")
}

// Error body some providers send along with a non-2xx status
#[derive(Deserialize)]
struct HttpErrorBody {
    error: ErrorPayload,
}

/// Returns the revert payload of `err`, whether it came back as a JSON-RPC error response
/// or inside the body of an HTTP error.
fn revert_payload(err: &AlloyError) -> Option<ErrorPayload> {
    if let Some(payload) = err.as_error_resp() {
        return is_revert(payload).then(|| payload.clone());
    }

    let http = err.as_transport_err()?.as_http_error()?;
    let body: HttpErrorBody = serde_json::from_str(&http.body).ok()?;

    is_revert(&body.error).then_some(body.error)
}

#[async_trait]
impl ReadClient for PublicClient {
    fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    #[instrument(
        level = "debug",
        skip(self, request),
        fields(chain = %request.chain, to = %request.to, block = %request.block)
    )]
    async fn call(&self, request: CallRequest) -> Result<Bytes, ReadError> {
        // One endpoint serves one chain; an unconfigured client trusts the caller.
        if let Some(client_chain) = self.chain {
            if client_chain != request.chain {
                return Err(ConfigurationError::ChainMismatch {
                    client: client_chain,
                    requested: request.chain,
                }
                .into());
            }
        }

        let CallRequest {
            to,
            data,
            from,
            block,
            ..
        } = request;

        let mut tx = TransactionRequest::default()
            .to(to)
            .input(TransactionInput::new(data));
        if let Some(from) = from {
            tx = tx.from(from);
        }

        trace!("Sending eth_call to {}", self.url);
        let response: Result<Bytes, _> = self
            .inner
            .request("eth_call", (tx, block))
            .await;

        match response {
            Ok(output) => {
                trace!(output_len = output.len(), "eth_call succeeded");
                Ok(output)
            }
            Err(e) => match revert_payload(&e) {
                Some(payload) => {
                    debug!(code = payload.code, message = %payload.message, "eth_call reverted");
                    Err(ReadError::Reverted(payload.message.to_string()))
                }
                None => Err(TransportError::from_alloy(
                    format!("Failed to send an eth_call request to {to} for block {block}"),
                    e,
                )
                .into()),
            },
        }
    }
}
