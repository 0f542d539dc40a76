pub mod rpc_client;

use alloy::rpc::types::BlockNumberOrTag;
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;

use crate::{errors::ReadError, types::ChainId};

pub use rpc_client::PublicClient;

/// A single read-only contract call, already bound to the chain it must run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    pub chain: ChainId,
    pub to: Address,
    pub data: Bytes,
    pub from: Option<Address>,
    pub block: BlockNumberOrTag,
}

impl CallRequest {
    pub fn new(chain: ChainId, to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            chain,
            to,
            data: data.into(),
            from: None,
            block: BlockNumberOrTag::Latest,
        }
    }

    pub fn with_from(mut self, from: Option<Address>) -> Self {
        self.from = from;
        self
    }

    pub fn with_block(mut self, block: Option<BlockNumberOrTag>) -> Self {
        self.block = block.unwrap_or_default();
        self
    }
}

/// Capability to perform read-only calls against a chain endpoint.
///
/// Actions only ever borrow an implementor of this trait; they never clone or mutate it.
#[async_trait]
pub trait ReadClient: Send + Sync {
    /// Chain the client is configured for, if any.
    fn chain(&self) -> Option<ChainId>;

    /// Executes one `eth_call` and returns the raw return data.
    async fn call(&self, request: CallRequest) -> Result<Bytes, ReadError>;
}
