//! Shared test fixtures: a recording in-memory client and ABI helpers.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use alloy::transports::TransportErrorKind;
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;

use crate::{
    client::{CallRequest, ReadClient},
    errors::{ReadError, TransportError},
    types::ChainId,
};

type Handler = Box<dyn Fn(&CallRequest) -> Result<Bytes, ReadError> + Send + Sync>;

/// A [`ReadClient`] answering every call with a fixed handler and recording the requests.
pub struct MockClient {
    chain: Option<ChainId>,
    handler: Handler,
    calls: AtomicUsize,
    requests: Mutex<Vec<CallRequest>>,
}

impl MockClient {
    pub fn with_handler<F>(chain: Option<ChainId>, handler: F) -> Self
    where
        F: Fn(&CallRequest) -> Result<Bytes, ReadError> + Send + Sync + 'static,
    {
        Self {
            chain,
            handler: Box::new(handler),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(chain: Option<ChainId>, output: impl Into<Bytes>) -> Self {
        let output = output.into();
        Self::with_handler(chain, move |_| Ok(output.clone()))
    }

    pub fn reverting(chain: Option<ChainId>) -> Self {
        Self::with_handler(chain, |_| Err(ReadError::Reverted("execution reverted".to_string())))
    }

    pub fn timing_out(chain: Option<ChainId>) -> Self {
        Self::with_handler(chain, |_| {
            Err(ReadError::Transport(TransportError::from_alloy(
                "Failed to send an eth_call request",
                TransportErrorKind::custom_str("request timed out"),
            )))
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CallRequest> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ReadClient for MockClient {
    fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    async fn call(&self, request: CallRequest) -> Result<Bytes, ReadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let result = (self.handler)(&request);
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request);
        result
    }
}

/// `0xAAAA..AA` and `0xBBBB..BB`
pub fn council_members() -> Vec<Address> {
    vec![Address::repeat_byte(0xaa), Address::repeat_byte(0xbb)]
}
