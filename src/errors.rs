use std::fmt::Display;

use alloy::transports::{RpcError as AlloyRpcError, TransportErrorKind};
use thiserror::Error;

use crate::types::ChainId;

/// Alloy RPC error type alias for convenience.
pub type AlloyError = AlloyRpcError<TransportErrorKind>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{msg}: {source}")]
    Rpc {
        msg: String,
        #[source]
        source: AlloyError,
    },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl TransportError {
    pub(crate) fn from_alloy<S: ToString>(msg: S, error: AlloyError) -> Self {
        TransportError::Rpc {
            msg: msg.to_string(),
            source: error,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no chain configured on the client and no chain override supplied")]
    ChainNotConfigured,
    #[error("unsupported chain id {0}")]
    UnsupportedChain(u64),
    #[error("no security council contract known for {0}")]
    MissingContract(ChainId),
    #[error("client is connected to {client} but the call targets {requested}")]
    ChainMismatch { client: ChainId, requested: ChainId },
    #[error("function `{0}` not found in ABI")]
    UnknownFunction(String),
    #[error("invalid arguments for `{function}`: {reason}")]
    InvalidArguments { function: String, reason: String },
    #[error("invalid RPC URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Failure of a single read issued through a client handle.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("execution reverted: {0}")]
    Reverted(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("{operation}: not found: {reason}")]
    NotFound {
        operation: &'static str,
        reason: String,
    },
    #[error("{operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },
    #[error("{operation}: {source}")]
    Configuration {
        operation: &'static str,
        #[source]
        source: ConfigurationError,
    },
}

impl ActionError {
    pub(crate) fn not_found<S: ToString>(operation: &'static str, reason: S) -> Self {
        ActionError::NotFound {
            operation,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed<S: ToString>(operation: &'static str, reason: S) -> Self {
        ActionError::Transport {
            operation,
            source: TransportError::Malformed(reason.to_string()),
        }
    }

    pub(crate) fn configuration(operation: &'static str, source: ConfigurationError) -> Self {
        ActionError::Configuration { operation, source }
    }

    pub(crate) fn from_read(operation: &'static str, error: ReadError) -> Self {
        match error {
            ReadError::Reverted(reason) => {
                ActionError::not_found(operation, format!("execution reverted: {reason}"))
            }
            ReadError::Transport(source) => ActionError::Transport { operation, source },
            ReadError::Configuration(source) => ActionError::Configuration { operation, source },
        }
    }

    /// Name of the action that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ActionError::NotFound { operation, .. }
            | ActionError::Transport { operation, .. }
            | ActionError::Configuration { operation, .. } => operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ActionError::NotFound { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ActionError::Transport { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ActionError::Configuration { .. })
    }
}

/// Extension trait for adding RPC context to Results containing Alloy errors.
///
/// Similar to `anyhow::Context`, this wraps the Alloy error into a [`TransportError`]
/// carrying a message describing the request that failed.
pub(crate) trait RpcResultExt<T> {
    fn rpc_context<C: Display>(self, context: C) -> Result<T, TransportError>;
}

impl<T> RpcResultExt<T> for Result<T, AlloyError> {
    fn rpc_context<C: Display>(self, context: C) -> Result<T, TransportError> {
        self.map_err(|e| TransportError::from_alloy(context.to_string(), e))
    }
}

/// Tags a client-level failure with the action it happened in.
pub(crate) trait ReadResultExt<T> {
    fn for_action(self, operation: &'static str) -> Result<T, ActionError>;
}

impl<T> ReadResultExt<T> for Result<T, ReadError> {
    fn for_action(self, operation: &'static str) -> Result<T, ActionError> {
        self.map_err(|e| ActionError::from_read(operation, e))
    }
}
