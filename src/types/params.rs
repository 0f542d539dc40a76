use alloy::{dyn_abi::DynSolValue, json_abi::JsonAbi, rpc::types::BlockNumberOrTag};
use alloy_primitives::Address;

use super::ChainId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSecurityCouncilParams {
    /// Overrides the client's configured chain.
    pub chain: Option<ChainId>,
    /// Council Safe to query instead of the chain's registered one.
    pub address: Option<Address>,
    pub block: Option<BlockNumberOrTag>,
}

impl GetSecurityCouncilParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, chain: ChainId) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn at_block(mut self, block: BlockNumberOrTag) -> Self {
        self.block = Some(block);
        self
    }
}

/// Parameters of a statically typed contract read; `C` is a `sol!` generated call.
#[derive(Debug, Clone)]
pub struct ReadContractParams<C> {
    pub address: Address,
    pub call: C,
    pub chain: Option<ChainId>,
    pub account: Option<Address>,
    pub block: Option<BlockNumberOrTag>,
}

impl<C> ReadContractParams<C> {
    pub fn new(address: Address, call: C) -> Self {
        Self {
            address,
            call,
            chain: None,
            account: None,
            block: None,
        }
    }

    pub fn with_chain(mut self, chain: ChainId) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn from_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    pub fn at_block(mut self, block: BlockNumberOrTag) -> Self {
        self.block = Some(block);
        self
    }
}

/// Parameters of a contract read resolved at runtime from a JSON ABI.
#[derive(Debug, Clone)]
pub struct ReadContractAbiParams {
    pub address: Address,
    pub abi: JsonAbi,
    pub function_name: String,
    pub args: Vec<DynSolValue>,
    pub chain: Option<ChainId>,
    pub account: Option<Address>,
    pub block: Option<BlockNumberOrTag>,
}

impl ReadContractAbiParams {
    pub fn new(address: Address, abi: JsonAbi, function_name: impl Into<String>) -> Self {
        Self {
            address,
            abi,
            function_name: function_name.into(),
            args: Vec::new(),
            chain: None,
            account: None,
            block: None,
        }
    }

    pub fn with_args(mut self, args: Vec<DynSolValue>) -> Self {
        self.args = args;
        self
    }

    pub fn with_chain(mut self, chain: ChainId) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn from_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    pub fn at_block(mut self, block: BlockNumberOrTag) -> Self {
        self.block = Some(block);
        self
    }
}
