pub mod council;
pub mod params;

use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::constants::{ARBITRUM_SECURITY_COUNCIL_L1, ARBITRUM_SECURITY_COUNCIL_L2, PublicRpcUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    Mainnet,
    Sepolia,
    Arbitrum,
    Optimism,
}

impl ChainId {
    pub const ALL: [ChainId; 4] = [
        ChainId::Mainnet,
        ChainId::Sepolia,
        ChainId::Arbitrum,
        ChainId::Optimism,
    ];

    pub fn to_u64(&self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Sepolia => 11155111,
            ChainId::Arbitrum => 42161,
            ChainId::Optimism => 10,
        }
    }

    pub fn from_u64(id: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.to_u64() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::Mainnet => "Ethereum",
            ChainId::Sepolia => "Sepolia",
            ChainId::Arbitrum => "Arbitrum One",
            ChainId::Optimism => "OP Mainnet",
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            ChainId::Mainnet => PublicRpcUrl::Mainnet.url(),
            ChainId::Sepolia => PublicRpcUrl::Sepolia.url(),
            ChainId::Arbitrum => PublicRpcUrl::Arbitrum.url(),
            ChainId::Optimism => PublicRpcUrl::Optimism.url(),
        }
    }

    /// Security council Safe deployed on this chain, if one is known.
    pub fn security_council(&self) -> Option<Address> {
        match self {
            ChainId::Mainnet => Some(ARBITRUM_SECURITY_COUNCIL_L1),
            ChainId::Arbitrum => Some(ARBITRUM_SECURITY_COUNCIL_L2),
            ChainId::Sepolia | ChainId::Optimism => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.to_u64())
    }
}
