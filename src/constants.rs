use std::time::Duration;

use alloy_primitives::{Address, address};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// Arbitrum DAO security council Safes
pub const ARBITRUM_SECURITY_COUNCIL_L1: Address =
    address!("0xF06E95eF589D9c38af242a8AAee8375f14023F85");
pub const ARBITRUM_SECURITY_COUNCIL_L2: Address =
    address!("0x423552c0F05baCCac5Bfa91C6dCF1dc53a0A1641");

pub enum PublicRpcUrl {
    Mainnet,
    Sepolia,
    Arbitrum,
    Optimism,
}

impl PublicRpcUrl {
    pub fn url(&self) -> &'static str {
        match self {
            PublicRpcUrl::Mainnet => "https://eth.merkle.io",
            PublicRpcUrl::Sepolia => "https://sepolia.drpc.org",
            PublicRpcUrl::Arbitrum => "https://arb1.arbitrum.io/rpc",
            PublicRpcUrl::Optimism => "https://mainnet.optimism.io",
        }
    }
}
