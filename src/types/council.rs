use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::ChainId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCouncil {
    pub chain: ChainId,
    /// The council Safe that was queried
    pub address: Address,
    pub members: Vec<Address>,
}

impl SecurityCouncil {
    pub fn is_member(&self, account: &Address) -> bool {
        self.members.contains(account)
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}
