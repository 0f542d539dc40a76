pub mod get_security_council;
pub mod read_contract;

use std::fmt;

use alloy::{dyn_abi::DynSolValue, sol_types::SolCall};

pub use get_security_council::{GET_SECURITY_COUNCIL, get_security_council};
pub use read_contract::{READ_CONTRACT, READ_CONTRACT_ABI, read_contract, read_contract_abi};

use crate::{
    client::ReadClient,
    errors::ActionError,
    types::{
        council::SecurityCouncil,
        params::{GetSecurityCouncilParams, ReadContractAbiParams, ReadContractParams},
    },
};

/// Names of the actions exposed by [`SecurityActions`].
pub const ACTION_NAMES: [&str; 3] = [GET_SECURITY_COUNCIL, READ_CONTRACT, READ_CONTRACT_ABI];

/// Security related read actions bound to a borrowed client.
///
/// Building one never touches the network; every method forwards to the action function
/// of the same name with the bound client.
pub struct SecurityActions<'a, C: ?Sized> {
    client: &'a C,
}

impl<C: ?Sized> Clone for SecurityActions<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for SecurityActions<'_, C> {}

impl<C: ?Sized> fmt::Debug for SecurityActions<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityActions")
            .field("actions", &ACTION_NAMES)
            .finish()
    }
}

impl<'a, C: ReadClient + ?Sized> SecurityActions<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a C {
        self.client
    }

    pub fn names(&self) -> &'static [&'static str] {
        &ACTION_NAMES
    }

    pub async fn get_security_council(
        &self,
        params: GetSecurityCouncilParams,
    ) -> Result<SecurityCouncil, ActionError> {
        get_security_council(self.client, params).await
    }

    pub async fn read_contract<Call: SolCall>(
        &self,
        params: ReadContractParams<Call>,
    ) -> Result<Call::Return, ActionError> {
        read_contract(self.client, params).await
    }

    pub async fn read_contract_abi(
        &self,
        params: ReadContractAbiParams,
    ) -> Result<Vec<DynSolValue>, ActionError> {
        read_contract_abi(self.client, params).await
    }
}

/// Builds the action set for `client`.
pub fn security_actions<C: ReadClient + ?Sized>(client: &C) -> SecurityActions<'_, C> {
    SecurityActions::new(client)
}

/// Adds `.security_actions()` to every client.
pub trait SecurityActionsExt: ReadClient {
    fn security_actions(&self) -> SecurityActions<'_, Self> {
        SecurityActions::new(self)
    }
}

impl<T: ReadClient + ?Sized> SecurityActionsExt for T {}
