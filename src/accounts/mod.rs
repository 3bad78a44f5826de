//! Account Service collaborator
//!
//! Handlers only see the [`AccountService`] trait. The bundled
//! [`StubAccountService`] answers with fixed demo data and logs each call.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::utils::{Error, Result};

/// Opaque account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of a request an account is being resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRole {
    Source,
    Destination,
    Target,
}

/// Account operations the handlers depend on
pub trait AccountService {
    /// Map a slot value ("checking", "CD", ...) to an account id
    fn resolve_account_id(&self, role: AccountRole, slot: &str) -> Result<AccountId>;

    /// Current balance of an account
    fn get_balance(&self, id: &AccountId) -> Result<f64>;

    /// Whether `amount` may move from `from` to `to`
    fn validate_transfer(&self, from: &AccountId, to: &AccountId, amount: f64) -> Result<bool>;

    /// Move money; returns the amount actually moved
    fn execute_transfer(&self, from: &AccountId, to: &AccountId, amount: f64) -> Result<f64>;
}

pub const SOURCE_ID: &str = "sourceId";
pub const DESTINATION_ID: &str = "destinationId";
pub const TARGET_ID: &str = "targetAcctNumber";

const SOURCE_BALANCE: f64 = 100.0;
const DESTINATION_BALANCE: f64 = 1000.0;
const TARGET_BALANCE: f64 = 800.0;

/// Demo account service with fixed ids and balances.
///
/// Transfers credit the destination for the lifetime of this value only;
/// the source balance is left untouched. Create one per request.
#[derive(Debug, Default)]
pub struct StubAccountService {
    credits: RefCell<HashMap<AccountId, f64>>,
}

impl StubAccountService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountService for StubAccountService {
    fn resolve_account_id(&self, role: AccountRole, slot: &str) -> Result<AccountId> {
        let id = match role {
            AccountRole::Source => {
                log::info!("obtaining source account id for {:?}", slot);
                SOURCE_ID
            }
            AccountRole::Destination => {
                log::info!("obtaining destination account id for {:?}", slot);
                DESTINATION_ID
            }
            AccountRole::Target => {
                log::info!("obtaining target account id for {:?}", slot);
                TARGET_ID
            }
        };
        Ok(AccountId::new(id))
    }

    fn get_balance(&self, id: &AccountId) -> Result<f64> {
        log::info!("querying balance of {}", id);
        let base = match id.as_str() {
            SOURCE_ID => SOURCE_BALANCE,
            DESTINATION_ID => DESTINATION_BALANCE,
            TARGET_ID => TARGET_BALANCE,
            other => return Err(Error::AccountNotFound { id: other.to_string() }),
        };
        let credit = self.credits.borrow().get(id).copied().unwrap_or(0.0);
        Ok(base + credit)
    }

    fn validate_transfer(&self, from: &AccountId, to: &AccountId, amount: f64) -> Result<bool> {
        log::info!("validating transfer of {} from {} to {}", amount, from, to);
        Ok(true)
    }

    fn execute_transfer(&self, from: &AccountId, to: &AccountId, amount: f64) -> Result<f64> {
        log::info!("executing transfer of {} from {} to {}", amount, from, to);
        *self.credits.borrow_mut().entry(to.clone()).or_insert(0.0) += amount;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stub_ids_per_role() {
        let accounts = StubAccountService::new();
        assert_eq!(
            accounts.resolve_account_id(AccountRole::Source, "CD").unwrap(),
            AccountId::new(SOURCE_ID)
        );
        assert_eq!(
            accounts.resolve_account_id(AccountRole::Destination, "").unwrap(),
            AccountId::new(DESTINATION_ID)
        );
        assert_eq!(
            accounts.resolve_account_id(AccountRole::Target, "savings").unwrap(),
            AccountId::new(TARGET_ID)
        );
    }

    #[test]
    fn test_stub_balances() {
        let accounts = StubAccountService::new();
        assert_eq!(accounts.get_balance(&AccountId::new(SOURCE_ID)).unwrap(), 100.0);
        assert_eq!(accounts.get_balance(&AccountId::new(DESTINATION_ID)).unwrap(), 1000.0);
        assert_eq!(accounts.get_balance(&AccountId::new(TARGET_ID)).unwrap(), 800.0);
    }

    #[test]
    fn test_stub_unknown_account() {
        let accounts = StubAccountService::new();
        assert_eq!(
            accounts.get_balance(&AccountId::new("nope")).unwrap_err(),
            Error::AccountNotFound { id: "nope".into() }
        );
    }

    #[test]
    fn test_stub_transfer_credits_destination() {
        let accounts = StubAccountService::new();
        let from = AccountId::new(SOURCE_ID);
        let to = AccountId::new(DESTINATION_ID);

        assert!(accounts.validate_transfer(&from, &to, 200.0).unwrap());
        assert_eq!(accounts.execute_transfer(&from, &to, 200.0).unwrap(), 200.0);
        assert_eq!(accounts.get_balance(&to).unwrap(), 1200.0);
        assert_eq!(accounts.get_balance(&from).unwrap(), 100.0);
    }

    #[test]
    fn test_fresh_stub_forgets_credits() {
        let to = AccountId::new(DESTINATION_ID);
        let first = StubAccountService::new();
        first.execute_transfer(&AccountId::new(SOURCE_ID), &to, 50.0).unwrap();
        assert_eq!(StubAccountService::new().get_balance(&to).unwrap(), 1000.0);
    }
}
