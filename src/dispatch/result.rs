//! Action results

use serde::Serialize;
use std::fmt;

use crate::accounts::AccountId;
use crate::intent::{DisplayContext, TransferContext};

/// Outcome of a transfer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferResult {
    pub context: TransferContext,
    pub source_account_id: AccountId,
    /// Source balance minus the requested amount
    pub source_balance_after: f64,
    pub destination_account_id: AccountId,
    /// Destination balance queried after the transfer
    pub destination_balance: f64,
    /// The full requested amount was moved
    pub success: bool,
}

impl fmt::Display for TransferResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransferResult [context={}, source_account={}, source_balance={:?}, \
             destination_account={}, destination_balance={:?}, success={}]",
            self.context,
            self.source_account_id,
            self.source_balance_after,
            self.destination_account_id,
            self.destination_balance,
            self.success
        )
    }
}

/// Outcome of a balance inquiry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayResult {
    pub context: DisplayContext,
    pub target_account_id: AccountId,
    pub target_balance: f64,
    pub success: bool,
}

impl fmt::Display for DisplayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DisplayResult [context={}, target_account={}, target_balance={:?}, success={}]",
            self.context, self.target_account_id, self.target_balance, self.success
        )
    }
}

/// What a handler produced for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActionResult {
    /// Nothing was executed
    Empty,
    Transfer(TransferResult),
    Display(DisplayResult),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        match self {
            ActionResult::Empty => false,
            ActionResult::Transfer(r) => r.success,
            ActionResult::Display(r) => r.success,
        }
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionResult::Empty => f.write_str("EmptyResult"),
            ActionResult::Transfer(r) => r.fmt(f),
            ActionResult::Display(r) => r.fmt(f),
        }
    }
}
