//! Error handling for Teller

use crate::intent::{ContextKind, Slot};
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while handling a single request line.
///
/// Everything except `Io` is local to one line: the session loop reports it
/// and moves on to the next utterance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ==================== Routing Errors ====================

    #[error("no handler for this input ({kind} request)")]
    Unhandled { kind: ContextKind },

    // ==================== Extraction Errors ====================

    #[error("could not find the {slot} in your request")]
    SlotNotFound { slot: Slot },

    #[error("invalid amount: {value:?}")]
    InvalidAmount { value: String },

    // ==================== Account Service Errors ====================

    #[error("unknown account: {id}")]
    AccountNotFound { id: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// The slot this error is about, if any
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::SlotNotFound { slot } => Some(*slot),
            Self::InvalidAmount { .. } => Some(Slot::Amount),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
