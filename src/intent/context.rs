//! Parsing contexts: the typed form of one parsed request

use serde::Serialize;
use std::fmt;

use super::slots::{extract, Slot};
use crate::utils::{Error, Result};

/// Discriminant of a [`ParsingContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    Empty,
    Transfer,
    Display,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContextKind::Empty => "empty",
            ContextKind::Transfer => "transfer",
            ContextKind::Display => "display",
        };
        f.write_str(name)
    }
}

/// Slots for a money transfer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferContext {
    pub request: String,
    /// `checking`, `savings`, `CD`, or empty
    pub source: String,
    /// `checking`, `savings`, `CD`, or empty
    pub destination: String,
    /// Digits only
    pub amount: String,
}

impl TransferContext {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(Self {
            request: line.to_string(),
            source: extract(line, Slot::Source)?,
            destination: extract(line, Slot::Destination)?,
            amount: extract(line, Slot::Amount)?,
        })
    }

    /// Requested amount as a number
    pub fn amount_value(&self) -> Result<f64> {
        self.amount.parse::<f64>().map_err(|_| Error::InvalidAmount {
            value: self.amount.clone(),
        })
    }
}

impl fmt::Display for TransferContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransferContext [request={}, source={}, destination={}, amount={}]",
            self.request, self.source, self.destination, self.amount
        )
    }
}

/// Slots for a balance inquiry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayContext {
    pub request: String,
    pub target: String,
}

impl DisplayContext {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(Self {
            request: line.to_string(),
            target: extract(line, Slot::Target)?,
        })
    }
}

impl fmt::Display for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayContext [request={}, target={}]", self.request, self.target)
    }
}

/// One parsed request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParsingContext {
    /// No recognized intent
    Empty,
    Transfer(TransferContext),
    Display(DisplayContext),
}

impl ParsingContext {
    pub fn kind(&self) -> ContextKind {
        match self {
            ParsingContext::Empty => ContextKind::Empty,
            ParsingContext::Transfer(_) => ContextKind::Transfer,
            ParsingContext::Display(_) => ContextKind::Display,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ParsingContext::Empty)
    }
}

impl fmt::Display for ParsingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsingContext::Empty => f.write_str("EmptyContext"),
            ParsingContext::Transfer(ctx) => ctx.fmt(f),
            ParsingContext::Display(ctx) => ctx.fmt(f),
        }
    }
}
