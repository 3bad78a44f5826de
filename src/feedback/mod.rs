//! Structured Feedback Module
//!
//! Turns the outcome of one request line into output:
//! - a human-readable trace of each stage
//! - one compact JSON object per line for scripted use
//! - error reports with stable codes and rephrasing suggestions

use serde::Serialize;
use std::io::{self, Write};

use crate::dispatch::ActionResult;
use crate::intent::{ContextKind, ParsingContext, Slot};
use crate::utils::Error;

// ==================== Structured Error Report ====================

/// A structured error report for one failed line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// Error code (e.g., "E0002")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Slot that could not be filled, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,

    /// How the user might rephrase
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub message: String,

    /// An utterance that would be understood
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Suggestion {
    fn new(message: &str, example: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            example: example.map(str::to_string),
        }
    }
}

impl ErrorReport {
    pub fn from_error(error: &Error) -> Self {
        let (code, suggestions) = generate_error_info(error);
        Self {
            code: code.to_string(),
            message: error.to_string(),
            slot: error.slot(),
            suggestions,
        }
    }
}

fn generate_error_info(error: &Error) -> (&'static str, Vec<Suggestion>) {
    match error {
        // ========== Unrecognized Request ==========
        Error::Unhandled { .. } => (
            "E0001",
            vec![
                Suggestion::new(
                    "Ask to transfer, send or move money",
                    Some("Transfer $20 from checking to savings"),
                ),
                Suggestion::new("Ask to show or view a balance", Some("Show me my savings balance")),
            ],
        ),

        // ========== Missing Slot ==========
        Error::SlotNotFound { slot: Slot::Amount } => (
            "E0002",
            vec![Suggestion::new(
                "Include the amount in digits",
                Some("Send 50 dollars from savings to checking"),
            )],
        ),
        Error::SlotNotFound { .. } => (
            "E0002",
            vec![Suggestion::new(
                "Name the account: checking, savings or CD",
                Some("Show me my checking balance"),
            )],
        ),

        // ========== Invalid Amount ==========
        Error::InvalidAmount { .. } => (
            "E0003",
            vec![Suggestion::new("Write the amount as a whole number", Some("$20"))],
        ),

        // ========== Account Service ==========
        Error::AccountNotFound { .. } => (
            "E0004",
            vec![Suggestion::new("Try again with a different account", None)],
        ),

        // ========== Default Case ==========
        Error::Io(_) => ("E9999", vec![]),
    }
}

// ==================== Per-line Outcome ====================

/// Everything known about one processed request line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// 1-based line number in the input
    pub line: usize,

    pub request: String,

    /// Intent picked by the router
    pub intent: ContextKind,

    /// Missing when slot extraction failed
    pub context: Option<ParsingContext>,

    /// `Empty` when the line failed
    pub result: ActionResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Outcome {
    pub fn success(line: usize, request: &str, context: ParsingContext, result: ActionResult) -> Self {
        Self {
            line,
            request: request.to_string(),
            intent: context.kind(),
            context: Some(context),
            result,
            error: None,
        }
    }

    pub fn failure(
        line: usize,
        request: &str,
        intent: ContextKind,
        context: Option<ParsingContext>,
        error: &Error,
    ) -> Self {
        Self {
            line,
            request: request.to_string(),
            intent,
            context,
            result: ActionResult::Empty,
            error: Some(ErrorReport::from_error(error)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_success()
    }

    /// Output as compact JSON (one line)
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Write the human-readable trace for this line
    pub fn write_trace<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "I received your request: '{}'", self.request)?;
        writeln!(out, "Let me see if I have enough information to start processing it.")?;

        match &self.context {
            Some(context) => {
                writeln!(out, "{}", context)?;
                if !context.is_empty() {
                    writeln!(out, "Executing {} with {}", self.intent, context)?;
                }
            }
            None => writeln!(out, "Could not build a {} context", self.intent)?,
        }

        match &self.error {
            None => writeln!(out, "{}", self.result)?,
            Some(report) => {
                writeln!(out, "Sorry, {} [{}]", report.message, report.code)?;
                for suggestion in &report.suggestions {
                    match &suggestion.example {
                        Some(example) => writeln!(out, "\t{}, e.g. '{}'", suggestion.message, example)?,
                        None => writeln!(out, "\t{}", suggestion.message)?,
                    }
                }
            }
        }
        Ok(())
    }
}
