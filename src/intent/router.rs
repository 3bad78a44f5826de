//! Intent Router
//!
//! Picks the intent for a line by searching for trigger words. The transfer
//! trigger is tested first, so a line that mentions both "send" and
//! "balance" is a transfer. Triggers are unanchored substring searches:
//! "remove" counts as "move".

use regex::Regex;
use std::sync::LazyLock;

use super::context::{ContextKind, DisplayContext, ParsingContext, TransferContext};
use crate::utils::Result;

static TRANSFER_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)transfer|send|move").expect("transfer trigger"));

static DISPLAY_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)balance|view|show").expect("display trigger"));

/// Decide which intent `text` carries, without extracting slots
pub fn detect(text: &str) -> ContextKind {
    if TRANSFER_TRIGGER.is_match(text) {
        ContextKind::Transfer
    } else if DISPLAY_TRIGGER.is_match(text) {
        ContextKind::Display
    } else {
        ContextKind::Empty
    }
}

/// Classify `text` and build its parsing context
///
/// Fails only when the chosen intent is missing a required slot.
pub fn classify(text: &str) -> Result<ParsingContext> {
    let kind = detect(text);
    log::debug!("classified {:?} as {}", text, kind);

    let context = match kind {
        ContextKind::Transfer => ParsingContext::Transfer(TransferContext::parse(text)?),
        ContextKind::Display => ParsingContext::Display(DisplayContext::parse(text)?),
        ContextKind::Empty => ParsingContext::Empty,
    };
    Ok(context)
}
