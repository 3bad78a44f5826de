//! Slot extraction
//!
//! Each slot has one pattern and its own fallback rule:
//! - `source` / `destination`: last match wins, empty string when absent
//! - `amount` / `target`: first match wins, `SlotNotFound` when absent

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::utils::{Error, Result};

/// Account word following "from my " or "from "
static SOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"from\s(?:my\s)?(checking|savings|CD)").expect("source pattern"));

/// Account word following "to my " or "to "
static DESTINATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"to\s(?:my\s)?(checking|savings|CD)").expect("destination pattern"));

/// Digit run, optionally written as "$20" or "20 dollars"
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?(\d+)(?: dollars)?").expect("amount pattern"));

/// Any account word, case-insensitive
static TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(checking|savings|cd)").expect("target pattern"));

/// A structured field pulled out of free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Source,
    Destination,
    Amount,
    Target,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Source => "source account",
            Slot::Destination => "destination account",
            Slot::Amount => "amount",
            Slot::Target => "account",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extract a slot value from `text`
pub fn extract(text: &str, slot: Slot) -> Result<String> {
    match slot {
        Slot::Source => Ok(source(text)),
        Slot::Destination => Ok(destination(text)),
        Slot::Amount => amount(text),
        Slot::Target => target(text),
    }
}

/// Source account; the last "from ..." wins
pub fn source(text: &str) -> String {
    last_capture(&SOURCE_RE, text)
}

/// Destination account; the last "to ..." wins
pub fn destination(text: &str) -> String {
    last_capture(&DESTINATION_RE, text)
}

/// First digit run in the text, without `$` or "dollars"
pub fn amount(text: &str) -> Result<String> {
    first_capture(&AMOUNT_RE, text).ok_or(Error::SlotNotFound { slot: Slot::Amount })
}

/// First account word in the text, as the user wrote it
pub fn target(text: &str) -> Result<String> {
    first_capture(&TARGET_RE, text).ok_or(Error::SlotNotFound { slot: Slot::Target })
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

// Every match overwrites the previous one.
fn last_capture(re: &Regex, text: &str) -> String {
    let mut result = String::new();
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            log::trace!("slot candidate {:?} at {}..{}", m.as_str(), m.start(), m.end());
            result = m.as_str().to_string();
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CD_TO_CHECKING: &str = "Can you transfer from my CD 200 dollars to my checking, please?";

    #[test]
    fn test_source_after_from_my() {
        assert_eq!(source(CD_TO_CHECKING), "CD");
        assert_eq!(source("Transfer $20 from checking to savings please."), "checking");
    }

    #[test]
    fn test_source_is_case_sensitive() {
        assert_eq!(source("move 5 from Checking to savings"), "");
        assert_eq!(source("move 5 from cd to savings"), "");
    }

    #[test]
    fn test_source_last_match_wins() {
        let text = "send from savings, no wait, from my checking to CD 30";
        assert_eq!(source(text), "checking");
    }

    #[test]
    fn test_source_missing_is_empty() {
        assert_eq!(source("transfer 40 dollars to savings"), "");
        assert_eq!(source("transfer from my brokerage"), "");
    }

    #[test]
    fn test_destination() {
        assert_eq!(destination(CD_TO_CHECKING), "checking");
        assert_eq!(destination("Transfer $20 from checking to savings please."), "savings");
        assert_eq!(destination("move 5 to my CD"), "CD");
        assert_eq!(destination("move 5 from savings"), "");
    }

    #[test]
    fn test_destination_last_match_wins() {
        assert_eq!(destination("send 10 to savings or to my CD"), "CD");
    }

    #[test]
    fn test_amount_forms() {
        assert_eq!(amount(CD_TO_CHECKING).unwrap(), "200");
        assert_eq!(amount("Transfer $20 from checking to savings please.").unwrap(), "20");
        assert_eq!(amount("send 75 to savings").unwrap(), "75");
    }

    #[test]
    fn test_amount_takes_first_digit_run() {
        assert_eq!(amount("move $15 then 30 dollars").unwrap(), "15");
        assert_eq!(amount("move 12.50 to savings").unwrap(), "12");
    }

    #[test]
    fn test_amount_missing() {
        let err = amount("transfer from checking to savings").unwrap_err();
        assert_eq!(err, Error::SlotNotFound { slot: Slot::Amount });
    }

    #[test]
    fn test_target_case_insensitive_first_match() {
        assert_eq!(target("Show me my savings balance").unwrap(), "savings");
        assert_eq!(target("view CHECKING then savings").unwrap(), "CHECKING");
        assert_eq!(target("balance of my Cd").unwrap(), "Cd");
    }

    #[test]
    fn test_target_missing() {
        let err = target("show me everything").unwrap_err();
        assert_eq!(err, Error::SlotNotFound { slot: Slot::Target });
    }

    #[test]
    fn test_extraction_is_idempotent() {
        for slot in [Slot::Source, Slot::Destination, Slot::Amount] {
            assert_eq!(extract(CD_TO_CHECKING, slot), extract(CD_TO_CHECKING, slot));
        }
        let text = "Show me my savings balance";
        assert_eq!(extract(text, Slot::Target), extract(text, Slot::Target));
    }
}
