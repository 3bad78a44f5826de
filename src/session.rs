//! Read loop: one utterance per line, processed independently.
//!
//! A line that cannot be classified, parsed or dispatched produces an error
//! outcome and the loop moves on. Only failures of the input or output
//! stream end the session.

use clap::ValueEnum;
use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::accounts::{AccountService, StubAccountService};
use crate::dispatch::Dispatcher;
use crate::feedback::Outcome;
use crate::intent::{self, router};
use crate::utils::Result;

/// How outcomes are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable trace of each stage
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Classifies and dispatches single requests
#[derive(Debug, Default)]
pub struct Assistant {
    dispatcher: Dispatcher,
}

impl Assistant {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Handle a line against a fresh stub account session
    pub fn handle_line(&self, line_no: usize, line: &str) -> Outcome {
        self.handle_line_with(line_no, line, &StubAccountService::new())
    }

    pub fn handle_line_with(&self, line_no: usize, line: &str, accounts: &dyn AccountService) -> Outcome {
        let intent = router::detect(line);

        let context = match intent::classify(line) {
            Ok(context) => context,
            Err(e) => {
                log::warn!("line {}: {}", line_no, e);
                return Outcome::failure(line_no, line, intent, None, &e);
            }
        };

        match self.dispatcher.dispatch(&context, accounts) {
            Ok(result) => Outcome::success(line_no, line, context, result),
            Err(e) => {
                log::warn!("line {}: {}", line_no, e);
                Outcome::failure(line_no, line, intent, Some(context), &e)
            }
        }
    }
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct Session {
    assistant: Assistant,
    format: OutputFormat,
}

impl Session {
    pub fn new(assistant: Assistant, format: OutputFormat) -> Self {
        Self { assistant, format }
    }

    /// Process `reader` until end-of-stream, writing one outcome per line
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than aborting the
    /// run; only read and write failures end it.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, writer: &mut W) -> Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = decode_line(&buf);
            if line.trim().is_empty() {
                log::debug!("skipping blank line {}", line_no);
                continue;
            }

            let outcome = self.assistant.handle_line(line_no, &line);
            stats.processed += 1;
            if outcome.is_success() {
                stats.succeeded += 1;
            } else {
                stats.failed += 1;
            }

            match self.format {
                OutputFormat::Text => outcome.write_trace(writer)?,
                OutputFormat::Json => writeln!(writer, "{}", outcome.to_json_compact())?,
            }
            writer.flush()?;
        }

        log::info!(
            "session finished: {} processed, {} succeeded, {} failed",
            stats.processed,
            stats.succeeded,
            stats.failed
        );
        Ok(stats)
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        log::warn!("replaced invalid UTF-8 in {:?}", line);
    }
    line
}
