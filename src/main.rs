//! Teller
//!
//! A demo banking assistant: classifies free-text requests into intents,
//! extracts slots with regular expressions and dispatches to stub handlers.

mod accounts;
mod dispatch;
mod feedback;
mod intent;
mod session;
mod utils;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process;

use dispatch::Dispatcher;
use session::{Assistant, OutputFormat, Session};

/// Teller banking assistant
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(version = "0.1.0")]
#[command(about = "Regex-driven intent router for a demo banking assistant")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read requests from a file instead of standard input
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process requests line by line (default)
    Run,
    /// Classify a single request and print its parsing context
    Classify {
        /// The request text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match &cli.command {
        Some(Commands::Classify { text }) => classify(&text.join(" "), cli.format),
        Some(Commands::Version) => {
            println!("teller 0.1.0");
            println!("Demo banking assistant");
            println!("License: Apache-2.0");
            Ok(())
        }
        Some(Commands::Run) | None => run(cli.input.as_deref(), cli.format),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

/// Run the read loop over `input` or standard input
fn run(input: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let dispatcher = Dispatcher::standard();
    log::debug!("routes: {:?}", dispatcher.routes());
    let session = Session::new(Assistant::new(dispatcher), format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = session.run(reader, &mut out).context("session aborted")?;
    log::debug!("{:?}", stats);
    Ok(())
}

/// Print the detected intent and parsing context without dispatching
fn classify(text: &str, format: OutputFormat) -> anyhow::Result<()> {
    let kind = intent::detect(text);
    let context = intent::classify(text).with_context(|| format!("could not parse {} request", kind))?;

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            writeln!(out, "intent: {}", kind)?;
            writeln!(out, "{}", context)?;
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&context)?)?,
    }
    Ok(())
}
