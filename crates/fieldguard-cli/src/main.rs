//! FieldGuard Command-Line Client
//!
//! Runs the permission engine over JSON files: resolve levels, list
//! authorized fields, gate actions, redact documents and inspect updates.

mod executor;
mod formatter;
mod loader;

use clap::{Parser, Subcommand};
use fieldguard_core::Action;
use formatter::OutputFormat;
use std::path::PathBuf;

/// FieldGuard Command-Line Client
#[derive(Parser, Debug)]
#[command(name = "fieldguard")]
#[command(version, about = "Field-level permission engine")]
pub struct Args {
    /// Permission table (JSON object keyed by level name)
    #[arg(short = 't', long)]
    pub table: PathBuf,

    /// Schema field list (JSON array). Without it every path counts as declared
    #[arg(short = 's', long)]
    pub schema: Option<PathBuf>,

    /// Explicit permission level (repeatable, order preserved)
    #[arg(short = 'l', long = "level")]
    pub levels: Vec<String>,

    /// Disable authorization for this request
    #[arg(long, conflicts_with = "levels")]
    pub no_auth: bool,

    /// Embed the permission summary into redacted documents
    #[arg(long)]
    pub permissions: bool,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Engine operation to run.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the resolved permission levels
    Levels,

    /// Print the fields authorized for an action
    Fields {
        /// read, write, remove or find
        action: Action,
    },

    /// Check whether an action is permitted (exit status 1 if not)
    Check {
        /// read, write, remove or find
        action: Action,
    },

    /// Authorize a find and print the redacted documents
    Find {
        /// JSON file holding a document or an array of documents
        file: PathBuf,
    },

    /// Print the field paths an update payload touches
    UpdatePaths {
        /// JSON file holding the update payload
        file: PathBuf,

        /// Print only unwritable paths (exit status 1 if any)
        #[arg(long)]
        check: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fieldguard=info")),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the command, returning whether it succeeded.
fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let session = executor::Session::from_args(&args)?;
    let outcome = session.execute(&args.command)?;

    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    Ok(outcome.success)
}
