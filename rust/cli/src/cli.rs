//! Clap argument types for the railbird binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "railbird",
    version,
    about = "Poker hand-history parsing and financial reconciliation"
)]
pub struct RailbirdCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a hand-history log into structured JSON hand records
    Parse {
        /// Path to the hand-history text file
        #[arg(long)]
        input: String,
        /// Output JSON path (defaults to `<input>_parsed.json`)
        #[arg(long)]
        output: Option<String>,
    },
    /// Audit the financial balance of previously parsed hands
    Balance {
        /// Path to a JSON file produced by `railbird parse`
        #[arg(long)]
        input: String,
        /// List every offending hand instead of the first few
        #[arg(long)]
        verbose: bool,
    },
}
