//! # Railbird CLI Library
//!
//! Command-line plumbing around the hand-history parsing core. The heavy
//! lifting lives in `railbird-parser`; this crate only reads files, writes
//! JSON, and renders reports.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `parse`: Parse a hand-history log into structured JSON hand records
//! - `balance`: Audit the financial balance of previously parsed hands

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
mod error;
pub mod logging;
pub mod ui;

use cli::{Commands, RailbirdCli};
use commands::{handle_balance_command, handle_parse_command};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = RailbirdCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;
            match e.kind() {
                // Help and version print to stdout and exit 0
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Parse { input, output } => {
                    handle_parse_command(input, output, out, err)
                }
                Commands::Balance { input, verbose } => {
                    handle_balance_command(input, verbose, out, err)
                }
            };
            match result {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_exits_zero() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["railbird", "--help"], &mut out, &mut err);
        assert_eq!(code, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("parse"));
        assert!(text.contains("balance"));
    }

    #[test]
    fn unknown_subcommand_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(vec!["railbird", "shuffle"], &mut out, &mut err);
        assert_eq!(code, 2);
        assert!(!err.is_empty());
    }

    #[test]
    fn parse_with_missing_file_exits_two() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec!["railbird", "parse", "--input", "/nonexistent/log.txt"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 2);
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("Failed to read"));
    }

    #[test]
    fn parse_then_balance_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("session.txt");
        std::fs::write(
            &input,
            "\
CoinPoker Hand #701: Hold'em No Limit (0.01/0.02 ) 2025/02/06 12:00:00 GMT
Table 'NL 2 I' 7-max Seat #2 is the button
Seat 1: a (1.00 in chips)
Seat 2: b (1.00 in chips)
a: posts small blind 0.01
b: posts big blind 0.02
a: raises 0.02 to 0.04
b: folds
Uncalled bet (0.02) returned to a
a collected 0.04 from pot
*** SUMMARY ***
Total pot 0.04 | Rake 0.00
",
        )
        .unwrap();
        let output = dir.path().join("session_parsed.json");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec![
                "railbird",
                "parse",
                "--input",
                input.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
            ],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            vec!["railbird", "balance", "--input", output.to_str().unwrap()],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
        assert!(String::from_utf8(out).unwrap().contains("Balanced: 1/1"));
    }
}
