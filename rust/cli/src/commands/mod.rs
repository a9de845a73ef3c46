//! Command handler modules for the railbird CLI.
//!
//! Each subcommand follows the same pattern: a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` taking its output
//! streams as `&mut dyn Write` so tests can capture them.

mod balance;
mod parse;

pub use balance::handle_balance_command;
pub use parse::handle_parse_command;
