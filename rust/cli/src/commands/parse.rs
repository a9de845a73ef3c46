//! Parse command: hand-history text in, structured JSON records out.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use railbird_parser::reconcile_balance;

use crate::error::CliError;
use crate::ui;

/// Parses a hand-history log and writes the retained hands as a JSON array.
///
/// # Arguments
///
/// * `input` - Path to the hand-history text file
/// * `output` - Destination JSON path; defaults to `<input>_parsed.json`
/// * `out` - Output stream for the parse report
/// * `err` - Output stream for warnings
///
/// # Returns
///
/// `Ok(())` once the JSON file is written; any `Err` maps to exit code 2.
pub fn handle_parse_command(
    input: String,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;

    writeln!(
        out,
        "Parsing hand history file: {} ({})",
        input,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;

    let outcome = railbird_parser::parse(&text);
    let counters = outcome.counters;

    writeln!(out, "Parsed {} total hands", counters.total)?;
    writeln!(
        out,
        "Filtered out: {} tournament, {} PLO/Omaha, {} cancelled, {} other games",
        counters.tournament, counters.plo, counters.cancelled, counters.other_games
    )?;
    if counters.failed > 0 {
        ui::display_warning(
            err,
            &format!("{} hand(s) dropped as unparseable", counters.failed),
        )?;
    }
    writeln!(out, "Included {} hands for analysis", counters.included)?;

    let balanced = outcome
        .hands
        .iter()
        .filter(|h| reconcile_balance(h).is_balanced)
        .count();
    writeln!(
        out,
        "Financial balance validation: {}/{} hands balanced",
        balanced,
        outcome.hands.len()
    )?;

    let output_path = output.unwrap_or_else(|| default_output_path(&input));
    let json = serde_json::to_string_pretty(&outcome.hands)?;
    std::fs::write(&output_path, json)?;
    writeln!(out, "Output written to: {}", output_path)?;
    Ok(())
}

fn default_output_path(input: &str) -> String {
    let path = Path::new(input);
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => {
            let stem = &input[..input.len() - 4];
            format!("{stem}_parsed.json")
        }
        _ => format!("{input}_parsed.json"),
    }
}
