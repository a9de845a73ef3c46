//! Balance command: post-hoc financial audit of parsed hand records.

use std::io::Write;

use railbird_parser::{reconcile_balance, HandRecord, BALANCE_EPSILON};

use crate::error::CliError;
use crate::ui;

/// How many offending hands are listed without `--verbose`.
const LIST_LIMIT: usize = 10;

/// Audits every hand in a parsed JSON file.
///
/// Two independent checks per hand: the net-result balance
/// (`sum(net_result) + rake` within epsilon of zero) and the pot check
/// (`sum(total_invested)` matching the declared total pot).
///
/// # Returns
///
/// `Ok(())` when every hand passes both checks; otherwise an `Err` that maps
/// to exit code 2, after the offenders have been reported.
pub fn handle_balance_command(
    input: String,
    verbose: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let json = std::fs::read_to_string(&input)
        .map_err(|e| CliError::InvalidInput(format!("Failed to read {}: {}", input, e)))?;
    let hands: Vec<HandRecord> = serde_json::from_str(&json)?;

    let mut unbalanced: Vec<(String, f64)> = Vec::new();
    let mut pot_mismatches: Vec<(String, f64, f64)> = Vec::new();
    for hand in &hands {
        let check = reconcile_balance(hand);
        if !check.is_balanced {
            unbalanced.push((hand.hand_id.clone(), check.balance));
        }
        let invested: f64 = hand.players.iter().map(|p| p.total_invested).sum();
        if (invested - hand.total_pot).abs() >= BALANCE_EPSILON {
            pot_mismatches.push((hand.hand_id.clone(), invested, hand.total_pot));
        }
    }

    writeln!(out, "Audited {} hands from {}", hands.len(), input)?;
    writeln!(
        out,
        "Balanced: {}/{} | Pot matches: {}/{}",
        hands.len() - unbalanced.len(),
        hands.len(),
        hands.len() - pot_mismatches.len(),
        hands.len()
    )?;

    let limit = if verbose { usize::MAX } else { LIST_LIMIT };
    for (hand_id, balance) in unbalanced.iter().take(limit) {
        ui::display_warning(
            err,
            &format!("hand {} off balance by {:+.4}", hand_id, balance),
        )?;
    }
    for (hand_id, invested, pot) in pot_mismatches.iter().take(limit) {
        ui::display_warning(
            err,
            &format!(
                "hand {} invested {:.2} but declared pot {:.2}",
                hand_id, invested, pot
            ),
        )?;
    }
    if !verbose && unbalanced.len() > LIST_LIMIT {
        ui::display_warning(
            err,
            &format!("...and {} more (use --verbose)", unbalanced.len() - LIST_LIMIT),
        )?;
    }

    if unbalanced.is_empty() && pot_mismatches.is_empty() {
        Ok(())
    } else {
        Err(CliError::Parse(format!(
            "{} unbalanced hand(s), {} pot mismatch(es)",
            unbalanced.len(),
            pot_mismatches.len()
        )))
    }
}
