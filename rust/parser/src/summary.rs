//! Single-pass extractors over a hand's trailing summary and showdown block,
//! plus the per-line deal/collection/refund parsers.
//!
//! These scans are independent of the street state machine: board, pot, rake,
//! winners, and showdown participants all come from dedicated passes over the
//! hand's lines.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::ledger::parse_amount;

static BOARD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Board \[\s*(.+?)\s*\]").expect("valid board pattern"));

static TOTAL_POT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Total pot ([\d.]+) \|").expect("valid pot pattern"));

static RAKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Rake ([\d.]+)").expect("valid rake pattern"));

static WINNER_WON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Seat \d+: (.+?) .*? and won \(").expect("valid winner pattern"));

static WINNER_COLLECTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Seat \d+: (.+?) .*? collected \(").expect("valid winner pattern"));

// Both side-pot spellings appear in the wild.
static COLLECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?) collected ([\d.]+) from (?:side[- ]pot|pot)").expect("valid collect pattern")
});

static UNCALLED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Uncalled bet \(([\d.]+)\) returned to (.+)$").expect("valid uncalled pattern")
});

static DEALT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Dealt to (.+?) \[(.+?)\]").expect("valid dealt pattern"));

static SHOWS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?): shows \[").expect("valid shows pattern"));

static MUCKS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?): mucks hand").expect("valid mucks pattern"));

pub fn is_pot_collection(line: &str) -> bool {
    COLLECT_RE.is_match(line)
}

/// `<name> collected <amt> from pot` (or side pot). Multiple collections per
/// player accumulate, which is how side pots are paid out.
pub fn parse_collection(line: &str) -> Option<(String, f64)> {
    let caps = COLLECT_RE.captures(line)?;
    match parse_amount(&caps[2], line) {
        Ok(amount) => Some((caps[1].trim().to_string(), amount)),
        Err(error) => {
            warn!(%error, line, "skipping collection with malformed amount");
            None
        }
    }
}

/// `Uncalled bet (<amt>) returned to <name>`.
pub fn parse_uncalled_bet(line: &str) -> Option<(String, f64)> {
    let caps = UNCALLED_RE.captures(line)?;
    match parse_amount(&caps[1], line) {
        Ok(amount) => Some((caps[2].trim().to_string(), amount)),
        Err(error) => {
            warn!(%error, line, "skipping uncalled bet with malformed amount");
            None
        }
    }
}

/// `Dealt to <name> [<cards>]`.
pub fn parse_dealt_cards(line: &str) -> Option<(String, String)> {
    let caps = DEALT_RE.captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

pub fn extract_board(lines: &[&str]) -> Vec<String> {
    for line in lines {
        if let Some(caps) = BOARD_RE.captures(line) {
            return caps[1].split_whitespace().map(str::to_string).collect();
        }
    }
    Vec::new()
}

pub fn extract_total_pot(lines: &[&str]) -> f64 {
    for line in lines {
        if let Some(caps) = TOTAL_POT_RE.captures(line) {
            match parse_amount(&caps[1], line) {
                Ok(pot) => return pot,
                Err(error) => warn!(%error, line, "malformed total pot"),
            }
        }
    }
    0.0
}

pub fn extract_rake(lines: &[&str]) -> f64 {
    for line in lines {
        if let Some(caps) = RAKE_RE.captures(line) {
            match parse_amount(&caps[1], line) {
                Ok(rake) => return rake,
                Err(error) => warn!(%error, line, "malformed rake"),
            }
        }
    }
    0.0
}

/// Winners according to the per-seat summary lines, covering both the
/// `... and won (X)` and `... collected (X)` phrasings.
pub fn extract_winners(lines: &[&str]) -> Vec<String> {
    let mut winners = Vec::new();
    for line in lines {
        if line.contains(" and won (") {
            if let Some(caps) = WINNER_WON_RE.captures(line) {
                winners.push(caps[1].to_string());
            }
        } else if line.contains(" collected (") && line.contains("Seat ") {
            if let Some(caps) = WINNER_COLLECTED_RE.captures(line) {
                winners.push(caps[1].to_string());
            }
        }
    }
    winners
}

/// Players who explicitly showed or mucked within the showdown block.
/// Reaching the block via fold does not count.
pub fn extract_showdown_players(lines: &[&str]) -> Vec<String> {
    let mut players = Vec::new();
    let mut in_showdown = false;
    for line in lines {
        if line.contains("*** SHOW DOWN ***") {
            in_showdown = true;
            continue;
        }
        if !in_showdown {
            continue;
        }
        if line.starts_with("***") || line.starts_with("Total pot") || line.starts_with("Seat ") {
            break;
        }
        if let Some(caps) = SHOWS_RE.captures(line) {
            players.push(caps[1].trim().to_string());
        } else if let Some(caps) = MUCKS_RE.captures(line) {
            players.push(caps[1].trim().to_string());
        }
    }
    players
}
