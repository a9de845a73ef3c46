use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ParseError;
use crate::ledger::{parse_amount, Ledger};
use crate::street::Street;

/// The closed set of action kinds the resolver can emit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SmallBlind,
    SmallBlindDead,
    BigBlind,
    Straddle,
    Ante,
    Fold,
    Check,
    Call,
    CallAllIn,
    Bet,
    BetAllIn,
    Raise,
    RaiseAllIn,
}

impl ActionKind {
    /// Forced posts are money put in before any voluntary decision: blinds,
    /// straddles, and antes. Used by the cancelled-hand check.
    pub fn is_forced_post(self) -> bool {
        matches!(
            self,
            ActionKind::SmallBlind
                | ActionKind::SmallBlindDead
                | ActionKind::BigBlind
                | ActionKind::Straddle
                | ActionKind::Ante
        )
    }
}

/// A single resolved player action, tagged with the street it occurred on and
/// the player's street investment after the action was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    #[serde(rename = "action")]
    pub kind: ActionKind,
    pub amount: f64,
    pub total_invested_this_street: f64,
    pub street: Street,
}

/// The ordered pattern table. Order is load-bearing: several phrasings are
/// textual prefixes of others, so every all-in variant must be tried before
/// its plain counterpart, and the dead small blind before the live one.
/// `action_priority` exposes the order for tests.
static ACTION_PATTERNS: Lazy<Vec<(Regex, ActionKind)>> = Lazy::new(|| {
    [
        (r"^(.+?): posts small blind \(dead\) ([\d.]+)", ActionKind::SmallBlindDead),
        (r"^(.+?): posts big blind ([\d.]+)", ActionKind::BigBlind),
        (r"^(.+?): posts small blind ([\d.]+)", ActionKind::SmallBlind),
        (r"^(.+?): posts straddle ([\d.]+)", ActionKind::Straddle),
        (r"^(.+?): posts the ante ([\d.]+)", ActionKind::Ante),
        (r"^(.+?): folds", ActionKind::Fold),
        (r"^(.+?): checks", ActionKind::Check),
        (r"^(.+?): calls ([\d.]+) and is all-in", ActionKind::CallAllIn),
        (r"^(.+?): bets ([\d.]+) and is all-in", ActionKind::BetAllIn),
        (r"^(.+?): raises ([\d.]+) and is all-in", ActionKind::RaiseAllIn),
        (r"^(.+?): calls ([\d.]+)$", ActionKind::Call),
        (r"^(.+?): bets ([\d.]+)$", ActionKind::Bet),
        (r"^(.+?): raises ([\d.]+) to ([\d.]+)$", ActionKind::Raise),
    ]
    .into_iter()
    .map(|(pattern, kind)| (Regex::new(pattern).expect("valid action pattern"), kind))
    .collect()
});

/// Returns the pattern priority order, highest priority first.
pub fn action_priority() -> Vec<ActionKind> {
    ACTION_PATTERNS.iter().map(|(_, kind)| *kind).collect()
}

/// Returns true if `line` matches any action phrasing, regardless of whether
/// the named player is seated. Used by the line classifier.
pub fn is_action_line(line: &str) -> bool {
    ACTION_PATTERNS.iter().any(|(re, _)| re.is_match(line))
}

/// Attempts to resolve `line` as a player action on `street`, updating the
/// ledger on success.
///
/// Patterns are tried strictly in priority order; the first match wins. Lines
/// naming a player with no seat declaration are ignored, as are lines whose
/// amounts fail to parse (each with a diagnostic) - neither is fatal to the
/// hand.
pub fn resolve_action(line: &str, street: Street, ledger: &mut Ledger) -> Option<ActionRecord> {
    for (re, kind) in ACTION_PATTERNS.iter() {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let player = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if !ledger.knows(player) {
            // Not a seated player; garbled line or chat noise.
            return None;
        }
        match apply(*kind, &caps, player, street, ledger, line) {
            Ok(record) => return Some(record),
            Err(error) => {
                warn!(%error, line, "skipping action with malformed amount");
                continue;
            }
        }
    }
    None
}

fn apply(
    kind: ActionKind,
    caps: &regex::Captures<'_>,
    player: &str,
    street: Street,
    ledger: &mut Ledger,
    line: &str,
) -> Result<ActionRecord, ParseError> {
    let prior = ledger.street_invested(player, street);
    let (amount, street_after) = match kind {
        ActionKind::Fold | ActionKind::Check => (0.0, prior),
        ActionKind::Ante => {
            let amount = parse_amount(&caps[2], line)?;
            ledger.post_ante(player, amount);
            (amount, prior)
        }
        ActionKind::Raise => {
            // The declared "to" target is authoritative; the amount is the
            // delta from the player's prior street investment, never the
            // textual "additional" figure.
            let target = parse_amount(&caps[3], line)?;
            let amount = target - prior;
            if amount > 0.0 {
                ledger.invest(player, street, amount);
            }
            (amount, target)
        }
        // RaiseAllIn carries no absolute target in the log, so it behaves
        // additively like a bet or call.
        _ => {
            let amount = parse_amount(&caps[2], line)?;
            if amount > 0.0 {
                ledger.invest(player, street, amount);
            }
            (amount, prior + amount)
        }
    };
    Ok(ActionRecord {
        player: player.to_string(),
        kind,
        amount,
        total_invested_this_street: street_after,
        street,
    })
}
