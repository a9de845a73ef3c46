use std::collections::HashMap;

use crate::errors::ParseError;
use crate::street::Street;

/// Parses a textual chip amount such as `0.16` or `1.37`.
///
/// Returns [`ParseError::MalformedAmount`] carrying both the offending figure
/// and the full source line so the caller can emit a useful diagnostic.
pub fn parse_amount(raw: &str, line: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| ParseError::MalformedAmount {
        amount: trimmed.to_string(),
        line: line.to_string(),
    })
}

#[derive(Debug, Default, Clone)]
struct Account {
    by_street: [f64; 5],
    total: f64,
}

/// Per-hand investment ledger: running contribution per player per street plus
/// a running total per player.
///
/// A ledger is constructed fresh for every hand and destroyed once the hand
/// record is finalized; it is mutated only by the action resolver and the
/// uncalled-bet refund. Antes go through [`Ledger::post_ante`], which touches
/// the total but not the street figure, because antes sit outside the
/// betting-round economy even though they cost the player money.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-initializes the account for a seated player. Re-opening an
    /// existing account resets it (duplicate seat declarations: last write
    /// wins).
    pub fn open_account(&mut self, player: &str) {
        self.accounts.insert(player.to_string(), Account::default());
    }

    pub fn knows(&self, player: &str) -> bool {
        self.accounts.contains_key(player)
    }

    pub fn street_invested(&self, player: &str, street: Street) -> f64 {
        self.accounts
            .get(player)
            .map(|a| a.by_street[street.index()])
            .unwrap_or(0.0)
    }

    pub fn total_invested(&self, player: &str) -> f64 {
        self.accounts.get(player).map(|a| a.total).unwrap_or(0.0)
    }

    /// Adds `amount` to both the player's street figure and their total.
    pub fn invest(&mut self, player: &str, street: Street, amount: f64) {
        if let Some(account) = self.accounts.get_mut(player) {
            account.by_street[street.index()] += amount;
            account.total += amount;
        }
    }

    /// Adds an ante to the player's total without altering any street figure.
    pub fn post_ante(&mut self, player: &str, amount: f64) {
        if let Some(account) = self.accounts.get_mut(player) {
            account.total += amount;
        }
    }

    /// Returns an uncalled bet to its bettor. This is a pure refund against
    /// the total; already-recorded actions and street figures are untouched.
    pub fn refund(&mut self, player: &str, amount: f64) {
        if let Some(account) = self.accounts.get_mut(player) {
            account.total -= amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invest_updates_street_and_total() {
        let mut ledger = Ledger::new();
        ledger.open_account("alice");
        ledger.invest("alice", Street::Preflop, 0.02);
        ledger.invest("alice", Street::Flop, 0.08);
        assert_eq!(ledger.street_invested("alice", Street::Preflop), 0.02);
        assert_eq!(ledger.street_invested("alice", Street::Flop), 0.08);
        assert!((ledger.total_invested("alice") - 0.10).abs() < 1e-9);
    }

    #[test]
    fn ante_skips_street_figure() {
        let mut ledger = Ledger::new();
        ledger.open_account("alice");
        ledger.post_ante("alice", 0.04);
        assert_eq!(ledger.street_invested("alice", Street::Preflop), 0.0);
        assert_eq!(ledger.total_invested("alice"), 0.04);
    }

    #[test]
    fn refund_reduces_total_only() {
        let mut ledger = Ledger::new();
        ledger.open_account("alice");
        ledger.invest("alice", Street::River, 1.37);
        ledger.refund("alice", 1.37);
        assert_eq!(ledger.total_invested("alice"), 0.0);
        assert_eq!(ledger.street_invested("alice", Street::River), 1.37);
    }

    #[test]
    fn unknown_player_reads_zero_and_writes_are_ignored() {
        let mut ledger = Ledger::new();
        ledger.invest("ghost", Street::Preflop, 5.0);
        assert!(!ledger.knows("ghost"));
        assert_eq!(ledger.total_invested("ghost"), 0.0);
    }

    #[test]
    fn reopening_account_resets_it() {
        let mut ledger = Ledger::new();
        ledger.open_account("alice");
        ledger.invest("alice", Street::Preflop, 0.50);
        ledger.open_account("alice");
        assert_eq!(ledger.total_invested("alice"), 0.0);
    }

    #[test]
    fn malformed_amount_is_an_error() {
        let err = parse_amount("0.1.2x", "alice: calls 0.1.2x").unwrap_err();
        assert!(matches!(err, ParseError::MalformedAmount { .. }));
        assert!(parse_amount(" 0.16 ", "alice: calls 0.16").is_ok());
    }
}
