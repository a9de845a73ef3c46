use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::ActionRecord;

/// Rounding slack absorbed by every balance comparison. Textual amounts carry
/// two decimal places, so anything under half a cent is noise.
pub const BALANCE_EPSILON: f64 = 0.005;

/// A player seated in one hand, with the financial outcome attached once the
/// hand is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// 1-based seat number, unique within the hand
    pub seat: u32,
    pub starting_stack: f64,
    /// `seat_<n>` label; refined positionally by downstream consumers
    pub position: String,
    pub hole_cards: Option<String>,
    pub final_hand: Option<String>,
    /// Accumulated across all pot and side-pot collections
    pub amount_won: f64,
    /// Net of uncalled-bet reversals
    pub total_invested: f64,
    /// `amount_won - total_invested`
    pub net_result: f64,
}

/// Per-hand financial roll-up embedded in the emitted record.
/// Contributions are negated so the whole map family sums toward zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub player_contributions: BTreeMap<String, f64>,
    /// Only players with winnings > 0 appear here
    pub player_winnings: BTreeMap<String, f64>,
    pub rake: f64,
    pub balance_check: f64,
    pub is_balanced: bool,
}

impl FinancialSummary {
    pub fn compute(players: &[Player], rake: f64) -> Self {
        let mut contributions = BTreeMap::new();
        let mut winnings = BTreeMap::new();
        let mut net_total = 0.0;
        for player in players {
            contributions.insert(player.name.clone(), -player.total_invested);
            if player.amount_won > 0.0 {
                winnings.insert(player.name.clone(), player.amount_won);
            }
            net_total += player.net_result;
        }
        let balance_check = net_total + rake;
        Self {
            player_contributions: contributions,
            player_winnings: winnings,
            rake,
            balance_check,
            is_balanced: balance_check.abs() < BALANCE_EPSILON,
        }
    }
}

/// A fully parsed, financially reconciled hand. Built once per
/// header-delimited segment and never mutated after finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub hand_id: String,
    pub game_type: String,
    pub stakes: String,
    pub table_name: String,
    pub timestamp: String,
    pub button_seat: u32,
    pub players: Vec<Player>,
    /// In source line order; downstream opportunity detection relies on this
    pub actions: Vec<ActionRecord>,
    /// 0, 3, 4, or 5 cards
    pub board: Vec<String>,
    pub total_pot: f64,
    pub rake: f64,
    pub winners: Vec<String>,
    pub showdown_players: Vec<String>,
    pub is_tournament: bool,
    pub is_plo: bool,
    pub financial_summary: FinancialSummary,
}

/// Result of the whole-hand balance check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// `sum(net_result) + rake`; near zero for a sound hand
    pub balance: f64,
    pub is_balanced: bool,
}

/// Pure post-hoc validation of a finalized record: the sum of player net
/// results plus the rake must vanish within [`BALANCE_EPSILON`].
pub fn reconcile_balance(hand: &HandRecord) -> BalanceCheck {
    let net_total: f64 = hand.players.iter().map(|p| p.net_result).sum();
    let balance = net_total + hand.rake;
    BalanceCheck {
        balance,
        is_balanced: balance.abs() < BALANCE_EPSILON,
    }
}
