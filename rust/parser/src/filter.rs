use serde::Serialize;

use crate::record::HandRecord;

/// Game designation retained for analysis; everything else is excluded.
const NLHE_CASH: &str = "Hold'em No Limit";

/// Mutually exclusive classification of a parsed hand; first match wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HandClass {
    /// Game type carries a tournament marker
    Tournament,
    /// Game type names PLO or Omaha
    Plo,
    /// No winner emerged: zero winnings with contributions, or zero winnings
    /// with only forced posts
    Cancelled,
    /// Plain no-limit hold'em cash hand, kept for analysis
    Included,
    /// Some other cash game type; excluded without its own counter bucket
    OtherGame,
}

pub fn classify_hand(hand: &HandRecord) -> HandClass {
    if hand.is_tournament {
        HandClass::Tournament
    } else if hand.is_plo {
        HandClass::Plo
    } else if is_cancelled(hand) {
        HandClass::Cancelled
    } else if hand.game_type.contains(NLHE_CASH) {
        HandClass::Included
    } else {
        HandClass::OtherGame
    }
}

fn is_cancelled(hand: &HandRecord) -> bool {
    let total_winnings: f64 = hand.players.iter().map(|p| p.amount_won).sum();
    let total_contributions: f64 = hand.players.iter().map(|p| p.total_invested).sum();
    if total_winnings <= 0.0 && total_contributions > 0.0 {
        return true;
    }
    let any_voluntary = hand.actions.iter().any(|a| !a.kind.is_forced_post());
    total_winnings <= 0.0 && !any_voluntary
}

/// Observability counters for one [`crate::parse`] run, returned alongside
/// the emitted hands rather than mutated in place.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseCounters {
    /// Hands that parsed structurally, whether or not they were kept
    pub total: u64,
    pub tournament: u64,
    pub plo: u64,
    pub cancelled: u64,
    /// Cash hands of some other game type
    pub other_games: u64,
    /// Segments dropped by a whole-hand parse failure
    pub failed: u64,
    pub included: u64,
}

impl ParseCounters {
    pub fn record(&mut self, class: HandClass) {
        self.total += 1;
        match class {
            HandClass::Tournament => self.tournament += 1,
            HandClass::Plo => self.plo += 1,
            HandClass::Cancelled => self.cancelled += 1,
            HandClass::OtherGame => self.other_games += 1,
            HandClass::Included => self.included += 1,
        }
    }
}
