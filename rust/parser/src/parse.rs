use tracing::{debug, warn};

use crate::filter::{classify_hand, HandClass, ParseCounters};
use crate::hand::parse_hand;
use crate::record::HandRecord;
use crate::segment::segment_hands;

/// Everything one parse run produces: the retained hands in file order and
/// the observability counters.
#[derive(Debug)]
pub struct ParseOutcome {
    pub hands: Vec<HandRecord>,
    pub counters: ParseCounters,
}

/// Parses a whole hand-history log.
///
/// Best-effort by contract: a hand that fails structurally is counted and
/// dropped with a diagnostic, and nothing aborts the run. Retained hands are
/// plain no-limit hold'em cash hands with a winner; tournament, PLO/Omaha,
/// cancelled, and other game types are counted but excluded. Emission order
/// equals file order.
pub fn parse(text: &str) -> ParseOutcome {
    let mut counters = ParseCounters::default();
    let mut hands = Vec::new();
    for group in segment_hands(text) {
        match parse_hand(&group) {
            Ok(hand) => {
                let class = classify_hand(&hand);
                counters.record(class);
                if class == HandClass::Included {
                    hands.push(hand);
                } else {
                    debug!(hand_id = %hand.hand_id, ?class, "excluding hand");
                }
            }
            Err(error) => {
                counters.failed += 1;
                warn!(%error, header = group.first().copied().unwrap_or(""), "dropping hand");
            }
        }
    }
    ParseOutcome { hands, counters }
}
