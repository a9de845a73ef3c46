use crate::action;
use crate::header;
use crate::summary;

/// Classification of a single raw log line. Ephemeral; drives per-hand
/// dispatch only and is never persisted.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LineKind {
    HandHeader,
    TableInfo,
    SeatDeclaration,
    StreetMarker,
    Action,
    CardDeal,
    PotCollection,
    UncalledBet,
    SummaryLine,
    Other,
}

/// Pure classifier mapping a trimmed line to its [`LineKind`].
///
/// Seat declarations carry `in chips`; a bare `Seat n:` line is a summary
/// result line. Not every line falls into a useful bucket - chat, timeouts,
/// and venue notices all land in [`LineKind::Other`] and are skipped.
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();
    if header::is_hand_header(line) {
        LineKind::HandHeader
    } else if line.starts_with("Table '") {
        LineKind::TableInfo
    } else if header::is_seat_declaration(line) {
        LineKind::SeatDeclaration
    } else if line.starts_with("***") {
        LineKind::StreetMarker
    } else if line.starts_with("Dealt to ") {
        LineKind::CardDeal
    } else if line.starts_with("Uncalled bet (") {
        LineKind::UncalledBet
    } else if summary::is_pot_collection(line) {
        LineKind::PotCollection
    } else if line.starts_with("Total pot ")
        || line.starts_with("Board [")
        || line.starts_with("Seat ")
    {
        LineKind::SummaryLine
    } else if action::is_action_line(line) {
        LineKind::Action
    } else {
        LineKind::Other
    }
}
