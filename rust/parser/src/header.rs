use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::errors::ParseError;
use crate::ledger::parse_amount;

/// Identity fields from a hand header line:
/// `<Room> Hand #<id>: <game_type> (<stakes>) <timestamp>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub hand_id: String,
    pub game_type: String,
    pub stakes: String,
    pub timestamp: String,
}

// The room prefix is deliberately not pinned to one venue.
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?) Hand #(\d+): (.+?) \((.+?)\) (.+)$").expect("valid header pattern"));

static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Table '(.+?)' .*?Seat #(\d+) is the button").expect("valid table pattern")
});

static SEAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Seat (\d+): (.+?) \((.+?) in chips\)").expect("valid seat pattern")
});

pub fn is_hand_header(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

pub fn is_seat_declaration(line: &str) -> bool {
    SEAT_RE.is_match(line)
}

/// Parses the header line. An unparseable header drops the whole hand, so
/// this is the one place a pattern miss is an error rather than a skip.
pub fn parse_header(line: &str) -> Result<HeaderInfo, ParseError> {
    let caps = HEADER_RE
        .captures(line)
        .ok_or_else(|| ParseError::UnparseableHeader {
            line: line.to_string(),
        })?;
    Ok(HeaderInfo {
        hand_id: caps[2].to_string(),
        game_type: caps[3].to_string(),
        stakes: caps[4].to_string(),
        timestamp: caps[5].trim().to_string(),
    })
}

/// Best-effort parse of the table/button line. On a miss the table name
/// defaults to a placeholder and the button to seat 1; the hand is still
/// processed.
pub fn parse_table_info(line: &str) -> (String, u32) {
    match TABLE_RE.captures(line) {
        Some(caps) => {
            let button = caps[2].parse().unwrap_or(1);
            (caps[1].to_string(), button)
        }
        None => ("Unknown".to_string(), 1),
    }
}

/// Parses a `Seat <n>: <name> (<stack> in chips)` declaration into
/// (seat, name, starting stack). A malformed stack figure skips the seat with
/// a diagnostic rather than failing the hand.
pub fn parse_seat(line: &str) -> Option<(u32, String, f64)> {
    let caps = SEAT_RE.captures(line)?;
    let seat: u32 = match caps[1].parse() {
        Ok(v) => v,
        Err(_) => return None,
    };
    let name = caps[2].trim().to_string();
    match parse_amount(&caps[3], line) {
        Ok(stack) => Some((seat, name, stack)),
        Err(error) => {
            warn!(%error, line, "skipping seat with malformed stack");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_header() {
        let info = parse_header(
            "CoinPoker Hand #195885587: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT",
        )
        .unwrap();
        assert_eq!(info.hand_id, "195885587");
        assert_eq!(info.game_type, "Hold'em No Limit");
        assert_eq!(info.stakes, "0.01/0.02 ");
        assert_eq!(info.timestamp, "2025/01/23 20:15:54 GMT");
    }

    #[test]
    fn room_prefix_is_not_hardwired() {
        assert!(is_hand_header(
            "OtherRoom Hand #1: Hold'em No Limit (0.05/0.10) 2025/02/01 10:00:00 GMT"
        ));
        assert!(!is_hand_header("random chatter about Hand 5"));
    }

    #[test]
    fn unparseable_header_is_an_error() {
        let err = parse_header("*** SUMMARY ***").unwrap_err();
        assert!(matches!(err, ParseError::UnparseableHeader { .. }));
    }

    #[test]
    fn parses_table_and_button() {
        let (name, button) =
            parse_table_info("Table 'NL 2 I' 7-max Seat #7 is the button");
        assert_eq!(name, "NL 2 I");
        assert_eq!(button, 7);
    }

    #[test]
    fn table_parse_failure_falls_back_to_defaults() {
        let (name, button) = parse_table_info("Tournament table announcement");
        assert_eq!(name, "Unknown");
        assert_eq!(button, 1);
    }

    #[test]
    fn parses_seat_declaration() {
        let (seat, name, stack) = parse_seat("Seat 1: pmatheis (1.19 in chips)").unwrap();
        assert_eq!(seat, 1);
        assert_eq!(name, "pmatheis");
        assert_eq!(stack, 1.19);
    }

    #[test]
    fn summary_seat_line_is_not_a_declaration() {
        assert!(parse_seat("Seat 7: hero (button) collected (0.12)").is_none());
        assert!(!is_seat_declaration("Seat 3: villain folded on the Flop"));
    }

    #[test]
    fn malformed_stack_skips_seat() {
        assert!(parse_seat("Seat 2: broken (1.1.9 in chips)").is_none());
    }
}
