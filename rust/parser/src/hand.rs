//! Per-hand assembly: a fresh [`HandContext`] consumes one header-delimited
//! line group and is finalized into an immutable [`HandRecord`].
//!
//! The context (ledger, action buffer, street tracker, seats) is constructed
//! per hand and never reused, so no parser state can leak between hands and
//! hands can be parsed independently of each other.

use std::collections::HashMap;

use crate::action::{self, ActionRecord};
use crate::errors::ParseError;
use crate::header;
use crate::ledger::Ledger;
use crate::lines::{classify, LineKind};
use crate::record::{FinancialSummary, HandRecord, Player};
use crate::street::StreetTracker;
use crate::summary;

#[derive(Debug, Default)]
struct HandContext {
    ledger: Ledger,
    actions: Vec<ActionRecord>,
    streets: StreetTracker,
    players: Vec<Player>,
    by_name: HashMap<String, usize>,
}

impl HandContext {
    fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            actions: Vec::new(),
            streets: StreetTracker::new(),
            players: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    fn seat_player(&mut self, line: &str) {
        let Some((seat, name, stack)) = header::parse_seat(line) else {
            return;
        };
        let player = Player {
            position: format!("seat_{seat}"),
            name: name.clone(),
            seat,
            starting_stack: stack,
            hole_cards: None,
            final_hand: None,
            amount_won: 0.0,
            total_invested: 0.0,
            net_result: 0.0,
        };
        // Duplicate declarations: last write wins, ledger reset included.
        match self.by_name.get(&name) {
            Some(&i) => self.players[i] = player,
            None => {
                self.by_name.insert(name.clone(), self.players.len());
                self.players.push(player);
            }
        }
        self.ledger.open_account(&name);
    }

    fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.by_name.get(name).map(|&i| &mut self.players[i])
    }

    fn consume(&mut self, line: &str) {
        match classify(line) {
            LineKind::SeatDeclaration => self.seat_player(line),
            LineKind::StreetMarker => self.streets.observe_marker(line),
            LineKind::Action => {
                let street = self.streets.current();
                if let Some(record) = action::resolve_action(line, street, &mut self.ledger) {
                    self.actions.push(record);
                }
            }
            LineKind::CardDeal => {
                if let Some((name, cards)) = summary::parse_dealt_cards(line) {
                    if let Some(player) = self.player_mut(&name) {
                        player.hole_cards = Some(cards);
                    }
                }
            }
            LineKind::PotCollection => {
                if let Some((name, amount)) = summary::parse_collection(line) {
                    if let Some(player) = self.player_mut(&name) {
                        player.amount_won += amount;
                    }
                }
            }
            LineKind::UncalledBet => {
                if let Some((name, amount)) = summary::parse_uncalled_bet(line) {
                    if self.ledger.knows(&name) {
                        self.ledger.refund(&name, amount);
                    }
                }
            }
            // Summary result lines are handled by the dedicated extractors;
            // headers and noise carry nothing for the ledger.
            LineKind::HandHeader
            | LineKind::TableInfo
            | LineKind::SummaryLine
            | LineKind::Other => {}
        }
    }

    /// Settles every player's total against the ledger and computes net
    /// results. The ledger dies here.
    fn finalize(mut self) -> (Vec<Player>, Vec<ActionRecord>) {
        for player in &mut self.players {
            player.total_invested = self.ledger.total_invested(&player.name);
            player.net_result = player.amount_won - player.total_invested;
        }
        (self.players, self.actions)
    }
}

/// Parses one segmented hand into a finalized [`HandRecord`].
///
/// Only structural failures (empty segment, unparseable header) are errors;
/// every per-line problem inside the hand degrades to a skipped line.
pub fn parse_hand(lines: &[&str]) -> Result<HandRecord, ParseError> {
    let first = lines.first().ok_or(ParseError::EmptySegment)?;
    let info = header::parse_header(first)?;

    let is_tournament = info.game_type.contains("Tournament");
    let is_plo = info.game_type.contains("PLO") || info.game_type.contains("Omaha");
    let (table_name, button_seat) = lines
        .get(1)
        .map(|l| header::parse_table_info(l))
        .unwrap_or_else(|| ("Unknown".to_string(), 1));

    let mut ctx = HandContext::new();
    for line in &lines[1..] {
        ctx.consume(line);
    }
    let (players, actions) = ctx.finalize();
    let rake = summary::extract_rake(lines);
    let financial_summary = FinancialSummary::compute(&players, rake);

    Ok(HandRecord {
        hand_id: info.hand_id,
        game_type: info.game_type,
        stakes: info.stakes,
        table_name,
        timestamp: info.timestamp,
        button_seat,
        players,
        actions,
        board: summary::extract_board(lines),
        total_pot: summary::extract_total_pot(lines),
        rake,
        winners: summary::extract_winners(lines),
        showdown_players: summary::extract_showdown_players(lines),
        is_tournament,
        is_plo,
        financial_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::street::Street;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().map(str::trim).collect()
    }

    const SIMPLE_HAND: &str = "\
CoinPoker Hand #195885587: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT
Table 'NL 2 I' 7-max Seat #7 is the button
Seat 1: pmatheis (1.19 in chips)
Seat 3: villain3 (2.00 in chips)
Seat 7: hero7 (2.64 in chips)
pmatheis: posts small blind 0.01
villain3: posts big blind 0.02
*** HOLE CARDS ***
Dealt to pmatheis [7c Kh]
hero7: raises 0.04 to 0.06
pmatheis: folds
villain3: calls 0.04
*** FLOP *** [2h 9d Qs]
villain3: checks
hero7: bets 0.08
villain3: folds
Uncalled bet (0.08) returned to hero7
hero7 collected 0.12 from pot
*** SUMMARY ***
Total pot 0.13 | Rake 0.01
Board [ 2h 9d Qs ]
Seat 3: villain3 (big blind) folded on the Flop
Seat 7: hero7 (button) collected (0.12)";

    #[test]
    fn parses_a_complete_hand() {
        let ls = lines(SIMPLE_HAND);
        let hand = parse_hand(&ls).unwrap();

        assert_eq!(hand.hand_id, "195885587");
        assert_eq!(hand.table_name, "NL 2 I");
        assert_eq!(hand.button_seat, 7);
        assert_eq!(hand.players.len(), 3);
        assert_eq!(hand.board, vec!["2h", "9d", "Qs"]);
        assert_eq!(hand.total_pot, 0.13);
        assert_eq!(hand.rake, 0.01);
        assert_eq!(hand.winners, vec!["hero7"]);
        assert!(hand.showdown_players.is_empty());
        assert!(!hand.is_tournament);
        assert!(!hand.is_plo);

        let hero = hand.players.iter().find(|p| p.name == "hero7").unwrap();
        assert!((hero.total_invested - 0.06).abs() < 1e-9);
        assert!((hero.amount_won - 0.12).abs() < 1e-9);
        assert!((hero.net_result - 0.06).abs() < 1e-9);
        let sb = hand.players.iter().find(|p| p.name == "pmatheis").unwrap();
        assert_eq!(sb.hole_cards.as_deref(), Some("7c Kh"));
        assert!((sb.net_result + 0.01).abs() < 1e-9);
        assert_eq!(sb.position, "seat_1");
    }

    #[test]
    fn action_order_matches_source_line_order() {
        let ls = lines(SIMPLE_HAND);
        let hand = parse_hand(&ls).unwrap();
        let kinds: Vec<ActionKind> = hand.actions.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActionKind::SmallBlind,
                ActionKind::BigBlind,
                ActionKind::Raise,
                ActionKind::Fold,
                ActionKind::Call,
                ActionKind::Check,
                ActionKind::Bet,
                ActionKind::Fold,
            ]
        );
        assert_eq!(hand.actions[2].street, Street::Preflop);
        assert_eq!(hand.actions[6].street, Street::Flop);
    }

    #[test]
    fn uncalled_bet_refunds_total_but_not_recorded_actions() {
        let ls = lines(SIMPLE_HAND);
        let hand = parse_hand(&ls).unwrap();
        let bet = hand
            .actions
            .iter()
            .find(|a| a.kind == ActionKind::Bet)
            .unwrap();
        // The flop bet stays on the books at its full size.
        assert!((bet.amount - 0.08).abs() < 1e-9);
        assert!((bet.total_invested_this_street - 0.08).abs() < 1e-9);
        // Only the settled total reflects the refund.
        let hero = hand.players.iter().find(|p| p.name == "hero7").unwrap();
        assert!((hero.total_invested - 0.06).abs() < 1e-9);
    }

    #[test]
    fn financial_summary_balances() {
        let ls = lines(SIMPLE_HAND);
        let hand = parse_hand(&ls).unwrap();
        assert!(hand.financial_summary.is_balanced);
        assert!((hand.financial_summary.balance_check).abs() < 0.005);
        assert_eq!(hand.financial_summary.player_contributions["hero7"], -0.06);
        assert!(!hand
            .financial_summary
            .player_winnings
            .contains_key("villain3"));
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert_eq!(parse_hand(&[]).unwrap_err(), ParseError::EmptySegment);
    }

    #[test]
    fn bad_header_drops_the_hand() {
        let ls = vec!["not a header", "Seat 1: a (1.00 in chips)"];
        assert!(matches!(
            parse_hand(&ls).unwrap_err(),
            ParseError::UnparseableHeader { .. }
        ));
    }

    #[test]
    fn header_only_segment_still_parses() {
        let ls =
            vec!["CoinPoker Hand #7: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT"];
        let hand = parse_hand(&ls).unwrap();
        assert_eq!(hand.table_name, "Unknown");
        assert_eq!(hand.button_seat, 1);
        assert!(hand.players.is_empty());
    }

    #[test]
    fn tournament_and_plo_flags_come_from_game_type() {
        let ls = vec![
            "CoinPoker Hand #8: Tournament Hold'em No Limit (100/200) 2025/01/23 21:00:00 GMT",
        ];
        let hand = parse_hand(&ls).unwrap();
        assert!(hand.is_tournament);

        let ls = vec!["CoinPoker Hand #9: PLO Pot Limit (0.05/0.10) 2025/01/23 21:00:00 GMT"];
        let hand = parse_hand(&ls).unwrap();
        assert!(hand.is_plo);
    }

    #[test]
    fn actions_from_unseated_players_are_dropped() {
        let text = "\
CoinPoker Hand #10: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT
Table 'NL 2 I' 7-max Seat #1 is the button
Seat 1: alice (1.00 in chips)
alice: posts small blind 0.01
ghost: posts big blind 0.02";
        let hand = parse_hand(&lines(text)).unwrap();
        assert_eq!(hand.actions.len(), 1);
        assert_eq!(hand.actions[0].player, "alice");
    }

    #[test]
    fn side_pot_collections_accumulate() {
        let text = "\
CoinPoker Hand #11: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT
Table 'NL 2 I' 7-max Seat #1 is the button
Seat 1: alice (1.00 in chips)
Seat 2: bob (0.50 in chips)
alice: posts small blind 0.01
bob: posts big blind 0.02
alice: bets 0.50
bob: calls 0.48 and is all-in
alice collected 0.23 from side-pot 1
alice collected 0.80 from pot
*** SUMMARY ***
Total pot 1.01 | Rake 0.00";
        let hand = parse_hand(&lines(text)).unwrap();
        let alice = hand.players.iter().find(|p| p.name == "alice").unwrap();
        assert!((alice.amount_won - 1.03).abs() < 1e-9);
        let all_in = hand
            .actions
            .iter()
            .find(|a| a.kind == ActionKind::CallAllIn)
            .unwrap();
        assert!((all_in.amount - 0.48).abs() < 1e-9);
        assert!((all_in.total_invested_this_street - 0.50).abs() < 1e-9);
    }
}
