//! # railbird-parser: Hand-History Parsing Core
//!
//! Transforms plain-text poker hand-history logs into structured,
//! financially reconciled hand records. Tournament and PLO/Omaha hands are
//! classified and excluded; cancelled hands are filtered out; everything
//! retained is a no-limit hold'em cash hand whose ledger reconciles within
//! half a cent.
//!
//! ## Core Modules
//!
//! - [`lines`] - Pure per-line classification
//! - [`segment`] - Header-delimited hand segmentation
//! - [`header`] - Header, table/button, and seat parsing
//! - [`street`] - Betting-round state machine
//! - [`action`] - Ordered action-pattern dispatch and amount resolution
//! - [`ledger`] - Per-hand, per-street investment ledger
//! - [`summary`] - Board/pot/rake/winner/showdown extraction
//! - [`record`] - Finalized hand records and balance reconciliation
//! - [`filter`] - Hand classification and parse counters
//! - [`hand`] - Per-hand assembly from a segmented line group
//! - [`parse`] - Whole-log entry point
//! - [`errors`] - Error types for hand-level failures
//!
//! ## Quick Start
//!
//! ```rust
//! let log = "\
//! CoinPoker Hand #42: Hold'em No Limit (0.01/0.02 ) 2025/01/23 20:15:54 GMT
//! Table 'NL 2 I' 7-max Seat #1 is the button
//! Seat 1: alice (1.00 in chips)
//! Seat 2: bob (1.00 in chips)
//! alice: posts small blind 0.01
//! bob: posts big blind 0.02
//! alice: raises 0.02 to 0.04
//! bob: folds
//! Uncalled bet (0.02) returned to alice
//! alice collected 0.04 from pot
//! *** SUMMARY ***
//! Total pot 0.04 | Rake 0.00
//! ";
//!
//! let outcome = railbird_parser::parse(log);
//! assert_eq!(outcome.counters.included, 1);
//!
//! let check = railbird_parser::reconcile_balance(&outcome.hands[0]);
//! assert!(check.is_balanced);
//! ```
//!
//! ## Error Model
//!
//! Nothing is fatal to a run. An unparseable header drops that hand with a
//! diagnostic; an unrecognized or malformed line is skipped; an unknown
//! player is ignored. Imbalanced hands are still emitted, flagged via
//! `financial_summary.is_balanced`, leaving accept/reject policy to the
//! caller.

pub mod action;
pub mod errors;
pub mod filter;
pub mod hand;
pub mod header;
pub mod ledger;
pub mod lines;
pub mod parse;
pub mod record;
pub mod segment;
pub mod street;
pub mod summary;

pub use action::{ActionKind, ActionRecord};
pub use errors::ParseError;
pub use filter::{HandClass, ParseCounters};
pub use parse::{parse, ParseOutcome};
pub use record::{reconcile_balance, BalanceCheck, HandRecord, Player, BALANCE_EPSILON};
pub use street::Street;
