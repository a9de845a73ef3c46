use serde::{Deserialize, Serialize};

/// Represents a betting round in a no-limit hold'em hand, plus the showdown
/// phase that follows the river.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before the flop (hole cards dealt, blinds posted)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
    /// Cards revealed, no further betting
    Showdown,
}

impl Street {
    pub(crate) fn index(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 1,
            Street::Turn => 2,
            Street::River => 3,
            Street::Showdown => 4,
        }
    }
}

/// Tracks which street the lines currently being consumed belong to.
///
/// Transitions are driven solely by `*** FLOP ***` style marker lines and are
/// monotonically non-decreasing; a marker for an earlier street is ignored.
/// The initial state is [`Street::Preflop`], so blinds posted before the
/// `*** HOLE CARDS ***` marker are already tagged correctly.
#[derive(Debug, Clone)]
pub struct StreetTracker {
    current: Street,
}

impl Default for StreetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetTracker {
    pub fn new() -> Self {
        Self {
            current: Street::Preflop,
        }
    }

    pub fn current(&self) -> Street {
        self.current
    }

    /// Advances the tracker if `line` is a street marker for a later street.
    /// `*** SUMMARY ***` and unrecognized markers leave the state unchanged.
    pub fn observe_marker(&mut self, line: &str) {
        let next = if line.starts_with("*** HOLE CARDS ***") {
            Some(Street::Preflop)
        } else if line.starts_with("*** FLOP ***") {
            Some(Street::Flop)
        } else if line.starts_with("*** TURN ***") {
            Some(Street::Turn)
        } else if line.starts_with("*** RIVER ***") {
            Some(Street::River)
        } else if line.starts_with("*** SHOW DOWN ***") {
            Some(Street::Showdown)
        } else {
            None
        };
        if let Some(next) = next {
            if next > self.current {
                self.current = next;
            }
        }
    }
}
