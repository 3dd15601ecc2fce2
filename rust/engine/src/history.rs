use serde::Serialize;

use crate::game::Phase;
use crate::hand::HandStrength;
use crate::rules::ValidatedAction;

/// Records a single applied action during a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct ActionRecord {
    /// Seat that acted (0 or 1)
    pub seat: usize,
    /// The phase in which the action occurred
    pub phase: Phase,
    /// The action as the engine applied it
    pub action: ValidatedAction,
}

/// How the hand ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum ResultReason {
    /// The given seat folded
    Fold { folded_seat: usize },
    Showdown,
}

/// Both players' best hands at showdown, indexed by seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ShowdownInfo {
    pub hands: [HandStrength; 2],
    /// Set when the pot was divided
    pub split: bool,
}

/// Outcome of a finished hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct HandResult {
    /// Seats that received chips from the pot
    pub winners: Vec<usize>,
    /// Pot size at distribution
    pub pot: u32,
    /// Chips paid to each seat
    pub payouts: [u32; 2],
    pub reason: ResultReason,
    pub showdown: Option<ShowdownInfo>,
    /// Chronological list of every applied action
    pub actions: Vec<ActionRecord>,
}

impl HandResult {
    /// Chips paid to `seat` from the pot.
    pub fn amount_won(&self, seat: usize) -> u32 {
        self.payouts.get(seat).copied().unwrap_or(0)
    }
}
