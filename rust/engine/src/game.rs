use serde::{Deserialize, Serialize};

/// Stage of a hand. Betting happens on the four streets; `Showdown` is
/// transient and `HandComplete` holds until the next hand starts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Both hands revealed and compared
    Showdown,
    /// Pot distributed; waiting for the next hand
    HandComplete,
}

impl Phase {
    /// Community cards on the table during this phase.
    pub fn board_len(self) -> usize {
        match self {
            Phase::Preflop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
            Phase::HandComplete => 0,
        }
    }

    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River
        )
    }

    /// The street that follows this one, `Showdown` after the river.
    pub fn next(self) -> Phase {
        match self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
            Phase::Showdown | Phase::HandComplete => Phase::HandComplete,
        }
    }

    /// Board cards still to be revealed before showdown.
    pub fn cards_to_come(self) -> u32 {
        match self {
            Phase::Flop => 2,
            Phase::Turn => 1,
            _ => 0,
        }
    }
}

/// What a decision maker sees when it is asked to act.
///
/// Built by [`crate::engine::Engine::game_state`] for the seat to act; every
/// amount is in chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Everything committed this hand, current-round bets included
    pub pot: u32,
    /// Chips needed to match the opponent's bet
    pub to_call: u32,
    /// Acting player's remaining stack
    pub stack: u32,
    /// Opponent's remaining stack (0 when all-in)
    pub opponent_stack: u32,
    pub phase: Phase,
    /// Opponent's bet in the current round
    pub opponent_last_bet: u32,
    /// Highest bet in the current round; 0 means nobody has opened
    pub current_bet: u32,
    /// Smallest legal raise increment over `to_call`
    pub min_raise: u32,
    pub big_blind: u32,
}

impl GameState {
    pub fn is_preflop(&self) -> bool {
        self.phase == Phase::Preflop
    }
}
