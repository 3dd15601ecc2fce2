use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player's position at the table in heads-up poker.
/// Button posts the small blind, BigBlind posts the big blind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Button position (small blind in heads-up)
    Button,
    /// Big blind position
    BigBlind,
}

/// Represents a player action during a betting round.
///
/// `Bet` and `Raise` carry the number of chips the player moves into the
/// pot with this action, including the part that matches an outstanding bet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Open the betting with the given number of chips
    Bet(u32),
    /// Put the given number of chips in over a live bet
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// Represents a seat at the table: chip stack, hole cards and the
/// hand-scoped betting state.
///
/// The stack persists across hands; everything else is cleared by
/// [`Player::clear_hand`] at the start of each hand.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat index (0 or 1 in heads-up)
    id: usize,
    name: String,
    /// Current chip stack
    stack: u32,
    /// Table position (Button or BigBlind)
    position: Position,
    /// Hole cards (up to 2 cards)
    hole: Vec<Card>,
    /// Chips put in during the current betting round
    current_bet: u32,
    folded: bool,
    all_in: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, stack: u32, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            position,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            folded: false,
            all_in: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::IllegalAction(
                "hole cards already full".to_string(),
            ));
        }
        self.hole.push(c);
        Ok(())
    }

    /// Reset every hand-scoped field; the stack is untouched.
    pub fn clear_hand(&mut self) {
        self.hole.clear();
        self.current_bet = 0;
        self.folded = false;
        self.all_in = false;
    }

    pub fn set_stack(&mut self, stack: u32) {
        self.stack = stack;
    }

    /// Credit `amount` chips; fails without touching the stack on overflow.
    pub fn add_chips(&mut self, amount: u32) -> Result<(), GameError> {
        self.stack = self
            .stack
            .checked_add(amount)
            .ok_or(GameError::ChipOverflow { max: u32::MAX })?;
        Ok(())
    }

    /// Move `amount` chips from the stack into the current-round bet.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                requested: amount,
                available: self.stack,
            });
        }
        self.stack -= amount;
        self.current_bet += amount;
        if self.stack == 0 {
            self.all_in = true;
        }
        Ok(())
    }

    /// Take back chips from the current-round bet that can never be called.
    pub(crate) fn refund(&mut self, amount: u32) {
        let amount = amount.min(self.current_bet);
        self.current_bet -= amount;
        self.stack += amount;
        if self.stack > 0 {
            self.all_in = false;
        }
    }

    pub fn reset_bet(&mut self) {
        self.current_bet = 0;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }
}
