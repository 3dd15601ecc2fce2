use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::GameState;
use crate::player::PlayerAction as A;

/// Default small blind in chips
pub const SMALL_BLIND: u32 = 10;
/// Default big blind in chips
pub const BIG_BLIND: u32 = 20;

/// An action after validation, carrying the exact number of chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the pot.
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => n,
        }
    }
}

/// Validates a player action against the betting state it is made in.
///
/// Converts a [`crate::player::PlayerAction`] into a [`ValidatedAction`],
/// enforcing heads-up no-limit betting rules:
///
/// * `Check` only with nothing to call, `Call` only facing a bet
/// * `Bet` only when the round has no live bet, at least one big blind
/// * `Raise` only over a live bet, by at least the last raise increment
/// * no bet or raise against an all-in opponent
///
/// A call for more than the stack becomes an all-in call; any bet or raise
/// of exactly the stack becomes [`ValidatedAction::AllIn`] regardless of the
/// minimums.
///
/// # Errors
///
/// - [`GameError::InsufficientChips`] - bet or raise above the stack
/// - [`GameError::InvalidBetAmount`] - bet or raise below the minimum
/// - [`GameError::IllegalAction`] - action not available in this state
///
/// # Examples
///
/// ```
/// use holdem_engine::game::{GameState, Phase};
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::errors::GameError;
///
/// let state = GameState {
///     pot: 30,
///     to_call: 10,
///     stack: 990,
///     opponent_stack: 980,
///     phase: Phase::Preflop,
///     opponent_last_bet: 20,
///     current_bet: 20,
///     min_raise: 20,
///     big_blind: 20,
/// };
///
/// assert_eq!(validate_action(&state, PlayerAction::Call), Ok(ValidatedAction::Call(10)));
/// assert_eq!(validate_action(&state, PlayerAction::Raise(50)), Ok(ValidatedAction::Raise(50)));
/// assert!(matches!(
///     validate_action(&state, PlayerAction::Raise(5_000)),
///     Err(GameError::InsufficientChips { .. })
/// ));
/// assert!(matches!(
///     validate_action(&state, PlayerAction::Check),
///     Err(GameError::IllegalAction(_))
/// ));
/// ```
pub fn validate_action(state: &GameState, action: A) -> Result<ValidatedAction, GameError> {
    let stack = state.stack;
    let to_call = state.to_call;
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::IllegalAction(format!(
                    "cannot check facing a bet of {to_call}"
                )))
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(GameError::IllegalAction(
                    "nothing to call, check instead".to_string(),
                ))
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if state.current_bet > 0 {
                return Err(GameError::IllegalAction(
                    "betting is already open, raise instead".to_string(),
                ));
            }
            ensure_opponent_can_respond(state)?;
            ensure_affordable(amount, stack)?;
            if amount == stack {
                return Ok(ValidatedAction::AllIn(stack));
            }
            let minimum = state.big_blind.max(1);
            if amount < minimum {
                return Err(GameError::InvalidBetAmount { amount, minimum });
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(amount) => {
            if state.current_bet == 0 {
                return Err(GameError::IllegalAction(
                    "no bet to raise, bet instead".to_string(),
                ));
            }
            ensure_opponent_can_respond(state)?;
            ensure_affordable(amount, stack)?;
            if amount == stack {
                return Ok(ValidatedAction::AllIn(stack));
            }
            let minimum = to_call.saturating_add(state.min_raise.max(1));
            if amount < minimum {
                return Err(GameError::InvalidBetAmount { amount, minimum });
            }
            Ok(ValidatedAction::Raise(amount))
        }
        A::AllIn => {
            if stack == 0 {
                return Err(GameError::IllegalAction("no chips left".to_string()));
            }
            if stack > to_call && state.opponent_stack == 0 {
                // nobody left to call the excess
                return if to_call > 0 {
                    Ok(ValidatedAction::Call(to_call))
                } else {
                    Err(GameError::IllegalAction("opponent is all-in".to_string()))
                };
            }
            Ok(ValidatedAction::AllIn(stack))
        }
    }
}

fn ensure_opponent_can_respond(state: &GameState) -> Result<(), GameError> {
    if state.opponent_stack == 0 {
        Err(GameError::IllegalAction("opponent is all-in".to_string()))
    } else {
        Ok(())
    }
}

fn ensure_affordable(amount: u32, stack: u32) -> Result<(), GameError> {
    if amount > stack {
        Err(GameError::InsufficientChips {
            requested: amount,
            available: stack,
        })
    } else {
        Ok(())
    }
}
