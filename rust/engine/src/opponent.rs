use crate::cards::Card;
use crate::game::GameState;
use crate::player::PlayerAction;

/// Trait defining the interface for AI opponents.
///
/// The engine calls [`decide`](AIOpponent::decide) from
/// [`Engine::ai_take_turn`](crate::engine::Engine::ai_take_turn) with a typed
/// view of the table; implementors return one of `Fold`, `Check`, `Call`,
/// `Bet` or `Raise`.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_engine::cards::Card;
/// use holdem_engine::game::GameState;
/// use holdem_engine::opponent::AIOpponent;
/// use holdem_engine::player::PlayerAction;
///
/// struct CallingStation;
///
/// impl AIOpponent for CallingStation {
///     fn decide(&mut self, state: &GameState, _hole: &[Card], _board: &[Card]) -> PlayerAction {
///         if state.to_call == 0 {
///             PlayerAction::Check
///         } else {
///             PlayerAction::Call
///         }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Choose an action for the seat described by `state`.
    fn decide(
        &mut self,
        state: &GameState,
        hole_cards: &[Card],
        community_cards: &[Card],
    ) -> PlayerAction;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}
