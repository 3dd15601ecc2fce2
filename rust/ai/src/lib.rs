//! # holdem-ai: Computer Opponent for Heads-Up Hold'em
//!
//! Provides the rule-based [`poker_ai::PokerAI`] and the draw estimator it
//! relies on. The engine drives any opponent through the [`AIOpponent`]
//! trait, re-exported here.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`poker_ai`] - Decision tree over hand strength, draws and pot odds
//! - [`outs`] - Flush, straight and pair outs with a rule-of-2/4 estimate
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::engine::{Engine, HUMAN_SEAT};
//! use holdem_engine::player::PlayerAction;
//!
//! let mut ai = create_ai("poker", 42).expect("known ai type");
//! let mut engine = Engine::with_seed(42);
//! engine.start_new_hand().expect("Failed to deal hand");
//!
//! engine.apply_action(HUMAN_SEAT, PlayerAction::Call).expect("limp");
//! let action = engine.ai_take_turn(ai.as_mut()).expect("ai acts");
//! println!("AI chose action: {:?}", action);
//! ```

pub use holdem_engine::opponent::AIOpponent;

pub mod outs;
pub mod poker_ai;

use poker_ai::PokerAI;

/// Factory function to create AI opponents by type string.
///
/// Returns `None` for an unknown type.
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("poker", 1).expect("known ai type");
/// assert_eq!(ai.name(), "PokerAI");
/// assert!(create_ai("oracle", 1).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "poker" | "default" => Some(Box::new(PokerAI::with_seed(seed))),
        _ => None,
    }
}
