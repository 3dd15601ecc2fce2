//! # holdem-engine: Heads-Up Texas Hold'em Core
//!
//! A deterministic no-limit Texas Hold'em engine for one human seat against
//! one computer seat. Provides cards and a seeded deck, seven-card hand
//! evaluation, betting validation and the hand state machine.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seeded multi-deck draw pile (ChaCha20 RNG)
//! - [`hand`] - Best-five-of-seven evaluation and comparison
//! - [`player`] - Player stack, hole cards and betting state
//! - [`rules`] - Action validation and blind sizes
//! - [`game`] - Hand phases and the decision-maker's view of the table
//! - [`engine`] - Betting-round state machine, showdown and pot payout
//! - [`history`] - Action log and hand results
//! - [`opponent`] - Seam for computer opponents
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards: Vec<Card> = ["AH", "KH", "QH", "JH", "10H", "2C", "3D"]
//!     .iter()
//!     .map(|s| s.parse().expect("valid card"))
//!     .collect();
//!
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.reset();
//! deck2.reset();
//! assert_eq!(deck1.deal_card(), deck2.deal_card());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod history;
pub mod opponent;
pub mod player;
pub mod rules;
