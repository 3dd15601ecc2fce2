//! Rule-based opponent.
//!
//! Blends made-hand strength, draw potential from [`crate::outs`], pot odds
//! and a read on the opponent's sizing into a decision tree. Bluffs and
//! aggressive raises are drawn from an injected RNG so a seeded opponent
//! replays the same decisions.

use std::collections::HashSet;

use holdem_engine::cards::{all_suits, Card};
use holdem_engine::game::GameState;
use holdem_engine::hand::evaluate_hand;
use holdem_engine::opponent::AIOpponent;
use holdem_engine::player::PlayerAction;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::outs::{calculate_outs, improvement_probability};

const HERO_CALL_CHANCE: f64 = 0.4;

/// Playing style knobs, both probabilities in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Chance to raise a good-but-not-premium hand preflop
    pub aggression: f64,
    /// Chance to bluff when checked to with a weak hand
    pub bluff_frequency: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            aggression: 0.6,
            bluff_frequency: 0.4,
        }
    }
}

impl AiConfig {
    /// Both knobs pulled into `[0, 1]`; NaN counts as never.
    pub fn clamped(self) -> Self {
        fn probability(p: f64) -> f64 {
            if p.is_nan() {
                0.0
            } else {
                p.clamp(0.0, 1.0)
            }
        }
        Self {
            aggression: probability(self.aggression),
            bluff_frequency: probability(self.bluff_frequency),
        }
    }
}

/// Decision-tree opponent over an injected random source.
///
/// # Example
///
/// ```rust
/// use holdem_ai::poker_ai::PokerAI;
/// use holdem_ai::AIOpponent;
/// use holdem_engine::engine::Engine;
///
/// let mut ai = PokerAI::with_seed(7);
/// let mut engine = Engine::with_seed(42);
/// engine.start_new_hand().expect("fresh stacks");
///
/// // Seat 0 acts first on the opening hand; hand the seat to the AI too.
/// let seat = engine.to_act().expect("someone to act");
/// let applied = engine.take_turn(seat, &mut ai);
/// assert!(applied.is_ok());
/// assert_eq!(ai.name(), "PokerAI");
/// ```
#[derive(Debug, Clone)]
pub struct PokerAI<R = ChaCha20Rng> {
    config: AiConfig,
    rng: R,
}

impl PokerAI<ChaCha20Rng> {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(AiConfig::default(), ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_config(config: AiConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PokerAI<R> {
    /// Out-of-range probabilities in `config` are clamped into `[0, 1]`.
    pub fn with_rng(config: AiConfig, rng: R) -> Self {
        Self {
            config: config.clamped(),
            rng,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Pick an action for the seat described by `state`.
    ///
    /// The raw choice from the decision tree is mapped onto the actions that
    /// are legal in `state`; amounts never exceed `state.stack`.
    pub fn decide(&mut self, state: &GameState, hole: &[Card], community: &[Card]) -> PlayerAction {
        let raw = if state.is_preflop() {
            let strength = preflop_strength(hole);
            self.preflop_decision(state, strength)
        } else {
            let strength = evaluate_hand(&[hole, community].concat()).category.value() as f64 / 10.0;
            let known: HashSet<Card> = hole.iter().chain(community).copied().collect();
            let outs = calculate_outs(hole, community, &known);
            let potential = improvement_probability(outs.total(), state.phase);
            let opponent = opponent_strength(state, community);
            trace!(strength, potential, opponent, "postflop read");
            self.postflop_decision(state, strength.max(potential), opponent)
        };
        let action = legalize(state, raw);
        trace!(?raw, ?action, "ai decision");
        action
    }

    fn preflop_decision(&mut self, state: &GameState, strength: f64) -> PlayerAction {
        let to_call = state.to_call;
        let bb = state.big_blind;
        if strength > 0.8 {
            if to_call == 0 {
                PlayerAction::Raise(state.pot.saturating_mul(3) / 2)
            } else {
                PlayerAction::Raise(to_call.saturating_mul(4).max(bb.saturating_mul(2)))
            }
        } else if strength > 0.6 {
            let cheap = f64::from(to_call) < f64::from(state.stack) * 0.1;
            if cheap && self.rng.random_bool(self.config.aggression) {
                PlayerAction::Raise(to_call.saturating_mul(2).max(bb))
            } else {
                PlayerAction::Call
            }
        } else if strength > 0.4 {
            if to_call <= bb {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            }
        } else if to_call == 0 {
            if self.rng.random_bool(self.config.bluff_frequency) {
                PlayerAction::Bet(bb)
            } else {
                PlayerAction::Check
            }
        } else {
            PlayerAction::Fold
        }
    }

    fn postflop_decision(&mut self, state: &GameState, effective: f64, opponent: f64) -> PlayerAction {
        let to_call = state.to_call;
        let pot = state.pot;
        let stack = f64::from(state.stack);

        let mut adjusted_opp = opponent.min(0.8);
        if to_call > pot / 2 {
            adjusted_opp -= 0.1;
        }
        let win = effective - adjusted_opp + 0.5;
        let pot_odds = if to_call == 0 {
            0.0
        } else {
            f64::from(to_call) / f64::from(pot + to_call)
        };

        if (0.4..=0.7).contains(&effective)
            && to_call > 0
            && f64::from(to_call) < stack * 0.4
            && self.rng.random_bool(HERO_CALL_CHANCE)
        {
            return PlayerAction::Call;
        }

        if to_call == 0 {
            if win > 0.7 {
                return PlayerAction::Bet(pot.saturating_mul(3) / 4);
            }
            if effective < 0.4 && self.rng.random_bool(self.config.bluff_frequency) {
                return PlayerAction::Bet(pot);
            }
            return PlayerAction::Check;
        }

        if effective > 0.8 {
            PlayerAction::Raise(pot.saturating_mul(3) / 2)
        } else if effective > 0.6 && f64::from(to_call) < stack {
            PlayerAction::Call
        } else if effective < 0.4 && self.rng.random_bool(self.config.bluff_frequency / 2.0) {
            PlayerAction::Raise(pot.saturating_mul(2))
        } else if win > pot_odds || (win > 0.2 && win > pot_odds - 0.15) {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }
}

impl<R: Rng + Send> AIOpponent for PokerAI<R> {
    fn decide(&mut self, state: &GameState, hole_cards: &[Card], community_cards: &[Card]) -> PlayerAction {
        PokerAI::decide(self, state, hole_cards, community_cards)
    }

    fn name(&self) -> &str {
        "PokerAI"
    }
}

/// Starting-hand strength in `[0, 0.95]`; pairs score `0.6 + rank / 40`.
pub fn preflop_strength(hole: &[Card]) -> f64 {
    let [a, b] = match hole {
        [a, b] => [*a, *b],
        _ => return 0.0,
    };
    let (high, low) = if a.value() >= b.value() {
        (a.value(), b.value())
    } else {
        (b.value(), a.value())
    };
    if high == low {
        return 0.6 + f64::from(high) / 40.0;
    }
    let gap = high - low;
    let mut strength = f64::from(high) / 20.0;
    if a.suit == b.suit {
        strength += 0.1;
    }
    if gap < 3 {
        strength += 0.1;
    }
    if gap == 1 {
        strength += 0.05;
    }
    strength.min(0.95)
}

/// Read the opponent from their bet relative to the pot, plus a bump when a
/// three-flush is on board and they are betting into it.
pub fn opponent_strength(state: &GameState, community: &[Card]) -> f64 {
    let bet = f64::from(state.opponent_last_bet);
    let pot = f64::from(state.pot);
    let mut strength: f64 = if bet > pot * 0.8 {
        0.8
    } else if bet > pot * 0.5 {
        0.6
    } else if bet > 0.0 {
        0.5
    } else {
        0.3
    };
    let flush_board = all_suits()
        .into_iter()
        .any(|suit| community.iter().filter(|c| c.suit == suit).count() >= 3);
    if flush_board && state.opponent_last_bet > 0 {
        strength += 0.1;
    }
    strength.min(1.0)
}

// Map a raw decision onto the actions `state` allows.
fn legalize(state: &GameState, action: PlayerAction) -> PlayerAction {
    let to_call = state.to_call;
    let stack = state.stack;
    let passive = if to_call == 0 {
        PlayerAction::Check
    } else {
        PlayerAction::Call
    };
    match action {
        PlayerAction::Fold => {
            if to_call == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            }
        }
        PlayerAction::Check | PlayerAction::Call => {
            if to_call > 0 && action == PlayerAction::Check {
                PlayerAction::Fold
            } else {
                passive
            }
        }
        PlayerAction::AllIn => passive,
        PlayerAction::Bet(amount) | PlayerAction::Raise(amount) => {
            if state.opponent_stack == 0 || stack <= to_call {
                return passive;
            }
            let minimum = if state.current_bet == 0 {
                state.big_blind.max(1)
            } else {
                to_call.saturating_add(state.min_raise.max(1))
            };
            let amount = amount.max(minimum).min(stack);
            if amount <= to_call {
                passive
            } else if state.current_bet == 0 {
                PlayerAction::Bet(amount)
            } else {
                PlayerAction::Raise(amount)
            }
        }
    }
}
