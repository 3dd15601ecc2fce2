//! Draw estimation for a hand that is not yet complete.
//!
//! Counts are heuristics, not an enumeration: a four-card flush draw is worth
//! nine cards, an open-ended straight draw eight, and two unpaired hole cards
//! six cards to pair up. [`improvement_probability`] turns the total into the
//! usual "rule of 2 and 4" estimate.

use std::collections::HashSet;

use holdem_engine::cards::{all_suits, Card};
use holdem_engine::game::Phase;
use serde::{Deserialize, Serialize};

const FLUSH_OUTS: u32 = 9;
const OPEN_ENDED_OUTS: u32 = 8;
const PAIR_OUTS: u32 = 6;

/// Improving cards per draw type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outs {
    pub flush: u32,
    pub straight: u32,
    pub pair: u32,
}

impl Outs {
    pub fn total(&self) -> u32 {
        self.flush + self.straight + self.pair
    }
}

/// Estimate the outs for `hole` on `community`.
///
/// `known` holds every card the caller can see; each draw is capped by the
/// number of unseen cards, `52 - known.len()`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use holdem_ai::outs::calculate_outs;
/// use holdem_engine::cards::Card;
///
/// let parse = |s: &str| s.parse::<Card>().unwrap();
/// let hole = [parse("AH"), parse("KH")];
/// let board = [parse("2H"), parse("7H"), parse("9C")];
/// let known: HashSet<Card> = hole.iter().chain(board.iter()).copied().collect();
///
/// let outs = calculate_outs(&hole, &board, &known);
/// assert_eq!(outs.flush, 9);
/// assert_eq!(outs.pair, 6);
/// ```
pub fn calculate_outs(hole: &[Card], community: &[Card], known: &HashSet<Card>) -> Outs {
    let remaining = 52u32.saturating_sub(known.len() as u32);
    let cards: Vec<Card> = hole.iter().chain(community.iter()).copied().collect();

    let flush_draw = all_suits()
        .into_iter()
        .any(|suit| cards.iter().filter(|c| c.suit == suit).count() >= 4);

    let mut ranks: Vec<u8> = cards.iter().map(Card::value).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.dedup();
    let open_ended = ranks.len() >= 4 && ranks[0] - ranks[3] == 3;

    let unpaired_hole = hole.len() == 2 && hole[0].rank != hole[1].rank;

    let credit = |hit: bool, outs: u32| if hit { outs.min(remaining) } else { 0 };
    Outs {
        flush: credit(flush_draw, FLUSH_OUTS),
        straight: credit(open_ended, OPEN_ENDED_OUTS),
        pair: credit(unpaired_hole, PAIR_OUTS),
    }
}

/// Chance of improving by the river, `outs × cards to come × 2%`, capped at 1.
pub fn improvement_probability(total_outs: u32, phase: Phase) -> f64 {
    let cards_to_come = phase.cards_to_come();
    (f64::from(total_outs) * f64::from(cards_to_come) * 2.0 / 100.0).min(1.0)
}
