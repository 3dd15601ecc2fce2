use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand categories, weakest to strongest. `Incomplete` marks a card set too
/// small to form a five-card hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    Incomplete = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Incomplete => "Incomplete Hand",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct HandStrength {
    pub category: Category,
    // ordered high -> low for tiebreaks; a wheel counts its Ace as 1
    pub tiebreakers: Vec<u8>,
    pub name: &'static str,
}

impl HandStrength {
    fn new(category: Category, tiebreakers: Vec<u8>) -> Self {
        Self {
            category,
            tiebreakers,
            name: category.name(),
        }
    }

    pub fn incomplete() -> Self {
        Self::new(Category::Incomplete, Vec::new())
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreakers.cmp(&b.tiebreakers),
        ord => ord,
    }
}

/// Lexicographic k-of-n index combinations.
///
/// Yields every ascending index set exactly once and then stops.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    fn step(&mut self) {
        let k = self.indices.len();
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        if current.is_empty() {
            self.done = true;
        } else {
            self.step();
        }
        Some(current)
    }
}

/// Rank the best five-card hand that can be formed from `cards`.
///
/// Fewer than five cards yields [`Category::Incomplete`]; more than five
/// evaluates every five-card subset and keeps the strongest.
pub fn evaluate_hand(cards: &[Card]) -> HandStrength {
    if cards.len() < 5 {
        return HandStrength::incomplete();
    }
    let mut best: Option<HandStrength> = None;
    for combo in Combinations::new(cards.len(), 5) {
        let five = [
            cards[combo[0]],
            cards[combo[1]],
            cards[combo[2]],
            cards[combo[3]],
            cards[combo[4]],
        ];
        let hs = evaluate_five(&five);
        if best.as_ref().is_none_or(|b| hs > *b) {
            best = Some(hs);
        }
    }
    best.unwrap_or_else(HandStrength::incomplete)
}

fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut ranks: Vec<u8> = cards.iter().map(Card::value).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &r in &ranks {
        rank_counts[r as usize] += 1;
    }
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_ranks(&ranks);

    if let (true, Some(run)) = (is_flush, &straight) {
        let category = if run[0] == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return HandStrength::new(category, run.clone());
    }

    let (quads, trips, pairs) = classify_multiples(&rank_counts);
    if let Some(&quad) = quads.first() {
        let kicker = ranks.iter().copied().find(|&r| r != quad).unwrap_or(0);
        return HandStrength::new(Category::FourOfAKind, vec![quad, kicker]);
    }
    if let (Some(&t), Some(&p)) = (trips.first(), pairs.first()) {
        return HandStrength::new(Category::FullHouse, vec![t, p]);
    }
    if is_flush {
        return HandStrength::new(Category::Flush, ranks);
    }
    if let Some(run) = straight {
        return HandStrength::new(Category::Straight, run);
    }
    if let Some(&t) = trips.first() {
        let mut k = vec![t];
        k.extend(ranks.iter().copied().filter(|&r| r != t));
        return HandStrength::new(Category::ThreeOfAKind, k);
    }
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let kicker = ranks
            .iter()
            .copied()
            .find(|&r| r != high && r != low)
            .unwrap_or(0);
        return HandStrength::new(Category::TwoPair, vec![high, low, kicker]);
    }
    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(ranks.iter().copied().filter(|&r| r != p));
        return HandStrength::new(Category::OnePair, k);
    }
    HandStrength::new(Category::HighCard, ranks)
}

/// Descending ranks of a five-card straight, or `None`. The wheel comes back
/// as `[5, 4, 3, 2, 1]` so it ranks below a six-high straight.
fn straight_ranks(sorted_desc: &[u8]) -> Option<Vec<u8>> {
    let mut uniq = sorted_desc.to_vec();
    uniq.dedup();
    if uniq.len() != 5 {
        return None;
    }
    if uniq[0] - uniq[4] == 4 {
        return Some(uniq);
    }
    if uniq == [14, 5, 4, 3, 2] {
        return Some(vec![5, 4, 3, 2, 1]);
    }
    None
}

// Rank groups, each ordered high -> low.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut quads = vec![];
    let mut trips = vec![];
    let mut pairs = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            c if c >= 4 => quads.push(r),
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    (quads, trips, pairs)
}
