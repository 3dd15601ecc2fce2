use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A draw pile built from one or more 52-card decks.
///
/// Cards are dealt from the top until the pile is exhausted; `reset` refills
/// and reshuffles with the deck's own seeded RNG, so two decks created with
/// the same seed deal identical sequences.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    num_decks: usize,
    rng: ChaCha20Rng,
    // fixed deal order restored by reset instead of shuffling
    preset: Option<Vec<Card>>,
}

impl Deck {
    pub fn new(num_decks: usize, seed: u64) -> Self {
        let num_decks = num_decks.max(1);
        // Keep initial order until reset is called explicitly
        Self {
            cards: Self::ordered(num_decks),
            position: 0,
            num_decks,
            rng: ChaCha20Rng::seed_from_u64(seed),
            preset: None,
        }
    }

    /// A deck that deals `cards` in order after every reset.
    ///
    /// The engine deals hole cards alternately starting with the big blind,
    /// then three flop cards, the turn and the river. No cards are burned.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.clone(),
            position: 0,
            num_decks: 1,
            rng: ChaCha20Rng::seed_from_u64(0),
            preset: Some(cards),
        }
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(1, seed)
    }

    fn ordered(num_decks: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(52 * num_decks);
        for _ in 0..num_decks {
            cards.extend(full_deck());
        }
        cards
    }

    /// Repopulate to the full 52×N cards and shuffle.
    pub fn reset(&mut self) {
        self.position = 0;
        if let Some(preset) = &self.preset {
            self.cards = preset.clone();
            return;
        }
        self.cards = Self::ordered(self.num_decks);
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

}
