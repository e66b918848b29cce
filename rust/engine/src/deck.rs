use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_deck, Card};
use crate::errors::GameError;

/// Draw pile. The top of the deck is the end of `cards`; cards only ever leave from there.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    initial: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn standard(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep catalog order until shuffle is called explicitly
        Self {
            cards: standard_deck(),
            initial: standard_deck(),
            rng,
        }
    }

    /// Stacked deck, first element on top. Used for scripted games.
    pub fn from_top(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self {
            initial: cards.clone(),
            cards,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Restores every card in its starting order and value. The RNG keeps its
    /// position, so the next shuffle differs from the previous one.
    pub fn reset(&mut self) {
        self.cards = self.initial.clone();
    }

    pub fn pop_top(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Species};

    #[test]
    fn from_top_pops_in_listed_order() {
        let mut deck = Deck::from_top(vec![
            Card::flower(CardId(7), Species::Daisy, 2),
            Card::flower(CardId(8), Species::Rose, 5),
        ]);
        assert_eq!(deck.pop_top().unwrap().id, CardId(7));
        assert_eq!(deck.pop_top().unwrap().id, CardId(8));
        assert_eq!(deck.pop_top(), Err(GameError::EmptyDeck));
        assert!(deck.is_empty());
    }
}
