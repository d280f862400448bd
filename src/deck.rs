//! The 52-card deck dealt from during a round.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeck;

/// An ordered sequence of cards drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a standard deck in construction order.
    ///
    /// Suits vary slowest (`♠ ♥ ♦ ♣`), ranks ascend from Ace to King within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Shuffles the remaining cards with the given random number generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the first card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop_front().ok_or(EmptyDeck)
    }

    /// Returns the card that the next draw would return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns an iterator over the remaining cards in draw order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a deck that draws the given cards in order.
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}
