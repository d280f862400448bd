//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u8 = 21;

/// Returns the best score for the cards and whether an Ace is counted high.
///
/// Every Ace starts at 1; each one is then raised to 11 while the total stays
/// at or below 21.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.hard_value());
    }

    let mut is_soft = false;
    for _ in 0..aces {
        if value.saturating_add(10) <= BLACKJACK {
            value += 10;
            is_soft = true;
        }
    }

    (value, is_soft)
}

/// The cards held by the player or the dealer for one round.
///
/// A hand only ever grows; cards keep the order in which they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's up-card.
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Calculates the best score of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// The result exceeds 21 only when the hard total already does.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns the total with every Ace counted as 1.
    #[must_use]
    pub fn hard_score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.hard_value()))
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a blackjack (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a displayable view of the hand.
    ///
    /// With `hide_hole` set, only the first card is shown and the rest are
    /// masked. The full view appends the score.
    ///
    /// ```
    /// use commjack::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Hearts, Rank::King));
    ///
    /// assert_eq!(hand.view(false).to_string(), "♠A ♥K (total: 21)");
    /// assert_eq!(hand.view(true).to_string(), "♠A [hidden]");
    /// ```
    #[must_use]
    pub const fn view(&self, hide_hole: bool) -> HandView<'_> {
        HandView {
            hand: self,
            hide_hole,
        }
    }
}

/// Cards separated by single spaces, in the order they were dealt.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// A rendering of a hand, optionally hiding every card after the first.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a> {
    hand: &'a Hand,
    hide_hole: bool,
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hand.cards.first() {
            None => f.write_str("(no cards)"),
            Some(first) if self.hide_hole && self.hand.len() > 1 => {
                write!(f, "{first} [hidden]")
            }
            Some(_) => write!(f, "{} (total: {})", self.hand, self.hand.score()),
        }
    }
}
