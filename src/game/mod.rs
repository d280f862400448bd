//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, EmptyDeck};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::{DealerStep, GameState};

/// A single round of blackjack between one player and the dealer.
///
/// The game owns its deck and both hands. A new `Game` is created for every
/// round; once it reaches [`GameState::GameOver`] it never changes state again.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current game state.
    state: GameState,
    /// Classification, once the round has been decided.
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use commjack::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(options, &mut rng)
    }

    /// Creates a new game with a deck shuffled by the given generator.
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(options, deck)
    }

    /// Creates a new game seeded from the system clock.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        Self::new(options, seed)
    }

    /// Creates a new game that deals from `deck` as-is, without shuffling.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: GameState::PlayerTurn,
            outcome: None,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, EmptyDeck> {
        let card = self.deck.draw()?;
        log::debug!("drew {card}, {} cards left", self.deck.len());
        Ok(card)
    }

    /// Ends the round with the given classification.
    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::GameOver;
        self.outcome = Some(outcome);
        log::info!(
            "round over: {outcome} (player {}, dealer {})",
            self.player.score(),
            self.dealer.score()
        );
    }

    /// Deals two cards each, alternating player then dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck runs out.
    pub fn deal_initial_hands(&mut self) -> Result<(), DealError> {
        if self.state != GameState::PlayerTurn || !self.player.is_empty() || !self.dealer.is_empty()
        {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);

            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        Ok(())
    }

    /// Settles the round immediately if either side was dealt a blackjack.
    ///
    /// Returns the classification when the round is decided by the deal, in
    /// which case the game moves to [`GameState::GameOver`]. Returns `None`
    /// when play should continue, or when called at any point other than
    /// straight after dealing. Checking twice is harmless.
    pub fn check_initial_blackjack(&mut self) -> Option<Outcome> {
        if self.state != GameState::PlayerTurn || self.player.len() != 2 || self.dealer.len() != 2
        {
            return None;
        }

        let outcome = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => Outcome::PushBlackjack,
            (true, false) => Outcome::PlayerBlackjack,
            (false, true) => Outcome::DealerBlackjack,
            (false, false) => return None,
        };

        self.finish(outcome);
        Some(outcome)
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the round classification, if decided.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the full round result, if decided.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            player_blackjack: self.player.is_blackjack(),
            dealer_blackjack: self.dealer.is_blackjack(),
        })
    }
}
