use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, ShowdownError};
use crate::hand::BLACKJACK;
use crate::result::Outcome;

use super::{DealerStep, Game, GameState};

impl Game {
    /// Returns whether the dealer policy requires another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.score();
        let target = self.options.dealer_stands_at;

        if value < target {
            return true;
        }

        value == target && self.dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Plays one step of the dealer's hand.
    ///
    /// The dealer draws while below 17 (see
    /// [`GameOptions`](crate::options::GameOptions) for the threshold and the
    /// soft 17 rule). A bust ends the round as [`Outcome::DealerBust`]
    /// immediately after the draw that caused it. Once the dealer stands the
    /// game moves to [`GameState::GameOver`] without a classification; call
    /// [`Game::determine_winner`] next.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerStep, DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if !self.dealer_must_draw() {
            let score = self.dealer.score();
            log::debug!("dealer stands on {score}");
            self.state = GameState::GameOver;
            return Ok(DealerStep::Stand(score));
        }

        let card = self.draw()?;
        self.dealer.add_card(card);

        if self.dealer.is_bust() {
            self.finish(Outcome::DealerBust);
            return Ok(DealerStep::Bust(card));
        }

        Ok(DealerStep::Hit(card))
    }

    /// Plays the dealer's hand to completion.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out.
    pub fn dealer_action(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Hit(card) => drawn_cards.push(card),
                DealerStep::Bust(card) => {
                    drawn_cards.push(card);
                    break;
                }
                DealerStep::Stand(_) => break,
            }
        }

        Ok(drawn_cards)
    }

    /// Compares final scores once both sides have stood.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over, or if a bust or blackjack
    /// already decided it.
    pub fn determine_winner(&mut self) -> Result<Outcome, ShowdownError> {
        if self.state != GameState::GameOver {
            return Err(ShowdownError::InvalidState);
        }
        if self.outcome.is_some() {
            return Err(ShowdownError::AlreadyDecided);
        }

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        // Busts end the round as soon as they happen, so the first two arms
        // only fire for a game driven out of order.
        let outcome = if player_score > BLACKJACK {
            Outcome::PlayerBust
        } else if dealer_score > BLACKJACK {
            Outcome::DealerBust
        } else if player_score == dealer_score {
            Outcome::Push
        } else if player_score > dealer_score {
            Outcome::PlayerWin
        } else {
            Outcome::DealerWin
        };

        self.finish(outcome);
        Ok(outcome)
    }
}
