//! Round orchestration.
//!
//! A [`Table`] runs one [`Game`] from the deal to the result, asking a
//! [`Decider`] for the player's moves and a [`Commentary`] for the dealer's
//! lines along the way.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::commentary::{Commentary, Commentator, Prompt};
use crate::decider::Decider;
use crate::error::{ActionError, RoundError, ShowdownError};
use crate::game::{DealerStep, Game, GameState};
use crate::result::RoundResult;

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Both hands received their first two cards.
    Dealt,
    /// The dealer said something.
    Comment(&'a str),
    /// The player drew a card.
    PlayerHit(Card),
    /// The player stood.
    PlayerStood,
    /// The dealer drew a card.
    DealerHit(Card),
    /// The dealer drew a card and busted.
    DealerBust(Card),
    /// The dealer stood on the given score.
    DealerStood(u8),
    /// The round was classified.
    Finished(RoundResult),
}

/// Everything a finished round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The classified result.
    pub result: RoundResult,
    /// Dealer commentary, in the order it was said.
    pub commentary: Vec<String>,
}

#[cfg(feature = "std")]
fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}

#[cfg(not(feature = "std"))]
const fn pause(_duration: Duration) {}

/// Drives rounds with a decision source and a commentator.
#[derive(Debug, Clone)]
pub struct Table<D, C> {
    decider: D,
    commentary: Commentary<C>,
}

impl<D: Decider, C: Commentator> Table<D, C> {
    /// Creates a table.
    #[must_use]
    pub const fn new(decider: D, commentary: Commentary<C>) -> Self {
        Self {
            decider,
            commentary,
        }
    }

    /// Returns the commentary.
    pub const fn commentary_mut(&mut self) -> &mut Commentary<C> {
        &mut self.commentary
    }

    /// Returns the decision source.
    pub const fn decider_mut(&mut self) -> &mut D {
        &mut self.decider
    }

    /// Plays a fresh game to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out or the decider stops supplying
    /// decisions. The round is abandoned in either case.
    pub fn play_round(&mut self, game: &mut Game) -> Result<RoundReport, RoundError> {
        self.play_round_with(game, |_, _| {})
    }

    /// Plays a fresh game to completion, reporting each [`Event`] to `observe`.
    ///
    /// # Errors
    ///
    /// See [`Table::play_round`].
    pub fn play_round_with<F>(
        &mut self,
        game: &mut Game,
        mut observe: F,
    ) -> Result<RoundReport, RoundError>
    where
        F: FnMut(&Game, &Event<'_>),
    {
        let mut commentary = Vec::new();

        game.deal_initial_hands()?;
        observe(game, &Event::Dealt);

        if game.check_initial_blackjack().is_none() {
            self.player_turn(game, &mut commentary, &mut observe)?;

            if game.state() == GameState::DealerTurn {
                Self::dealer_turn(game, &mut observe)?;
            }

            if game.outcome().is_none() {
                game.determine_winner()?;
            }
        }

        let result = game.result().ok_or(ShowdownError::InvalidState)?;
        observe(game, &Event::Finished(result));

        let prompt = Prompt::Result {
            outcome: result.outcome,
            player: game.player_hand(),
            dealer: game.dealer_hand(),
        };
        if let Some(line) = self.commentary.say(&prompt) {
            observe(game, &Event::Comment(&line));
            commentary.push(line);
        }

        Ok(RoundReport { result, commentary })
    }

    fn player_turn<F>(
        &mut self,
        game: &mut Game,
        commentary: &mut Vec<String>,
        observe: &mut F,
    ) -> Result<(), RoundError>
    where
        F: FnMut(&Game, &Event<'_>),
    {
        while game.state() == GameState::PlayerTurn {
            let up_card = game
                .dealer_hand()
                .up_card()
                .ok_or(ActionError::InvalidState)?;

            let prompt = Prompt::Action {
                player: game.player_hand(),
                up_card,
            };
            if let Some(line) = self.commentary.say(&prompt) {
                observe(game, &Event::Comment(&line));
                commentary.push(line);
            }

            let action = self
                .decider
                .decide(game.player_hand(), up_card)
                .ok_or(RoundError::NoDecision)?;

            match game.player_action(action)? {
                Some(card) => observe(game, &Event::PlayerHit(card)),
                None => observe(game, &Event::PlayerStood),
            }
        }

        Ok(())
    }

    fn dealer_turn<F>(game: &mut Game, observe: &mut F) -> Result<(), RoundError>
    where
        F: FnMut(&Game, &Event<'_>),
    {
        loop {
            match game.dealer_step()? {
                DealerStep::Hit(card) => {
                    observe(game, &Event::DealerHit(card));
                    pause(game.options.dealer_pause);
                }
                DealerStep::Bust(card) => {
                    observe(game, &Event::DealerBust(card));
                    return Ok(());
                }
                DealerStep::Stand(score) => {
                    observe(game, &Event::DealerStood(score));
                    return Ok(());
                }
            }
        }
    }
}
