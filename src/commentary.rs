//! Dealer commentary boundary.
//!
//! The engine never talks to a language model itself. It renders a [`Prompt`]
//! from the table state and hands the text to a [`Commentator`]. Failures are
//! logged and swallowed by [`Commentary`]; they never change the round.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use core::fmt;

use crate::card::Card;
use crate::error::CommentaryError;
use crate::hand::Hand;
use crate::result::Outcome;

/// Persona instructions for commentators backed by a language model.
pub const SYSTEM_PROMPT: &str = "You are a friendly blackjack dealer. Looking at the player's \
situation, produce either a short line asking whether they want to hit or stand, or a line \
commenting on the outcome of the game. Encourage the player, tease them a little now and then, \
and keep the reply warm and human.";

/// Produces a line of commentary for a prompt.
pub trait Commentator {
    /// Returns the commentary for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`CommentaryError::Unavailable`] if no commentary could be produced.
    fn comment(&mut self, prompt: &str) -> Result<String, CommentaryError>;
}

impl<F> Commentator for F
where
    F: FnMut(&str) -> Result<String, CommentaryError>,
{
    fn comment(&mut self, prompt: &str) -> Result<String, CommentaryError> {
        self(prompt)
    }
}

/// What the dealer is asked to comment on.
#[derive(Debug, Clone, Copy)]
pub enum Prompt<'a> {
    /// Ask the player to hit or stand.
    Action {
        /// The player's hand.
        player: &'a Hand,
        /// The dealer's visible card.
        up_card: Card,
    },
    /// Comment on a finished round.
    Result {
        /// How the round ended.
        outcome: Outcome,
        /// The player's final hand.
        player: &'a Hand,
        /// The dealer's final hand.
        dealer: &'a Hand,
    },
    /// A connectivity check sent before the first round.
    Probe,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Action { player, up_card } => write!(
                f,
                "Action: The player's hand is {player} (total: {}). My visible card is {up_card}. \
                 Hit or stand? Give a line urging the player to choose.",
                player.score()
            ),
            Self::Result {
                outcome,
                player,
                dealer,
            } => {
                let p = player.score();
                let d = dealer.score();
                write!(f, "Result: {outcome}. Game over! ")?;
                match outcome {
                    Outcome::PlayerWin => write!(
                        f,
                        "The player ({p}) beat the dealer ({d})! Please congratulate the player."
                    ),
                    Outcome::DealerWin => write!(
                        f,
                        "The dealer ({d}) beat the player ({p}). Please console the player or \
                         comment as the dealer."
                    ),
                    Outcome::Push => write!(
                        f,
                        "The player ({p}) and the dealer ({d}) tied. Please comment on the push."
                    ),
                    Outcome::PlayerBust => write!(
                        f,
                        "The player busted with {player} (total: {p}). Please comment for the player."
                    ),
                    Outcome::DealerBust => write!(
                        f,
                        "The dealer busted with {dealer} (total: {d}). Please comment for the player."
                    ),
                    Outcome::PlayerBlackjack => write!(
                        f,
                        "The player has blackjack with {player}! Wonderful! Please congratulate \
                         the player."
                    ),
                    Outcome::DealerBlackjack => write!(
                        f,
                        "The dealer has blackjack with {dealer}! Too bad. Please comment for the \
                         player."
                    ),
                    Outcome::PushBlackjack => f.write_str(
                        "Both the player and the dealer have blackjack! It's a push. Please \
                         comment on this rare situation.",
                    ),
                }
            }
            Self::Probe => f.write_str("Connection test."),
        }
    }
}

/// Strips whitespace and wrapping quotes that models like to add.
fn clean(response: &str) -> String {
    response.trim().trim_matches('"').trim().to_owned()
}

/// A commentator with an on/off switch.
#[derive(Debug, Clone)]
pub struct Commentary<C> {
    commentator: C,
    disabled: bool,
}

impl<C: Commentator> Commentary<C> {
    /// Wraps a commentator. A disabled commentary never calls it.
    #[must_use]
    pub const fn new(commentator: C, disabled: bool) -> Self {
        Self {
            commentator,
            disabled,
        }
    }

    /// Returns the commentary for `prompt`.
    ///
    /// Returns `None` when disabled, or when the commentator fails, in which
    /// case a warning is logged.
    pub fn say(&mut self, prompt: &Prompt<'_>) -> Option<String> {
        if self.disabled {
            return None;
        }

        match self.commentator.comment(&prompt.to_string()) {
            Ok(response) => Some(clean(&response)),
            Err(err) => {
                log::warn!("dealer commentary skipped: {err}");
                None
            }
        }
    }

    /// Checks that the commentator responds, disabling commentary if not.
    ///
    /// Returns whether commentary is enabled afterwards.
    pub fn probe(&mut self) -> bool {
        if self.disabled {
            return false;
        }

        if let Err(err) = self.commentator.comment(&Prompt::Probe.to_string()) {
            log::warn!("dealer commentary disabled: {err}");
            self.disabled = true;
        }

        !self.disabled
    }

    /// Returns whether commentary is disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the wrapped commentator.
    pub const fn commentator_mut(&mut self) -> &mut C {
        &mut self.commentator
    }

    /// Unwraps the commentator.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.commentator
    }
}

/// A commentator that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Commentator for Silent {
    fn comment(&mut self, _prompt: &str) -> Result<String, CommentaryError> {
        Err(CommentaryError::Unavailable("no commentator configured".to_string()))
    }
}

/// An offline commentator with one fixed line per situation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canned;

impl Canned {
    const fn line(outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::PlayerWin => "Well played! The table is yours this time.",
            Outcome::DealerWin => "House takes this one. Shake it off and go again.",
            Outcome::Push => "Dead even. Nobody loses, nobody wins.",
            Outcome::PlayerBust => "Ouch, one card too many. It happens to the best of us.",
            Outcome::DealerBust => "I pushed my luck and it pushed back. Enjoy the win!",
            Outcome::PlayerBlackjack => "Blackjack! Now that is how you open a hand.",
            Outcome::DealerBlackjack => "Blackjack for the house. Sorry, friend.",
            Outcome::PushBlackjack => "Two blackjacks at once? You don't see that every day.",
        }
    }
}

impl Commentator for Canned {
    fn comment(&mut self, prompt: &str) -> Result<String, CommentaryError> {
        if prompt.starts_with("Action:") {
            return Ok("Feeling lucky? Hit or stand, your call.".to_string());
        }
        if prompt == Prompt::Probe.to_string() {
            return Ok("Ready when you are.".to_string());
        }

        prompt
            .strip_prefix("Result: ")
            .and_then(|rest| rest.split('.').next())
            .and_then(Outcome::from_tag)
            .map(|outcome| Self::line(outcome).to_string())
            .ok_or_else(|| CommentaryError::Unavailable("no canned line for prompt".to_string()))
    }
}
