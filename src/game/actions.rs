use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionError, ParseActionError};
use crate::result::Outcome;

use super::{Game, GameState};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Keep the current hand and pass the turn to the dealer.
    Stand,
}

/// Parses `hit`/`h` and `stand`/`s`, ignoring case and surrounding whitespace.
///
/// ```
/// use commjack::Action;
///
/// assert_eq!("H".parse(), Ok(Action::Hit));
/// assert_eq!(" stand\n".parse(), Ok(Action::Stand));
/// assert!("double".parse::<Action>().is_err());
/// ```
impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token = input.trim();
        let is = |word: &str| token.eq_ignore_ascii_case(word);

        if is("h") || is("hit") {
            Ok(Self::Hit)
        } else if is("s") || is("stand") {
            Ok(Self::Stand)
        } else {
            Err(ParseActionError(token.into()))
        }
    }
}

impl Game {
    /// Applies a player decision.
    ///
    /// On [`Action::Hit`] a card is drawn and returned; if it busts the hand
    /// the round ends as [`Outcome::PlayerBust`], otherwise the player keeps
    /// the turn. On [`Action::Stand`] the turn passes to the dealer and
    /// `None` is returned.
    ///
    /// The first decision runs [`Game::check_initial_blackjack`], so a dealt
    /// blackjack always settles the round before the player can act on it.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the initial hands
    /// have not been dealt, the deal produced a blackjack, or the deck is
    /// empty.
    pub fn player_action(&mut self, action: Action) -> Result<Option<Card>, ActionError> {
        if self.state != GameState::PlayerTurn || self.player.len() < 2 {
            return Err(ActionError::InvalidState);
        }
        if self.check_initial_blackjack().is_some() {
            return Err(ActionError::InvalidState);
        }

        match action {
            Action::Hit => {
                let card = self.draw()?;
                self.player.add_card(card);

                if self.player.is_bust() {
                    self.finish(Outcome::PlayerBust);
                }

                Ok(Some(card))
            }
            Action::Stand => {
                log::debug!("player stands on {}", self.player.score());
                self.state = GameState::DealerTurn;
                Ok(None)
            }
        }
    }
}
