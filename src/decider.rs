//! Sources of player decisions.

use alloc::collections::VecDeque;

use crate::card::Card;
use crate::game::Action;
use crate::hand::Hand;

/// Supplies the player's next decision.
pub trait Decider {
    /// Returns the next action for `player` given the dealer's up-card, or
    /// `None` if no further decision is available.
    fn decide(&mut self, player: &Hand, up_card: Card) -> Option<Action>;
}

/// Plays back a fixed sequence of actions.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    actions: VecDeque<Action>,
}

impl Scripted {
    /// Creates a script from the given actions.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Returns the number of actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl Decider for Scripted {
    fn decide(&mut self, _player: &Hand, _up_card: Card) -> Option<Action> {
        self.actions.pop_front()
    }
}

/// An automatic player that hits until reaching a target score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Lowest score the player stands on.
    pub stand_at: u8,
}

impl Threshold {
    /// Creates an automatic player standing at `stand_at` or above.
    #[must_use]
    pub const fn new(stand_at: u8) -> Self {
        Self { stand_at }
    }
}

/// Mirrors the dealer: stand on 17.
impl Default for Threshold {
    fn default() -> Self {
        Self::new(17)
    }
}

impl Decider for Threshold {
    fn decide(&mut self, player: &Hand, _up_card: Card) -> Option<Action> {
        if player.score() < self.stand_at {
            Some(Action::Hit)
        } else {
            Some(Action::Stand)
        }
    }
}
