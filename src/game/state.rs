//! Game state types.

use crate::card::Card;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; no further transitions.
    GameOver,
}

/// A single step of the dealer's fixed drawing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and must keep playing.
    Hit(Card),
    /// The dealer drew a card and went over 21.
    Bust(Card),
    /// The dealer stopped drawing at the given score.
    Stand(u8),
}
