//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// A draw was attempted on a deck with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeck;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt this round.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("failed to deal: {0}")]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left to hit from.
    #[error("failed to hit: {0}")]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer turn.
    #[error("invalid game state for the dealer turn")]
    InvalidState,
    /// The dealer had to draw from an empty deck.
    #[error("dealer failed to hit: {0}")]
    EmptyDeck(#[from] EmptyDeck),
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The round already has a result.
    #[error("the round result has already been decided")]
    AlreadyDecided,
}

/// The commentary collaborator failed or could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentaryError {
    /// The commentator produced no response.
    #[error("commentary unavailable: {0}")]
    Unavailable(String),
}

/// Input that is neither `hit` nor `stand`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action {0:?}, expected hit (h) or stand (s)")]
pub struct ParseActionError(pub String);

/// Errors that abandon a round driven by a [`Table`](crate::table::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Winner determination failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// The decision provider ran out of decisions mid-turn.
    #[error("no decision was available for the player turn")]
    NoDecision,
}
