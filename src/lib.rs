//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type holding one round's deck and hands, and
//! a [`Table`] that plays rounds against a pluggable [`Decider`] while asking a
//! [`Commentator`] for the dealer's lines.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use commjack::{Canned, Commentary, Game, GameOptions, Table, Threshold};
//!
//! let options = GameOptions::default().with_dealer_pause(Duration::ZERO);
//! let mut game = Game::new(options, 42);
//! let mut table = Table::new(Threshold::default(), Commentary::new(Canned, false));
//!
//! let report = table.play_round(&mut game).unwrap();
//! assert_eq!(report.result, game.result().unwrap());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod commentary;
pub mod deck;
pub mod decider;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use commentary::{Canned, Commentary, Commentator, Prompt, SYSTEM_PROMPT, Silent};
pub use deck::Deck;
pub use decider::{Decider, Scripted, Threshold};
pub use error::{
    ActionError, CommentaryError, DealError, DealerError, EmptyDeck, ParseActionError, RoundError,
    ShowdownError,
};
pub use game::{Action, DealerStep, Game, GameState};
pub use hand::{BLACKJACK, Hand, HandView};
pub use options::GameOptions;
pub use result::{Outcome, Party, RoundResult};
pub use table::{Event, RoundReport, Table};
