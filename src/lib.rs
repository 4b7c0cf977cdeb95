//! A speed-solitaire card matching engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages a single-player matching
//! round: a five-card hand, a shuffled draw deck, and a played pile. A card
//! may be played when it shares suit or rank with the most recently played
//! card; playing draws a replacement into the vacated slot. Playing all 52
//! cards wins; a hand with no playable card loses. An optional easy mode
//! biases replacement draws toward keeping the hand connected.
//!
//! # Example
//!
//! ```
//! use narabe::{Game, GameOptions, GameState};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.playable_ids().len(), 5); // nothing played yet
//!
//! while game.state() == GameState::Playing {
//!     let playable = game.playable_ids();
//!     game.play_card(playable[0]);
//! }
//!
//! assert!(game.state().is_terminal());
//! assert_eq!(usize::from(game.played_count()), game.played_cards().len());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod snapshot;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, HAND_SIZE, Suit};
pub use error::DeckError;
pub use game::{Game, GameState, PlayOutcome};
pub use hand::{Hand, PlayedPile};
pub use options::{GameMode, GameOptions};
pub use snapshot::Snapshot;
