//! A two-player trick-taking card game simulator with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that plays one complete round of the
//! "Lard" card game with scripted policies: dealing, trick resolution with
//! covers and bonus throws, talon replenishment, and point scoring.
//!
//! # Example
//!
//! ```
//! use lardrs::Game;
//!
//! let mut game = Game::new(42);
//! let result = game.play_round();
//! let _ = result;
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
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, HAND_SIZE, Rank, Suit, create_deck};
pub use error::{PullError, RoundError, TrickError};
pub use game::{Game, Player};
pub use result::RoundResult;
