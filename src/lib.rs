//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against a
//! rule-driven dealer and discloses everything that happens through an
//! ordered queue of [`StepEvent`]s. A presentation layer (GUI, TUI, whatever)
//! drains that queue with [`Game::acknowledge_step`] at its own pace — the
//! engine never sleeps, times, or animates anything itself.
//!
//! # Example
//!
//! ```no_run
//! use pontoon::{Game, Rules};
//!
//! let game = Game::new(Rules::default(), 42);
//! game.start_round().unwrap();
//! while let Some(step) = game.acknowledge_step() {
//!     // render the step, then come back for the next one
//!     let _ = step;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{DrawRng, UsedCards};
pub use error::{ActionError, DeckError, RulesError};
pub use event::{Outcome, Seat, StepEvent};
pub use game::{Game, Phase};
pub use hand::{DealerHand, Hand, score};
pub use rules::{DealerPlayMode, Rules};
