//! A countdown word-guessing round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundController`] that owns one timed round: the
//! word pool, the score, the countdown and the one-shot alert signal. When the
//! countdown runs out the final score is handed to a [`ScoreReview`], which in
//! turn signals when the player wants another round.
//!
//! # Example
//!
//! ```
//! use guessword::{RoundController, RoundOptions};
//!
//! let round = RoundController::new(RoundOptions::default(), 42).unwrap();
//! round.mark_correct();
//! round.mark_correct();
//! round.mark_skip();
//! assert_eq!(round.score(), 1);
//!
//! while round.is_ticking() {
//!     round.tick();
//! }
//! let review = round.review().unwrap();
//! assert_eq!(review.score(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod buzz;
pub mod error;
pub mod options;
pub mod review;
pub mod round;
mod sync;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod ticker;
pub mod time;
pub mod words;

// Re-export main types
pub use buzz::{BuzzPattern, HapticActuator};
pub use error::OptionsError;
pub use options::RoundOptions;
pub use review::ScoreReview;
pub use round::{AlertSignal, RoundController, RoundSnapshot, TickOutcome};
#[cfg(feature = "std")]
pub use ticker::Ticker;
pub use time::format_elapsed;
pub use words::{CANONICAL_WORDS, WORD_COUNT, WordPool};
