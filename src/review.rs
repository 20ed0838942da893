//! Score review after a round ends.

use core::sync::atomic::{AtomicBool, Ordering};

/// Holds the final score of a finished round and signals when the player
/// asks for another one.
///
/// The caller watches [`new_round_requested`](Self::new_round_requested),
/// starts a fresh [`RoundController`](crate::RoundController) when it turns
/// `true`, then calls
/// [`acknowledge_new_round_handled`](Self::acknowledge_new_round_handled).
#[derive(Debug)]
pub struct ScoreReview {
    final_score: i32,
    new_round_requested: AtomicBool,
}

impl ScoreReview {
    /// Creates a review for `final_score`.
    #[must_use]
    pub fn new(final_score: i32) -> Self {
        tracing::info!(final_score, "final score");
        Self {
            final_score,
            new_round_requested: AtomicBool::new(false),
        }
    }

    /// Returns the final score of the round.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.final_score
    }

    /// Player action: play again.
    pub fn request_new_round(&self) {
        self.new_round_requested.store(true, Ordering::SeqCst);
    }

    /// Returns whether a new round has been requested and not yet handled.
    pub fn new_round_requested(&self) -> bool {
        self.new_round_requested.load(Ordering::SeqCst)
    }

    /// Clears the request once the new round has been started.
    pub fn acknowledge_new_round_handled(&self) {
        self.new_round_requested.store(false, Ordering::SeqCst);
    }
}
