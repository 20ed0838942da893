//! Error types for round configuration.
//!
//! Once a round is running nothing can fail: actions after the countdown ends
//! or after disposal are ignored. Only rejecting a bad configuration needs an
//! error.

use thiserror::Error;

/// Errors that can occur when validating [`RoundOptions`](crate::RoundOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The tick interval is zero, so the countdown would never advance.
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    /// The round has no time on the clock.
    #[error("total duration must be greater than zero")]
    ZeroDuration,
}
