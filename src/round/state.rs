//! Round state types.

use alloc::string::String;

/// One-shot alert raised for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertSignal {
    /// Nothing to signal.
    #[default]
    None,
    /// The player marked a word correct.
    Correct,
    /// The countdown is inside the panic zone. Raised again on every tick.
    Panic,
    /// The countdown reached zero.
    RoundOver,
}

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown advanced and the round is still running.
    Running {
        /// Time left after this tick.
        remaining_millis: u64,
    },
    /// This tick brought the countdown to zero.
    Finished,
    /// The countdown had already stopped; nothing changed.
    Stopped,
}

/// Point-in-time view of a round for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// The word being guessed.
    pub current_word: &'static str,
    /// Correct guesses minus skips.
    pub score: i32,
    /// Time left on the countdown.
    pub remaining_millis: u64,
    /// `remaining_millis` formatted as `MM:SS`.
    pub time_display: String,
    /// Whether the countdown has reached zero.
    pub is_over: bool,
    /// Whether the finish transition still needs handling.
    pub finish_pending: bool,
    /// The pending alert.
    pub alert: AlertSignal,
}
