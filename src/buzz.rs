//! Haptic feedback for alert signals.

use crate::round::AlertSignal;

const CORRECT_TIMINGS: [u64; 6] = [100, 100, 100, 100, 100, 100];
const ROUND_OVER_TIMINGS: [u64; 2] = [0, 2000];
const PANIC_TIMINGS: [u64; 2] = [0, 200];
const SILENT_TIMINGS: [u64; 1] = [0];

/// Vibration pattern category played for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuzzPattern {
    /// Several short pulses (a correct guess).
    RepeatingShort,
    /// One long pulse (the round is over).
    SingleLong,
    /// One short pulse (the panic zone).
    SingleShort,
    /// No pulse.
    Silent,
}

impl BuzzPattern {
    /// Returns the alternating off/on timings in milliseconds, starting with
    /// an initial delay.
    #[must_use]
    pub const fn timings(self) -> &'static [u64] {
        match self {
            Self::RepeatingShort => &CORRECT_TIMINGS,
            Self::SingleLong => &ROUND_OVER_TIMINGS,
            Self::SingleShort => &PANIC_TIMINGS,
            Self::Silent => &SILENT_TIMINGS,
        }
    }
}

impl AlertSignal {
    /// Returns the pattern a haptic actuator should play for this signal.
    #[must_use]
    pub const fn buzz_pattern(self) -> BuzzPattern {
        match self {
            Self::None => BuzzPattern::Silent,
            Self::Correct => BuzzPattern::RepeatingShort,
            Self::Panic => BuzzPattern::SingleShort,
            Self::RoundOver => BuzzPattern::SingleLong,
        }
    }
}

/// A device that can play vibration patterns.
pub trait HapticActuator {
    /// Plays `pattern` once.
    fn vibrate(&mut self, pattern: BuzzPattern);
}
