//! Round controller and countdown state machine.

use alloc::string::String;

use crate::error::OptionsError;
use crate::options::RoundOptions;
use crate::review::ScoreReview;
use crate::sync::Mutex;
use crate::time::format_elapsed;
use crate::words::WordPool;

mod actions;
mod countdown;
pub mod state;

use countdown::Countdown;
pub use state::{AlertSignal, RoundSnapshot, TickOutcome};

#[derive(Debug)]
struct RoundState {
    pool: WordPool,
    current_word: &'static str,
    score: i32,
    countdown: Countdown,
    /// Permanent once the countdown reaches zero.
    over: bool,
    /// Cleared by `acknowledge_round_finished`.
    finish_pending: bool,
    alert: AlertSignal,
    disposed: bool,
}

impl RoundState {
    const fn accepts_input(&self) -> bool {
        !self.disposed && !self.over
    }

    const fn raise(&mut self, alerts: bool, alert: AlertSignal) {
        if alerts {
            self.alert = alert;
        }
    }
}

/// One timed round of the guessing game.
///
/// The controller owns its word pool and countdown. Ticks are delivered by an
/// external tick source through [`tick`](Self::tick) every
/// [`RoundOptions::tick_interval_millis`]; player actions arrive through
/// [`mark_correct`](Self::mark_correct) and [`mark_skip`](Self::mark_skip).
/// All methods take `&self` so a tick thread and an input handler can share
/// the controller behind an `Arc`.
///
/// After the countdown ends or after [`dispose`](Self::dispose), actions are
/// silently ignored.
#[derive(Debug)]
pub struct RoundController {
    /// Round options.
    pub options: RoundOptions,
    state: Mutex<RoundState>,
}

impl RoundController {
    /// Creates a round and starts its countdown.
    ///
    /// The first word is drawn from a fresh pool shuffled with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`RoundOptions::validate`].
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut pool = WordPool::new(seed);
        let current_word = pool.draw();
        tracing::debug!(
            total_millis = options.total_duration_millis,
            tick_millis = options.tick_interval_millis,
            "round started"
        );

        Ok(Self {
            options,
            state: Mutex::new(RoundState {
                pool,
                current_word,
                score: 0,
                countdown: Countdown::start(
                    options.total_duration_millis,
                    options.tick_interval_millis,
                ),
                over: false,
                finish_pending: false,
                alert: AlertSignal::None,
                disposed: false,
            }),
        })
    }

    /// Advances the countdown by one tick interval.
    ///
    /// Inside the panic zone every tick raises [`AlertSignal::Panic`]. The
    /// tick that reaches zero ends the round and raises
    /// [`AlertSignal::RoundOver`]. Ticks delivered after that, or after
    /// [`dispose`](Self::dispose), change nothing.
    pub fn tick(&self) -> TickOutcome {
        let alerts = self.options.alerts;
        let panic_threshold = self.options.panic_threshold_millis;

        self.state.with(|state| {
            let outcome = state.countdown.tick();
            match outcome {
                TickOutcome::Running { remaining_millis } => {
                    tracing::trace!(remaining_millis, "tick");
                    if panic_threshold.is_some_and(|threshold| remaining_millis <= threshold) {
                        state.raise(alerts, AlertSignal::Panic);
                    }
                }
                TickOutcome::Finished => {
                    state.over = true;
                    state.finish_pending = true;
                    state.raise(alerts, AlertSignal::RoundOver);
                    tracing::info!(score = state.score, "round over");
                }
                TickOutcome::Stopped => {}
            }
            outcome
        })
    }

    /// Stops the countdown permanently.
    ///
    /// Safe to call more than once and after the round has already ended.
    /// Afterwards the controller ignores ticks and actions.
    pub fn dispose(&self) {
        self.state.with(|state| {
            if !state.disposed {
                state.disposed = true;
                state.countdown.stop();
                tracing::debug!("round disposed");
            }
        });
    }

    /// Returns the word currently being guessed.
    pub fn current_word(&self) -> &'static str {
        self.state.lock().current_word
    }

    /// Returns correct guesses minus skips. May be negative.
    pub fn score(&self) -> i32 {
        self.state.lock().score
    }

    /// Returns the time left on the countdown.
    pub fn remaining_millis(&self) -> u64 {
        self.state.lock().countdown.remaining_millis()
    }

    /// Returns the time left formatted as `MM:SS`.
    pub fn time_display(&self) -> String {
        format_elapsed(self.remaining_millis() / 1000)
    }

    /// Returns whether the countdown has reached zero. Never resets.
    pub fn is_over(&self) -> bool {
        self.state.lock().over
    }

    /// Returns whether the end of the round still needs to be handled.
    ///
    /// Becomes `true` exactly once, on the tick that ends the round, and is
    /// cleared by [`acknowledge_round_finished`](Self::acknowledge_round_finished).
    pub fn round_finished(&self) -> bool {
        self.state.lock().finish_pending
    }

    /// Returns the pending alert.
    pub fn alert(&self) -> AlertSignal {
        self.state.lock().alert
    }

    /// Returns whether the tick source should keep delivering ticks.
    pub fn is_ticking(&self) -> bool {
        self.state.lock().countdown.is_running()
    }

    /// Returns whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    /// Returns how many words are left before the pool reshuffles.
    pub fn words_remaining(&self) -> usize {
        self.state.lock().pool.remaining()
    }

    /// Returns a consistent view of the round for rendering.
    pub fn snapshot(&self) -> RoundSnapshot {
        let state = self.state.lock();
        let remaining_millis = state.countdown.remaining_millis();
        RoundSnapshot {
            current_word: state.current_word,
            score: state.score,
            remaining_millis,
            time_display: format_elapsed(remaining_millis / 1000),
            is_over: state.over,
            finish_pending: state.finish_pending,
            alert: state.alert,
        }
    }

    /// Hands the final score to a new [`ScoreReview`].
    ///
    /// Returns `None` while the round is still running.
    pub fn review(&self) -> Option<ScoreReview> {
        let state = self.state.lock();
        state.over.then(|| ScoreReview::new(state.score))
    }
}
