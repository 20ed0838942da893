use crate::buzz::HapticActuator;

use super::{AlertSignal, RoundController};

impl RoundController {
    /// Player action: the word was guessed.
    ///
    /// Adds a point, raises [`AlertSignal::Correct`] and draws the next word.
    /// Returns `false` without changing anything once the round is over or
    /// disposed.
    pub fn mark_correct(&self) -> bool {
        let alerts = self.options.alerts;
        self.state.with(|state| {
            if !state.accepts_input() {
                return false;
            }
            state.score += 1;
            state.raise(alerts, AlertSignal::Correct);
            state.current_word = state.pool.draw();
            tracing::debug!(score = state.score, word = state.current_word, "correct");
            true
        })
    }

    /// Player action: the word was skipped.
    ///
    /// Takes a point and draws the next word; the alert is left alone.
    /// Returns `false` without changing anything once the round is over or
    /// disposed.
    pub fn mark_skip(&self) -> bool {
        self.state.with(|state| {
            if !state.accepts_input() {
                return false;
            }
            state.score -= 1;
            state.current_word = state.pool.draw();
            tracing::debug!(score = state.score, word = state.current_word, "skip");
            true
        })
    }

    /// Clears the pending alert after the presentation layer has handled it.
    pub fn acknowledge_alert(&self) {
        self.state.with(|state| {
            if !state.disposed {
                state.alert = AlertSignal::None;
            }
        });
    }

    /// Clears the one-shot finish event. The round stays over.
    pub fn acknowledge_round_finished(&self) {
        self.state.with(|state| {
            if !state.disposed {
                state.finish_pending = false;
            }
        });
    }

    /// Plays the pending alert on `actuator` and acknowledges it.
    ///
    /// Returns the alert that was delivered. [`AlertSignal::None`] plays
    /// nothing.
    pub fn deliver_alert<H: HapticActuator + ?Sized>(&self, actuator: &mut H) -> AlertSignal {
        let alert = self.state.with(|state| {
            if state.disposed {
                return AlertSignal::None;
            }
            core::mem::take(&mut state.alert)
        });

        if alert != AlertSignal::None {
            actuator.vibrate(alert.buzz_pattern());
        }
        alert
    }
}
