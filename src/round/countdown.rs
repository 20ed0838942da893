//! Countdown arithmetic, independent of who delivers the ticks.

use super::TickOutcome;

#[derive(Debug, Clone, Copy)]
pub(super) struct Countdown {
    remaining_millis: u64,
    tick_interval_millis: u64,
    running: bool,
}

impl Countdown {
    pub(super) const fn start(total_millis: u64, tick_interval_millis: u64) -> Self {
        Self {
            remaining_millis: total_millis,
            tick_interval_millis,
            running: true,
        }
    }

    pub(super) const fn remaining_millis(&self) -> u64 {
        self.remaining_millis
    }

    pub(super) const fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the countdown for good. Stopping twice is harmless.
    pub(super) const fn stop(&mut self) {
        self.running = false;
    }

    pub(super) const fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }

        self.remaining_millis = self.remaining_millis.saturating_sub(self.tick_interval_millis);
        if self.remaining_millis == 0 {
            self.running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Running {
                remaining_millis: self.remaining_millis,
            }
        }
    }
}
