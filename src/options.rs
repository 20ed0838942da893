//! Round configuration options.

use crate::error::OptionsError;

/// Configuration options for a single round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use guessword::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_total_duration_millis(30_000)
///     .with_panic_threshold_millis(Some(5_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Length of the countdown.
    pub total_duration_millis: u64,
    /// Time removed from the countdown on every tick.
    pub tick_interval_millis: u64,
    /// Remaining time at or below which every tick raises a panic alert.
    /// `None` disables the panic zone.
    pub panic_threshold_millis: Option<u64>,
    /// Whether alert signals are raised at all.
    pub alerts: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self::classic()
    }
}

impl RoundOptions {
    /// Twenty second round with a four second panic zone and alerts enabled.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            total_duration_millis: 20_000,
            tick_interval_millis: 1_000,
            panic_threshold_millis: Some(4_000),
            alerts: true,
        }
    }

    /// Ten second round without any alert signaling.
    ///
    /// # Example
    ///
    /// ```
    /// use guessword::RoundOptions;
    ///
    /// let options = RoundOptions::simple();
    /// assert_eq!(options.total_duration_millis, 10_000);
    /// assert!(!options.alerts);
    /// ```
    #[must_use]
    pub const fn simple() -> Self {
        Self {
            total_duration_millis: 10_000,
            tick_interval_millis: 1_000,
            panic_threshold_millis: None,
            alerts: false,
        }
    }

    /// Sets the length of the countdown.
    ///
    /// # Example
    ///
    /// ```
    /// use guessword::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_total_duration_millis(5_000);
    /// assert_eq!(options.total_duration_millis, 5_000);
    /// ```
    #[must_use]
    pub const fn with_total_duration_millis(mut self, millis: u64) -> Self {
        self.total_duration_millis = millis;
        self
    }

    /// Sets the tick interval.
    ///
    /// # Example
    ///
    /// ```
    /// use guessword::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_tick_interval_millis(250);
    /// assert_eq!(options.tick_interval_millis, 250);
    /// ```
    #[must_use]
    pub const fn with_tick_interval_millis(mut self, millis: u64) -> Self {
        self.tick_interval_millis = millis;
        self
    }

    /// Sets the panic threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use guessword::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_panic_threshold_millis(None);
    /// assert_eq!(options.panic_threshold_millis, None);
    /// ```
    #[must_use]
    pub const fn with_panic_threshold_millis(mut self, millis: Option<u64>) -> Self {
        self.panic_threshold_millis = millis;
        self
    }

    /// Sets whether alert signals are raised.
    ///
    /// # Example
    ///
    /// ```
    /// use guessword::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_alerts(false);
    /// assert!(!options.alerts);
    /// ```
    #[must_use]
    pub const fn with_alerts(mut self, alerts: bool) -> Self {
        self.alerts = alerts;
        self
    }

    /// Checks that the countdown can start and will terminate.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick interval or the total duration is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.tick_interval_millis == 0 {
            return Err(OptionsError::ZeroTickInterval);
        }
        if self.total_duration_millis == 0 {
            return Err(OptionsError::ZeroDuration);
        }
        Ok(())
    }
}
