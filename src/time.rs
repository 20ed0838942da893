//! Countdown display formatting.

use alloc::format;
use alloc::string::String;

/// Formats a number of seconds as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// # Example
///
/// ```
/// use guessword::format_elapsed;
///
/// assert_eq!(format_elapsed(20), "00:20");
/// assert_eq!(format_elapsed(75), "01:15");
/// assert_eq!(format_elapsed(3_661), "1:01:01");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
