//! Time formatting utilities for crab-jukebox
//!
//! This module turns player durations into the short clock strings shown
//! on screen.

use std::time::Duration;

/// Formats a duration as `M:SS`, or `H:MM:SS` from one hour on
///
/// # Arguments
/// * `duration` - The duration to format, `None` when the player reports none
///
/// # Returns
/// Returns the clock string, `0:00` for a missing duration
pub fn format_duration(duration: Option<Duration>) -> String {
    let total_seconds = duration.map(|d| d.as_secs()).unwrap_or(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
