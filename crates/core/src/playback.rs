//! Playback math: watch-progress completion and duration display.

/// Fraction of a movie's duration at which a view counts as completed.
pub const COMPLETION_THRESHOLD: f64 = 0.9;

/// Decide whether a watch position marks the movie as completed.
///
/// A view is completed when the client says so explicitly, or when the
/// position has reached [`COMPLETION_THRESHOLD`] of the stored duration.
/// An unknown duration (zero or negative) never auto-completes; only the
/// explicit flag counts then.
pub fn is_completed(position_seconds: i32, duration_seconds: i32, explicit: Option<bool>) -> bool {
    if explicit == Some(true) {
        return true;
    }
    if duration_seconds <= 0 {
        return false;
    }
    f64::from(position_seconds) >= f64::from(duration_seconds) * COMPLETION_THRESHOLD
}

/// Format a duration in seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// Negative inputs are clamped to zero.
pub fn format_duration(total_seconds: i32) -> String {
    let total = total_seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
