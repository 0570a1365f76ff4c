//! Helpers for travel durations.
//!
//! Estimators report whole seconds; the planner works in fractional minutes
//! and shows durations as "N min" or "N min S sec".

use chrono::Duration;

/// Convert a duration to fractional minutes (seconds / 60).
pub fn minutes_f64(duration: Duration) -> f64 {
    duration.num_seconds() as f64 / 60.0
}

/// Split a duration into whole minutes and remainder seconds.
pub fn split_minutes(duration: Duration) -> (i64, i64) {
    let secs = duration.num_seconds();
    (secs / 60, secs % 60)
}

/// Human-readable duration, e.g. `"12 min"` or `"12 min 30 sec"`.
///
/// ```
/// use chrono::Duration;
/// use metro_planner::domain::format_duration;
///
/// assert_eq!(format_duration(Duration::seconds(720)), "12 min");
/// assert_eq!(format_duration(Duration::seconds(750)), "12 min 30 sec");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let (mins, secs) = split_minutes(duration);
    if secs == 0 {
        format!("{mins} min")
    } else {
        format!("{mins} min {secs} sec")
    }
}
