use chrono::TimeDelta;

/// Replace a negative duration with zero
pub fn clamp_to_zero(duration: TimeDelta) -> TimeDelta {
    if duration < TimeDelta::zero() {
        TimeDelta::zero()
    } else {
        duration
    }
}

/// Format a duration as a WebVTT timestamp (`HH:MM:SS.mmm`).
///
/// Negative durations render as `00:00:00.000`. Hours are not wrapped at 24
/// and grow past two digits when needed.
pub fn format_timestamp(duration: TimeDelta) -> String {
    let total_millis = round_to_millis(clamp_to_zero(duration));
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Nearest whole millisecond of a non-negative duration, half rounding up
fn round_to_millis(duration: TimeDelta) -> i64 {
    let whole = duration.num_milliseconds();
    let remainder = duration.subsec_nanos() % 1_000_000;
    if remainder >= 500_000 {
        whole.saturating_add(1)
    } else {
        whole
    }
}
