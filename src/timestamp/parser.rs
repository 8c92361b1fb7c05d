use crate::errors::TimestampError;
use chrono::TimeDelta;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Parse `HH:MM:SS.mmm` or `MM:SS.mmm` into a duration.
///
/// Fields are read as plain non-negative integers: minutes and seconds are not
/// range checked, and a short fraction is taken literally (`.5` is 5 ms, not
/// 500 ms).
pub fn parse_timestamp(text: &str) -> Result<TimeDelta, TimestampError> {
    let (clock, millis) = text
        .rsplit_once('.')
        .ok_or_else(|| TimestampError::malformed(text))?;

    let fields: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [h, m, s] => (
            parse_field(h, text)?,
            parse_field(m, text)?,
            parse_field(s, text)?,
        ),
        [m, s] => (0, parse_field(m, text)?, parse_field(s, text)?),
        _ => return Err(TimestampError::malformed(text)),
    };

    if millis.len() > 3 {
        return Err(TimestampError::malformed(text));
    }
    let millis = parse_field(millis, text)?;

    hours
        .checked_mul(MILLIS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds.checked_mul(MILLIS_PER_SECOND)?))
        .and_then(|total| total.checked_add(millis))
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(|| TimestampError::out_of_range(text))
}

fn parse_field(field: &str, text: &str) -> Result<i64, TimestampError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::malformed(text));
    }
    // Only digits remain, so the sole failure left is overflow
    field
        .parse::<i64>()
        .map_err(|_| TimestampError::out_of_range(text))
}
