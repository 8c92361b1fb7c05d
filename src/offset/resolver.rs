use super::types::OffsetSource;
use crate::errors::OffsetError;
use crate::timestamp::parse_timestamp;
use chrono::TimeDelta;
use log::debug;

/// Shift used when neither an offset nor seconds are given: 22 minutes 58 seconds
pub const DEFAULT_SHIFT_SECONDS: i64 = 22 * 60 + 58;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

pub fn default_shift() -> TimeDelta {
    TimeDelta::seconds(DEFAULT_SHIFT_SECONDS)
}

/// Compute the signed shift for a run, negated when `subtract` is set
pub fn resolve_shift(source: &OffsetSource, subtract: bool) -> Result<TimeDelta, OffsetError> {
    let shift = match source {
        OffsetSource::Seconds(seconds) => seconds_to_shift(*seconds)?,
        OffsetSource::Timestamp(text) => parse_timestamp(text)?,
        OffsetSource::Default => default_shift(),
    };
    debug!(
        "Resolved shift {:?} from {:?} (subtract: {})",
        shift, source, subtract
    );

    // TimeDelta's range is symmetric, negation cannot overflow
    Ok(if subtract { -shift } else { shift })
}

/// Absolute size of a shift
pub fn magnitude(shift: TimeDelta) -> TimeDelta {
    shift.abs()
}

fn seconds_to_shift(seconds: f64) -> Result<TimeDelta, OffsetError> {
    let micros = (seconds * MICROS_PER_SECOND).round();
    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    if !micros.is_finite() || micros >= i64::MAX as f64 || micros < i64::MIN as f64 {
        return Err(OffsetError::InvalidSeconds(seconds));
    }
    Ok(TimeDelta::microseconds(micros as i64))
}
