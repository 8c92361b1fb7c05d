use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;

/// Where the shift for a run comes from
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetSource {
    /// `HH:MM:SS.mmm` or `MM:SS.mmm`
    Timestamp(String),
    /// Fractional seconds, may be negative
    Seconds(f64),
    Default,
}

impl OffsetSource {
    /// Pick the source from the two optional command line values.
    pub fn from_args(offset: Option<String>, seconds: Option<f64>) -> Self {
        match (seconds, offset) {
            (Some(seconds), _) => OffsetSource::Seconds(seconds),
            (None, Some(offset)) => OffsetSource::Timestamp(offset),
            (None, None) => OffsetSource::Default,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn of(shift: TimeDelta) -> Self {
        if shift < TimeDelta::zero() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}
