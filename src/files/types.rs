use crate::offset::Direction;
use serde::Serialize;
use std::fmt;

/// Result of shifting one file
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShiftSummary {
    pub input: String,
    pub output: String,
    pub direction: Direction,
    /// Absolute shift as `HH:MM:SS.mmm`
    pub magnitude: String,
    pub lines: usize,
    pub cues_shifted: usize,
    pub timestamps_clamped: usize,
}

impl fmt::Display for ShiftSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shifted '{}' {} by {} → '{}'",
            self.input, self.direction, self.magnitude, self.output
        )
    }
}
