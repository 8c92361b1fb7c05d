//! Shift the cue timings of WebVTT subtitle files.
//!
//! Only cue timing lines are touched; headers, identifiers, cue text and cue
//! settings are copied through byte for byte.

pub mod timestamp;
pub use timestamp::{format_timestamp, parse_timestamp};

pub mod cues;
pub use cues::{match_timing_line, shift_line, shift_lines, ShiftedText, TimingLine};

pub mod offset;
pub use offset::{resolve_shift, Direction, OffsetSource};

pub mod files;
pub use files::{default_output_path, shift_file, ShiftSummary};

pub mod errors;
pub use errors::{OffsetError, TimestampError, VttShiftError, VttShiftResult};

pub use chrono::TimeDelta;
