use super::types::ShiftSummary;
use crate::cues::shift_lines;
use crate::errors::{VttShiftError, VttShiftResult};
use crate::offset::{magnitude, Direction};
use crate::timestamp::format_timestamp;
use chrono::TimeDelta;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Appended to the input stem to name the default output file
pub const SHIFTED_SUFFIX: &str = "_shifted";

/// `movie.en.vtt` becomes `movie.en_shifted.vtt` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.vtt", stem, SHIFTED_SUFFIX))
}

/// Shift every cue timing line of `input` and write the result to `output`.
///
/// The input is read completely before anything is written, so nothing is
/// written when a line fails to shift.
pub fn shift_file(input: &Path, output: &Path, shift: TimeDelta) -> VttShiftResult<ShiftSummary> {
    if !input.exists() {
        return Err(VttShiftError::InputNotFound(input.to_path_buf()));
    }

    info!("Shifting {} by {:?}", input.display(), shift);
    let text = fs::read_to_string(input)?;
    let shifted = shift_lines(&text, shift)?;
    fs::write(output, &shifted.text)?;

    info!(
        "Wrote {}: {} lines, {} cues shifted, {} timestamps clamped to zero",
        output.display(),
        shifted.lines,
        shifted.cues_shifted,
        shifted.timestamps_clamped
    );

    Ok(ShiftSummary {
        input: file_name(input),
        output: file_name(output),
        direction: Direction::of(shift),
        magnitude: format_timestamp(magnitude(shift)),
        lines: shifted.lines,
        cues_shifted: shifted.cues_shifted,
        timestamps_clamped: shifted.timestamps_clamped,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
