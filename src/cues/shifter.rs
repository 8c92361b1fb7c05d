use super::parser::{match_timing_line, split_lines, split_terminator};
use super::types::{ShiftedText, TimingLine};
use crate::errors::{VttShiftError, VttShiftResult};
use crate::timestamp::{clamp_to_zero, format_timestamp, parse_timestamp};
use chrono::TimeDelta;
use log::debug;
use std::borrow::Cow;

/// Shift both timestamps of a cue timing line.
///
/// Lines that are not timing lines come back borrowed and byte-identical.
/// Rewritten lines always use a single space on each side of the arrow and
/// keep their `\r\n`, `\n` or `\r` terminator, gaining `\n` if they had none.
/// Errors carry no line number; `shift_lines` adds it.
pub fn shift_line(line: &str, shift: TimeDelta) -> VttShiftResult<Cow<'_, str>> {
    shift_numbered_line(line, None, shift).map(|(line, _)| line)
}

/// Shift every timing line in `text`, keeping all other lines verbatim.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`.
pub fn shift_lines(text: &str, shift: TimeDelta) -> VttShiftResult<ShiftedText> {
    let mut shifted = ShiftedText {
        text: String::with_capacity(text.len()),
        ..Default::default()
    };

    for (index, line) in split_lines(text).enumerate() {
        let (line, clamped) = shift_numbered_line(line, Some(index + 1), shift)?;
        if let Cow::Owned(_) = line {
            shifted.cues_shifted += 1;
        }
        shifted.timestamps_clamped += clamped;
        shifted.lines += 1;
        shifted.text.push_str(&line);
    }

    Ok(shifted)
}

/// Shift one line and report how many of its timestamps were clamped to zero
fn shift_numbered_line(
    line: &str,
    number: Option<usize>,
    shift: TimeDelta,
) -> VttShiftResult<(Cow<'_, str>, usize)> {
    let Some(timing) = match_timing_line(line) else {
        return Ok((Cow::Borrowed(line), 0));
    };

    let (start, start_clamped) = shift_timestamp(timing.start, number, shift)?;
    let (end, end_clamped) = shift_timestamp(timing.end, number, shift)?;

    let terminator = match split_terminator(line).1 {
        "" => "\n",
        terminator => terminator,
    };
    let rewritten = render(&timing, &start, &end, terminator);
    match number {
        Some(number) => debug!(
            "line {}: {} --> {} => {} --> {}",
            number, timing.start, timing.end, start, end
        ),
        None => debug!("{} --> {} => {} --> {}", timing.start, timing.end, start, end),
    }

    Ok((
        Cow::Owned(rewritten),
        usize::from(start_clamped) + usize::from(end_clamped),
    ))
}

fn shift_timestamp(
    text: &str,
    number: Option<usize>,
    shift: TimeDelta,
) -> VttShiftResult<(String, bool)> {
    let time = parse_timestamp(text).map_err(|source| VttShiftError::Internal {
        line: number,
        source,
    })?;
    let shifted = time
        .checked_add(&shift)
        .ok_or(VttShiftError::Overflow { line: number })?;

    let clamped = clamp_to_zero(shifted);
    Ok((format_timestamp(clamped), clamped != shifted))
}

fn render(timing: &TimingLine<'_>, start: &str, end: &str, terminator: &str) -> String {
    format!(
        "{}{} --> {}{}{}",
        timing.indent, start, end, timing.rest, terminator
    )
}
