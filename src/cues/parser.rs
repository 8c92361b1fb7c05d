use super::types::TimingLine;
use regex::Regex;
use std::sync::OnceLock;

fn re_timing_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // ASCII digits only: fullwidth and other Unicode digits are cue text.
        // Whitespace classes exclude CR and LF so a match never spans lines.
        Regex::new(
            r"^(?P<indent>[^\S\r\n]*)(?P<start>(?:[0-9]{2}:)?[0-9]{2}:[0-9]{2}\.[0-9]{3})[^\S\r\n]*-->[^\S\r\n]*(?P<end>(?:[0-9]{2}:)?[0-9]{2}:[0-9]{2}\.[0-9]{3})(?P<rest>[^\r\n]*)$",
        )
        .expect("re_timing_line: pattern is valid and should always compile")
    })
}

/// Split text into lines ending in `\r\n`, `\n` or a lone `\r`.
///
/// Each line keeps its terminator, so concatenating the lines gives back the
/// input. The last line may have none.
pub(crate) fn split_lines<'a>(text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Split a line terminator (`\r\n`, `\n` or `\r`) off the end of a line
pub(crate) fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else if let Some(body) = line.strip_suffix('\r') {
        (body, "\r")
    } else {
        (line, "")
    }
}

/// Match a WebVTT cue timing line such as `00:01.000 --> 00:02.000 align:start`.
///
/// The line may still carry its terminator; it is never part of `rest`.
/// Returns `None` for anything that does not start with two timestamps joined
/// by an arrow, and for text spanning more than one line.
pub fn match_timing_line(line: &str) -> Option<TimingLine<'_>> {
    let (body, _) = split_terminator(line);
    let caps = re_timing_line().captures(body)?;

    Some(TimingLine {
        indent: caps.name("indent")?.as_str(),
        start: caps.name("start")?.as_str(),
        end: caps.name("end")?.as_str(),
        rest: caps.name("rest")?.as_str(),
    })
}
