/// A cue timing line split into its four parts, borrowed from the source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingLine<'a> {
    pub indent: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    /// Cue settings or any other text after the end timestamp, untouched
    pub rest: &'a str,
}

/// Output of shifting a whole document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShiftedText {
    pub text: String,
    pub lines: usize,
    pub cues_shifted: usize,
    pub timestamps_clamped: usize,
}
