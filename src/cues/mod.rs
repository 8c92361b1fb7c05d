mod parser;
mod shifter;
mod types;

pub use parser::match_timing_line;
pub use shifter::{shift_line, shift_lines};
pub use types::{ShiftedText, TimingLine};
