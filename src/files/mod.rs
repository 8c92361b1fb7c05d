mod pipeline;
mod types;

pub use pipeline::{default_output_path, shift_file, SHIFTED_SUFFIX};
pub use types::ShiftSummary;
