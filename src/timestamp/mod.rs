mod parser;
mod utils;

pub use parser::parse_timestamp;
pub use utils::{clamp_to_zero, format_timestamp};
