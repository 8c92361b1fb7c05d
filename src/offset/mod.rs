mod resolver;
mod types;

pub use resolver::{default_shift, magnitude, resolve_shift, DEFAULT_SHIFT_SECONDS};
pub use types::{Direction, OffsetSource};
