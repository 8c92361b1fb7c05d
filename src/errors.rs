use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Enumeration of all possible errors that can occur while shifting a file
#[derive(Debug, Error)]
pub enum VttShiftError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Offset(#[from] OffsetError),

    /// A line matched the timing pattern but its timestamps did not parse.
    /// `line` is the 1-based line number when shifting a whole document.
    #[error("internal error{}: {source}", on_line(.line))]
    Internal {
        line: Option<usize>,
        #[source]
        source: TimestampError,
    },

    #[error("shifted timestamp{} is out of range", on_line(.line))]
    Overflow { line: Option<usize> },
}

fn on_line(line: &Option<usize>) -> String {
    line.map(|line| format!(" on line {}", line))
        .unwrap_or_default()
}

/// Timestamp parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("invalid time format '{text}', expected HH:MM:SS.mmm or MM:SS.mmm")]
    Malformed { text: String },

    #[error("time '{text}' is too large")]
    OutOfRange { text: String },
}

impl TimestampError {
    pub fn malformed(text: impl Into<String>) -> Self {
        Self::Malformed { text: text.into() }
    }

    pub fn out_of_range(text: impl Into<String>) -> Self {
        Self::OutOfRange { text: text.into() }
    }
}

/// Errors raised while turning CLI input into a shift
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OffsetError {
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("invalid number of seconds: {0}")]
    InvalidSeconds(f64),
}

impl VttShiftError {
    /// Process exit code reported by the command line tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            VttShiftError::Offset(_) => 2,
            _ => 1,
        }
    }
}

// Type alias for Result with VttShiftError
pub type VttShiftResult<T> = Result<T, VttShiftError>;
