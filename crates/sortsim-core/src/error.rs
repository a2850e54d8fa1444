//! Error types for array access.
//!
//! Scheduler and configuration errors live in `sortsim-engine`; this
//! module only covers what [`ArrayState`](crate::ArrayState) can report.

use std::error::Error;
use std::fmt;

/// Errors from [`ArrayState`](crate::ArrayState) construction and access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index was at or beyond the array length.
    ///
    /// Unreachable for a correct cursor. The scheduler treats it as fatal
    /// for the running session.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of access.
        len: usize,
    },
    /// The requested value range is empty (`min > max`).
    InvalidRange {
        /// Lower bound (inclusive).
        min: i32,
        /// Upper bound (inclusive).
        max: i32,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "value range [{min}, {max}] is empty")
            }
        }
    }
}

impl Error for ArrayError {}
