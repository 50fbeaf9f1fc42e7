//! Error types for grid construction.
//!
//! Every operation on a built grid is total (coordinates wrap), so the
//! only failures are precondition violations caught at construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero width or height.
    EmptyGrid,
    /// An axis length exceeds what signed coordinate arithmetic supports.
    DimensionTooLarge {
        /// Which axis (`"width"` or `"height"`).
        name: &'static str,
        /// The requested length.
        value: u32,
        /// The largest accepted length.
        max: u32,
    },
    /// A cell buffer does not hold exactly `width * height` colours.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum of {max}")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl Error for GridError {}
