// error.rs - Errors raised while building or addressing a universe

use std::fmt;
use thiserror::Error;

/// Which coordinate failed a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row    => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UniverseError {
    /// Coordinate outside the grid. Neighbour counting skips these.
    #[error("{axis} index {index} out of range 0..{len}")]
    OutOfRange { axis: Axis, index: isize, len: usize },

    #[error("invalid universe dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("pattern {name:?} ({rows}x{columns}) does not fit a {width}x{height} universe")]
    PatternTooLarge {
        name: &'static str,
        rows: usize,
        columns: usize,
        width: usize,
        height: usize,
    },

    #[error("live density {0} is outside 0.0..=1.0")]
    InvalidDensity(f64),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, UniverseError>;
