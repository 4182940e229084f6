//! World error types.

use thiserror::Error;

/// World error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Width or height is zero.
    #[error("invalid world dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} world")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
