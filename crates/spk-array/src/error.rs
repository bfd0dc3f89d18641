#![forbid(unsafe_code)]

use thiserror::Error;

/// Failures raised while building or addressing a [`crate::NumericArray`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("negative extent {extent} on axis {axis}")]
    NegativeExtent { axis: usize, extent: i64 },
    #[error("shape {extents:?} overflows the addressable element count")]
    SizeOverflow { extents: Vec<usize> },
    #[error("buffer holds {actual} elements but the shape requires {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("index {index} is out of bounds for size {size}")]
    OutOfBounds { index: usize, size: usize },
    #[error("index has {actual} axes but the array has {expected}")]
    RankMismatch { expected: usize, actual: usize },
}
