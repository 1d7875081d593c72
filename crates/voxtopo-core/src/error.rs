//! Error types for voxtopo-core
//!
//! Checked entry points report precondition violations through these
//! variants instead of reading out of bounds; hot loops that have already
//! verified their preconditions use the `*_unchecked` functions.

use thiserror::Error;

/// voxtopo-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Point lies on the volume boundary, so its full neighborhood does not exist
    #[error("point {index} lies on the volume boundary")]
    BoundaryPoint { index: usize },

    /// Stride parameters are inconsistent with the volume length
    #[error("invalid strides: rs={rs}, ps={ps} for a volume of {len} voxels")]
    InvalidStrides { rs: usize, ps: usize, len: usize },
}

/// Result type alias for voxtopo-core operations
pub type Result<T> = std::result::Result<T, Error>;
