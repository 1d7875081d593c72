//! Voxel value types
//!
//! Volumes are caller-owned flat slices of an integer element type. The
//! [`Voxel`] trait is the small common surface the primitives need: total
//! ordering for grayscale extremum queries and a zero value whose absence
//! marks foreground membership.

/// An integer voxel value.
///
/// Foreground membership is "nonzero"; grayscale thresholding compares with
/// `Ord`. Implemented for the element types used in practice: `u8` for
/// binary and low-grayscale volumes, `u16` and `i32` for wider grayscale
/// data.
pub trait Voxel: Copy + Ord {
    /// The background value.
    const ZERO: Self;

    /// Whether this value belongs to the foreground.
    #[inline]
    fn is_foreground(self) -> bool {
        self != Self::ZERO
    }
}

impl Voxel for u8 {
    const ZERO: Self = 0;
}

impl Voxel for u16 {
    const ZERO: Self = 0;
}

impl Voxel for i32 {
    const ZERO: Self = 0;
}
