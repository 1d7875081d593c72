//! Border predicates
//!
//! Cheap tests for "does this point touch the background", used to filter
//! candidate points before the more expensive mask-build-and-lookup path.

use crate::neighbors::{Connectivity, neighbor};
use crate::voxel::Voxel;

/// Whether `p` has at least one in-volume background (zero) neighbor in the
/// given adjacency. Short-circuits on the first one found in canonical
/// order; out-of-volume directions do not count as background.
pub fn has_background_neighbor<T: Voxel>(
    grid: &[T],
    p: usize,
    rs: usize,
    ps: usize,
    connectivity: Connectivity,
) -> bool {
    connectivity.offsets().iter().any(|&offset| {
        matches!(neighbor(p, offset, rs, ps, grid.len()), Some(q) if !grid[q].is_foreground())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RS: usize = 3;
    const PS: usize = 9;
    const N: usize = 27;
    const CENTER: usize = 13;

    #[test]
    fn test_solid_cube_center_touches_nothing() {
        let vol = [1u8; N];
        assert!(!has_background_neighbor(&vol, CENTER, RS, PS, Connectivity::TwentySix));
        assert!(!has_background_neighbor(&vol, CENTER, RS, PS, Connectivity::Six));
    }

    #[test]
    fn test_any_cleared_neighbor_is_detected() {
        for q in (0..N).filter(|&q| q != CENTER) {
            let mut vol = [1u8; N];
            vol[q] = 0;
            assert!(
                has_background_neighbor(&vol, CENTER, RS, PS, Connectivity::TwentySix),
                "cleared voxel {q} not seen"
            );
        }
    }

    #[test]
    fn test_six_adjacency_ignores_cleared_corners() {
        let mut vol = [1u8; N];
        vol[0] = 0; // a corner of the 3x3x3 cube
        assert!(has_background_neighbor(&vol, CENTER, RS, PS, Connectivity::TwentySix));
        assert!(!has_background_neighbor(&vol, CENTER, RS, PS, Connectivity::Six));
    }

    #[test]
    fn test_volume_face_is_not_background() {
        // A corner voxel of an all-foreground volume has no in-volume
        // background neighbor even though most directions fall outside.
        let vol = [1u8; N];
        assert!(!has_background_neighbor(&vol, 0, RS, PS, Connectivity::TwentySix));
    }
}
