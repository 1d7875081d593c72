//! Neighbor counting
//!
//! Counts foreground or background voxels around a point for a given
//! adjacency. Every neighbor access is individually boundary-checked, so
//! these work at any point of the volume, including faces and corners;
//! out-of-volume directions simply do not contribute.

use crate::neighbors::{Connectivity, neighbor};
use crate::voxel::Voxel;

/// Number of foreground (nonzero) neighbors of `p` in the given adjacency.
pub fn foreground_neighbors<T: Voxel>(
    grid: &[T],
    p: usize,
    rs: usize,
    ps: usize,
    connectivity: Connectivity,
) -> u32 {
    connectivity
        .offsets()
        .iter()
        .filter_map(|&offset| neighbor(p, offset, rs, ps, grid.len()))
        .filter(|&q| grid[q].is_foreground())
        .count() as u32
}

/// Number of background (zero) neighbors of `p` in the given adjacency.
pub fn background_neighbors<T: Voxel>(
    grid: &[T],
    p: usize,
    rs: usize,
    ps: usize,
    connectivity: Connectivity,
) -> u32 {
    connectivity
        .offsets()
        .iter()
        .filter_map(|&offset| neighbor(p, offset, rs, ps, grid.len()))
        .filter(|&q| !grid[q].is_foreground())
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::is_interior;

    const RS: usize = 5;
    const PS: usize = 25;
    const N: usize = 125;

    #[test]
    fn test_counts_partition_the_neighborhood_for_interior_points() {
        // Arbitrary pattern: foreground where the index is divisible by 3.
        let vol: Vec<u8> = (0..N).map(|i| u8::from(i % 3 == 0)).collect();
        for p in (0..N).filter(|&p| is_interior(p, RS, PS, N)) {
            for conn in [Connectivity::Six, Connectivity::Eighteen, Connectivity::TwentySix] {
                let fg = foreground_neighbors(&vol, p, RS, PS, conn);
                let bg = background_neighbors(&vol, p, RS, PS, conn);
                assert_eq!(fg + bg, conn.degree() as u32);
            }
        }
    }

    #[test]
    fn test_counts_at_a_corner() {
        // At the (0,0,0) corner only 7 of the 26 directions exist.
        let vol = [1u8; N];
        assert_eq!(foreground_neighbors(&vol, 0, RS, PS, Connectivity::TwentySix), 7);
        assert_eq!(foreground_neighbors(&vol, 0, RS, PS, Connectivity::Six), 3);
        assert_eq!(background_neighbors(&vol, 0, RS, PS, Connectivity::TwentySix), 0);
    }

    #[test]
    fn test_isolated_center() {
        let mut vol = [0u8; N];
        vol[62] = 1;
        for conn in [Connectivity::Six, Connectivity::Eighteen, Connectivity::TwentySix] {
            assert_eq!(foreground_neighbors(&vol, 62, RS, PS, conn), 0);
            assert_eq!(background_neighbors(&vol, 62, RS, PS, conn), conn.degree() as u32);
        }
    }
}
