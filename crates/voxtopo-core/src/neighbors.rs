//! Canonical neighborhood enumeration and grid addressing
//!
//! A volume is a flat slice addressed by a row stride `rs` (voxels per row)
//! and a plane stride `ps` (voxels per plane); `+x` moves by `+1`, `+y` by
//! `+rs`, `+z` by `+ps`. Neighbor directions for 6-, 18- and 26-adjacency
//! are enumerated by the `NEIGHBORS_*` constant tables below.
//!
//! # Bit-position contract
//!
//! The index of a direction in [`NEIGHBORS_26`] is the bit position used by
//! every 26-neighborhood occupancy mask in this library, and the precomputed
//! lookup tables consumed by `voxtopo-tables` are indexed by masks packed in
//! exactly this order. The table files carry no order metadata, so any code
//! that builds a mask or regenerates a table must go through these
//! constants.
//!
//! # Canonical order
//!
//! Neighbors are grouped by plane: the `z+1` plane first, then the plane of
//! the center point, then the `z-1` plane. Within a plane the ring around
//! the center is walked counterclockwise starting east, and for the `z±1`
//! planes the face center comes last.

/// A neighbor direction as a unit offset `(dx, dy, dz)`.
///
/// `dx` moves along a row, `dy` across rows (`+rs` per step), `dz` across
/// planes (`+ps` per step). Each component is -1, 0 or 1.
pub type Offset = (i32, i32, i32);

/// The 26-neighborhood in canonical order.
///
/// Index `k` in this table is bit `k` of every 26-neighborhood mask.
pub const NEIGHBORS_26: [Offset; 26] = [
    // z+1 plane: ring from east, counterclockwise, then the face center
    (1, 0, 1),   //  0: E
    (1, -1, 1),  //  1: NE
    (0, -1, 1),  //  2: N
    (-1, -1, 1), //  3: NW
    (-1, 0, 1),  //  4: W
    (-1, 1, 1),  //  5: SW
    (0, 1, 1),   //  6: S
    (1, 1, 1),   //  7: SE
    (0, 0, 1),   //  8: face center
    // same plane: ring from east, counterclockwise
    (1, 0, 0),   //  9: E
    (1, -1, 0),  // 10: NE
    (0, -1, 0),  // 11: N
    (-1, -1, 0), // 12: NW
    (-1, 0, 0),  // 13: W
    (-1, 1, 0),  // 14: SW
    (0, 1, 0),   // 15: S
    (1, 1, 0),   // 16: SE
    // z-1 plane: ring from east, counterclockwise, then the face center
    (1, 0, -1),   // 17: E
    (1, -1, -1),  // 18: NE
    (0, -1, -1),  // 19: N
    (-1, -1, -1), // 20: NW
    (-1, 0, -1),  // 21: W
    (-1, 1, -1),  // 22: SW
    (0, 1, -1),   // 23: S
    (1, 1, -1),   // 24: SE
    (0, 0, -1),   // 25: face center
];

/// The 18-neighborhood (face and edge neighbors) in canonical order.
pub const NEIGHBORS_18: [Offset; 18] = [
    // z+1 plane: face neighbors from east, then the face center
    (1, 0, 1),  //  0: E
    (0, -1, 1), //  1: N
    (-1, 0, 1), //  2: W
    (0, 1, 1),  //  3: S
    (0, 0, 1),  //  4: face center
    // same plane: ring from east, counterclockwise
    (1, 0, 0),   //  5: E
    (1, -1, 0),  //  6: NE
    (0, -1, 0),  //  7: N
    (-1, -1, 0), //  8: NW
    (-1, 0, 0),  //  9: W
    (-1, 1, 0),  // 10: SW
    (0, 1, 0),   // 11: S
    (1, 1, 0),   // 12: SE
    // z-1 plane: face neighbors from east, then the face center
    (1, 0, -1),  // 13: E
    (0, -1, -1), // 14: N
    (-1, 0, -1), // 15: W
    (0, 1, -1),  // 16: S
    (0, 0, -1),  // 17: face center
];

/// The 6-neighborhood (face neighbors) in canonical order.
pub const NEIGHBORS_6: [Offset; 6] = [
    (1, 0, 0),   // 0: E
    (0, -1, 0),  // 1: N
    (-1, 0, 0),  // 2: W
    (0, 1, 0),   // 3: S
    (0, 0, -1),  // 4: z-1
    (0, 0, 1),   // 5: z+1
];

/// Voxel adjacency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// 6-adjacency (face neighbors)
    Six,
    /// 18-adjacency (face and edge neighbors)
    Eighteen,
    /// 26-adjacency (face, edge and corner neighbors)
    #[default]
    TwentySix,
}

impl Connectivity {
    /// The canonical neighbor offsets for this adjacency.
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Connectivity::Six => &NEIGHBORS_6,
            Connectivity::Eighteen => &NEIGHBORS_18,
            Connectivity::TwentySix => &NEIGHBORS_26,
        }
    }

    /// Number of neighbors in this adjacency.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }
}

/// Apply an offset to a linear index without boundary checks.
///
/// Callers must have established that the stepped-to voxel exists.
#[inline]
pub(crate) fn offset_unchecked(p: usize, offset: Offset, rs: usize, ps: usize) -> usize {
    let (dx, dy, dz) = offset;
    (p as isize + dx as isize + dy as isize * rs as isize + dz as isize * ps as isize) as usize
}

/// Linear index of the voxel one `offset` step away from `p`, or `None`
/// when the step would cross a row, plane or volume boundary.
///
/// Boundary detection is purely arithmetic on `p % rs`, `p % ps` and the
/// volume length `n`; it relies on the stride invariants (`ps` a multiple
/// of `rs`, `n` a multiple of `ps`).
#[inline]
pub fn neighbor(p: usize, offset: Offset, rs: usize, ps: usize, n: usize) -> Option<usize> {
    let (dx, dy, dz) = offset;
    let exists = match dx {
        1 => p % rs != rs - 1,
        -1 => p % rs != 0,
        _ => true,
    } && match dy {
        1 => p % ps < ps - rs,
        -1 => p % ps >= rs,
        _ => true,
    } && match dz {
        1 => p + ps < n,
        -1 => p >= ps,
        _ => true,
    };
    if exists {
        Some(offset_unchecked(p, offset, rs, ps))
    } else {
        None
    }
}

/// Linear index of 6-neighbor `k` (in canonical order) of `p`, or `None`
/// if that neighbor is outside the volume.
#[inline]
pub fn neighbor6(p: usize, k: usize, rs: usize, ps: usize, n: usize) -> Option<usize> {
    neighbor(p, NEIGHBORS_6[k], rs, ps, n)
}

/// Linear index of 18-neighbor `k` (in canonical order) of `p`, or `None`
/// if that neighbor is outside the volume.
#[inline]
pub fn neighbor18(p: usize, k: usize, rs: usize, ps: usize, n: usize) -> Option<usize> {
    neighbor(p, NEIGHBORS_18[k], rs, ps, n)
}

/// Linear index of 26-neighbor `k` (in canonical order) of `p`, or `None`
/// if that neighbor is outside the volume.
#[inline]
pub fn neighbor26(p: usize, k: usize, rs: usize, ps: usize, n: usize) -> Option<usize> {
    neighbor(p, NEIGHBORS_26[k], rs, ps, n)
}

/// Whether every 26-neighbor of `p` exists, i.e. `p` is not on a face of
/// the volume.
#[inline]
pub fn is_interior(p: usize, rs: usize, ps: usize, n: usize) -> bool {
    p % rs != 0
        && p % rs != rs - 1
        && p % ps >= rs
        && p % ps < ps - rs
        && p >= ps
        && p + ps < n
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3x3 volume: rs=3, ps=9, n=27, center index 13.
    const RS: usize = 3;
    const PS: usize = 9;
    const N: usize = 27;
    const CENTER: usize = 13;

    #[test]
    fn test_tables_are_unit_offsets() {
        for &(dx, dy, dz) in NEIGHBORS_26.iter() {
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy) && (-1..=1).contains(&dz));
            assert_ne!((dx, dy, dz), (0, 0, 0));
        }
        for off in NEIGHBORS_18 {
            assert!(NEIGHBORS_26.contains(&off));
        }
        for off in NEIGHBORS_6 {
            assert!(NEIGHBORS_18.contains(&off));
        }
    }

    #[test]
    fn test_canonical_order_is_plane_grouped() {
        // z+1 plane occupies bits 0..9, same plane 9..17, z-1 plane 17..26,
        // with the face centers at 8, 25 and the in-plane ring starting east.
        assert_eq!(NEIGHBORS_26[0], (1, 0, 1));
        assert_eq!(NEIGHBORS_26[8], (0, 0, 1));
        assert_eq!(NEIGHBORS_26[9], (1, 0, 0));
        assert_eq!(NEIGHBORS_26[16], (1, 1, 0));
        assert_eq!(NEIGHBORS_26[17], (1, 0, -1));
        assert_eq!(NEIGHBORS_26[25], (0, 0, -1));
        for (k, &(_, _, dz)) in NEIGHBORS_26.iter().enumerate() {
            let expected = if k < 9 { 1 } else if k < 17 { 0 } else { -1 };
            assert_eq!(dz, expected, "plane grouping broken at k={k}");
        }
    }

    #[test]
    fn test_center_has_all_neighbors() {
        let mut seen: Vec<usize> = (0..26)
            .map(|k| neighbor26(CENTER, k, RS, PS, N).expect("interior neighbor"))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 26);
        let expected: Vec<usize> = (0..N).filter(|&q| q != CENTER).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_neighbor_matches_coordinate_arithmetic() {
        for (k, &(dx, dy, dz)) in NEIGHBORS_26.iter().enumerate() {
            let q = neighbor26(CENTER, k, RS, PS, N).unwrap();
            let expected = (CENTER as isize
                + dx as isize
                + dy as isize * RS as isize
                + dz as isize * PS as isize) as usize;
            assert_eq!(q, expected, "offset mismatch at k={k}");
        }
    }

    #[test]
    fn test_corner_has_only_positive_neighbors() {
        // Index 0 sits at the (0,0,0) corner: only +x/+y/+z steps stay inside.
        for (k, &(dx, dy, dz)) in NEIGHBORS_26.iter().enumerate() {
            let q = neighbor26(0, k, RS, PS, N);
            if dx >= 0 && dy >= 0 && dz >= 0 {
                assert!(q.is_some(), "expected neighbor at k={k}");
            } else {
                assert_eq!(q, None, "expected sentinel at k={k}");
            }
        }
    }

    #[test]
    fn test_is_interior() {
        assert!(is_interior(CENTER, RS, PS, N));
        for p in 0..N {
            assert_eq!(is_interior(p, RS, PS, N), p == CENTER);
        }
        // 5x5x5: interior points form the inner 3x3x3 block.
        let interior = (0..125).filter(|&p| is_interior(p, 5, 25, 125)).count();
        assert_eq!(interior, 27);
    }

    #[test]
    fn test_connectivity_degree() {
        assert_eq!(Connectivity::Six.degree(), 6);
        assert_eq!(Connectivity::Eighteen.degree(), 18);
        assert_eq!(Connectivity::TwentySix.degree(), 26);
    }
}
