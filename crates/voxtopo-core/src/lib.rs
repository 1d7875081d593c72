//! Voxtopo Core - Voxel grid addressing and direct topology primitives
//!
//! This crate provides the geometric foundation of the voxtopo digital
//! topology library:
//!
//! - Canonical neighbor enumeration for 6-, 18- and 26-adjacency
//!   ([`NEIGHBORS_6`], [`NEIGHBORS_18`], [`NEIGHBORS_26`]) and boundary-safe
//!   grid addressing over flat, stride-described volumes
//! - 26-neighborhood occupancy masks ([`neighborhood_mask`]), the index
//!   space of the precomputed topology tables in `voxtopo-tables`
//! - Direct (non-tabulated) primitives: neighbor counts, grayscale
//!   neighborhood extrema and border predicates
//!
//! Volumes are caller-owned slices; row and plane strides are passed
//! explicitly on every call and no grid-shape state is kept here.

pub mod border;
pub mod counts;
pub mod error;
pub mod extremum;
pub mod mask;
pub mod neighbors;
pub mod voxel;

pub use border::has_background_neighbor;
pub use counts::{background_neighbors, foreground_neighbors};
pub use error::{Error, Result};
pub use extremum::{nearest_higher_neighbor, nearest_lower_neighbor};
pub use mask::{
    FULL_MASK_26, check_strides, neighborhood_mask, neighborhood_mask_at_level,
    neighborhood_mask_at_level_unchecked, neighborhood_mask_unchecked,
};
pub use neighbors::{
    Connectivity, NEIGHBORS_6, NEIGHBORS_18, NEIGHBORS_26, Offset, is_interior, neighbor,
    neighbor6, neighbor18, neighbor26,
};
pub use voxel::Voxel;
