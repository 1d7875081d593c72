//! Voxtopo Tables - Precomputed 3D topology tables
//!
//! Table-driven classification of points in 3D voxel volumes: a point's
//! 26-neighborhood occupancy, packed into a canonical-order bitmask by
//! `voxtopo-core`, indexes two precomputed binary tables that answer in
//! O(1)
//!
//! - whether the point is *simple* (removable without changing the
//!   topology of object or background), and
//! - its pair of connectivity numbers `(T, Tb)`.
//!
//! The connectivity numbers are defined in:
//!
//! G. Bertrand, "Simple points, topological numbers and geodesic
//! neighborhoods in cubic grids", Pattern Recognition Letters, Vol. 15,
//! pp. 1003-1011, 1994.
//!
//! # Example
//!
//! ```no_run
//! use voxtopo_tables::TopoTables;
//!
//! let mut tables = TopoTables::new();
//! tables.init_simple()?; // reads $VOXTOPO/src/tables/TabSimple26.dat
//!
//! let mut vol = [0u8; 125];
//! vol[62] = 1;
//! assert!(tables.is_simple_26(&vol, 62, 5, 25)? == tables.is_simple_26_mask(0)?);
//! # Ok::<(), voxtopo_tables::TableError>(())
//! ```

pub mod error;
pub mod store;
pub mod table;

pub use error::{TableError, TableResult};
pub use store::{BASE_DIR_ENV, TABLE_SUBDIR, TopoTables};
pub use table::{
    CN26_BYTES, CN26_FILE, ConnectivityTable, SIMPLE26_BYTES, SIMPLE26_FILE, SimpleTable,
    TopoNumbers,
};
