//! Table store lifecycle and table-driven queries
//!
//! [`TopoTables`] is an explicit, caller-owned handle over the two
//! precomputed tables. Each table is an independent two-state machine
//! (unloaded / loaded): the simple-point bitset tolerates repeated
//! initialization as a no-op, while a second load of the 64 MiB
//! connectivity-number table without an intervening teardown is an error.
//!
//! Initialization takes `&mut self` and queries take `&self`, so the
//! borrow checker rules out loading concurrently with queries; once
//! loaded, all queries are pure reads over immutable memory.
//!
//! Table files are resolved as `{base_dir}/src/tables/{file}`, with
//! `base_dir` taken from the `VOXTOPO` environment variable (read once per
//! init call) or passed explicitly via the `*_from` variants.
//!
//! Tabulated classification exists only for 26-adjacency. The 6- and
//! 18-adjacency variants, and grayscale simple-point / `T` queries at a
//! threshold, are declared here but fail with
//! [`TableError::Unsupported`](crate::TableError::Unsupported); callers
//! needing them must use an on-the-fly computation instead of the tables.

use crate::error::{TableError, TableResult};
use crate::table::{
    CN26_BYTES, CN26_FILE, ConnectivityTable, SIMPLE26_BYTES, SIMPLE26_FILE, SimpleTable,
    TopoNumbers,
};
use std::env;
use std::path::{Path, PathBuf};
use voxtopo_core::{Voxel, neighborhood_mask, neighborhood_mask_at_level};

/// Environment variable naming the base directory under which the table
/// files are installed.
pub const BASE_DIR_ENV: &str = "VOXTOPO";

/// Directory holding the table files, relative to the base directory.
pub const TABLE_SUBDIR: &str = "src/tables";

fn table_path(base_dir: &Path, file: &str) -> PathBuf {
    base_dir.join(TABLE_SUBDIR).join(file)
}

fn base_dir_from_env() -> TableResult<PathBuf> {
    env::var_os(BASE_DIR_ENV)
        .map(PathBuf::from)
        .ok_or(TableError::MissingConfig(BASE_DIR_ENV))
}

/// Handle owning the loaded topology tables.
#[derive(Debug, Default)]
pub struct TopoTables {
    simple: Option<SimpleTable>,
    connectivity: Option<ConnectivityTable>,
}

impl TopoTables {
    /// A handle with both tables unloaded.
    pub const fn new() -> Self {
        Self {
            simple: None,
            connectivity: None,
        }
    }

    /// Whether the simple-point bitset is loaded.
    pub fn simple_loaded(&self) -> bool {
        self.simple.is_some()
    }

    /// Whether the connectivity-number table is loaded.
    pub fn connectivity_loaded(&self) -> bool {
        self.connectivity.is_some()
    }

    /// Load the simple-point bitset from the base directory named by the
    /// `VOXTOPO` environment variable. A no-op if already loaded.
    pub fn init_simple(&mut self) -> TableResult<()> {
        if self.simple.is_some() {
            return Ok(());
        }
        let base = base_dir_from_env()?;
        self.init_simple_from(&base)
    }

    /// Load the simple-point bitset from an explicit base directory. A
    /// no-op if already loaded (the file is not re-read).
    pub fn init_simple_from(&mut self, base_dir: &Path) -> TableResult<()> {
        if self.simple.is_some() {
            return Ok(());
        }
        self.simple = Some(SimpleTable::load(&table_path(base_dir, SIMPLE26_FILE))?);
        log::debug!("{SIMPLE26_FILE} loaded ({SIMPLE26_BYTES} bytes)");
        Ok(())
    }

    /// Load the connectivity-number table from the base directory named by
    /// the `VOXTOPO` environment variable.
    ///
    /// # Errors
    ///
    /// [`TableError::AlreadyLoaded`] if the table is loaded and no
    /// teardown has happened since.
    pub fn init_connectivity(&mut self) -> TableResult<()> {
        if self.connectivity.is_some() {
            return Err(TableError::AlreadyLoaded("connectivity-number"));
        }
        let base = base_dir_from_env()?;
        self.init_connectivity_from(&base)
    }

    /// Load the connectivity-number table from an explicit base directory.
    ///
    /// # Errors
    ///
    /// [`TableError::AlreadyLoaded`] if the table is loaded and no
    /// teardown has happened since.
    pub fn init_connectivity_from(&mut self, base_dir: &Path) -> TableResult<()> {
        if self.connectivity.is_some() {
            return Err(TableError::AlreadyLoaded("connectivity-number"));
        }
        self.connectivity = Some(ConnectivityTable::load(&table_path(base_dir, CN26_FILE))?);
        log::debug!("{CN26_FILE} loaded ({CN26_BYTES} bytes)");
        Ok(())
    }

    /// Release the simple-point bitset. Idempotent; a later init reloads.
    pub fn teardown_simple(&mut self) {
        if self.simple.take().is_some() {
            log::debug!("simple-point table released");
        }
    }

    /// Release the connectivity-number table. Idempotent; a later init
    /// reloads.
    pub fn teardown_connectivity(&mut self) {
        if self.connectivity.take().is_some() {
            log::debug!("connectivity-number table released");
        }
    }

    fn simple_table(&self) -> TableResult<&SimpleTable> {
        self.simple.as_ref().ok_or(TableError::NotLoaded("simple-point"))
    }

    fn connectivity_table(&self) -> TableResult<&ConnectivityTable> {
        self.connectivity
            .as_ref()
            .ok_or(TableError::NotLoaded("connectivity-number"))
    }

    /// Whether the 26-neighborhood configuration `mask` is a simple point
    /// (removable without changing the topology of object or background).
    pub fn is_simple_26_mask(&self, mask: u32) -> TableResult<bool> {
        Ok(self.simple_table()?.is_simple(mask))
    }

    /// Whether the foreground point `p` of a binary volume is 26-simple.
    ///
    /// `p` must be an interior point; boundary points are rejected with a
    /// core error.
    pub fn is_simple_26<T: Voxel>(
        &self,
        grid: &[T],
        p: usize,
        rs: usize,
        ps: usize,
    ) -> TableResult<bool> {
        let mask = neighborhood_mask(grid, p, rs, ps)?;
        self.is_simple_26_mask(mask)
    }

    /// The `(T, Tb)` connectivity numbers of the configuration `mask`.
    pub fn topo_numbers_26_mask(&self, mask: u32) -> TableResult<TopoNumbers> {
        Ok(self.connectivity_table()?.numbers(mask))
    }

    /// The `(T, Tb)` connectivity numbers of the interior point `p` of a
    /// binary volume, for an object in 26-adjacency.
    pub fn topo_numbers_26<T: Voxel>(
        &self,
        grid: &[T],
        p: usize,
        rs: usize,
        ps: usize,
    ) -> TableResult<TopoNumbers> {
        let mask = neighborhood_mask(grid, p, rs, ps)?;
        self.topo_numbers_26_mask(mask)
    }

    /// The background connectivity number `Tb` of the interior point `p`
    /// of a grayscale volume thresholded at `h`.
    ///
    /// `Tb` depends only on the thresholded 26-mask, so the binary table
    /// answers it at any level; the foreground number `T` does not have
    /// this property, which is why the thresholded `T` and simple-point
    /// variants below are unsupported.
    pub fn tb_26_at_level<T: Voxel>(
        &self,
        grid: &[T],
        p: usize,
        h: T,
        rs: usize,
        ps: usize,
    ) -> TableResult<u8> {
        let mask = neighborhood_mask_at_level(grid, p, h, rs, ps)?;
        Ok(self.connectivity_table()?.tb(mask))
    }

    /// Tabulated 6-adjacency simple-point test: not provided.
    pub fn is_simple_6<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<bool> {
        Err(TableError::Unsupported {
            connectivity: 6,
            operation: "simple-point test",
        })
    }

    /// Tabulated 18-adjacency simple-point test: not provided.
    pub fn is_simple_18<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<bool> {
        Err(TableError::Unsupported {
            connectivity: 18,
            operation: "simple-point test",
        })
    }

    /// Tabulated 6-adjacency connectivity numbers: not provided.
    pub fn topo_numbers_6<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<TopoNumbers> {
        Err(TableError::Unsupported {
            connectivity: 6,
            operation: "connectivity numbers",
        })
    }

    /// Tabulated 18-adjacency connectivity numbers: not provided.
    pub fn topo_numbers_18<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<TopoNumbers> {
        Err(TableError::Unsupported {
            connectivity: 18,
            operation: "connectivity numbers",
        })
    }

    /// Tabulated 6-adjacency simple-point test at a threshold: not
    /// provided.
    pub fn is_simple_6_at_level<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _h: T,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<bool> {
        Err(TableError::Unsupported {
            connectivity: 6,
            operation: "thresholded simple-point test",
        })
    }

    /// Tabulated 18-adjacency simple-point test at a threshold: not
    /// provided.
    pub fn is_simple_18_at_level<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _h: T,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<bool> {
        Err(TableError::Unsupported {
            connectivity: 18,
            operation: "thresholded simple-point test",
        })
    }

    /// Tabulated 26-adjacency simple-point test at a threshold: not
    /// provided. The bitset answers only the binary (nonzero-foreground)
    /// configuration.
    pub fn is_simple_26_at_level<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _h: T,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<bool> {
        Err(TableError::Unsupported {
            connectivity: 26,
            operation: "thresholded simple-point test",
        })
    }

    /// Tabulated 6-adjacency `Tb` at a threshold: not provided.
    pub fn tb_6_at_level<T: Voxel>(
        &self,
        _grid: &[T],
        _p: usize,
        _h: T,
        _rs: usize,
        _ps: usize,
    ) -> TableResult<u8> {
        Err(TableError::Unsupported {
            connectivity: 6,
            operation: "thresholded background connectivity number",
        })
    }
}
