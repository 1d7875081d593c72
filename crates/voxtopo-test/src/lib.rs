//! voxtopo-test - Regression test framework for voxtopo
//!
//! Provides the `RegParams` harness used by the `*_reg.rs` integration
//! tests, supporting three modes:
//!
//! - **Generate**: record results without failing
//! - **Compare**: compare results with expected values (default)
//! - **Display**: run tests without comparison (visual inspection)
//!
//! plus builders for *synthetic* table files. The real precomputed tables
//! are 8 MiB and 64 MiB binary artifacts installed out-of-tree, so the
//! test suite fabricates tables with known sparse contents and points the
//! loader at them: lifecycle and query semantics are fully testable
//! without shipping the real data.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::fs;
use std::path::PathBuf;
use voxtopo_tables::{CN26_BYTES, CN26_FILE, SIMPLE26_BYTES, SIMPLE26_FILE, TABLE_SUBDIR};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // voxtopo-test is at crates/voxtopo-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create (if needed) and return a synthetic base directory for one test.
///
/// The returned path plays the role of the table base directory: table
/// files written by the builders below land under
/// `<base>/src/tables/`. Each reg test should use its own `name` so
/// concurrently running tests do not disturb each other's files.
pub fn synthetic_base_dir(name: &str) -> TestResult<PathBuf> {
    let base = PathBuf::from(regout_dir()).join(name);
    let tables = base.join(TABLE_SUBDIR);
    fs::create_dir_all(&tables).map_err(|e| TestError::DirectoryCreate {
        path: tables.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(base)
}

/// Write a synthetic simple-point bitset under `base`.
///
/// The bit is set for every mask in `simple_masks` and clear everywhere
/// else. Returns the path of the written file.
pub fn write_simple_table(base: &std::path::Path, simple_masks: &[u32]) -> TestResult<PathBuf> {
    let mut bits = vec![0u8; SIMPLE26_BYTES];
    for &mask in simple_masks {
        assert_eq!(mask >> 26, 0, "mask out of range");
        bits[(mask >> 3) as usize] |= 1 << (mask & 7);
    }
    let path = base.join(TABLE_SUBDIR).join(SIMPLE26_FILE);
    fs::write(&path, &bits).map_err(|e| TestError::TableWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Write a synthetic connectivity-number table under `base`.
///
/// Each `(mask, t, tb)` entry is packed as `t << 4 | tb`; every other
/// entry is zero. Returns the path of the written file.
pub fn write_connectivity_table(
    base: &std::path::Path,
    entries: &[(u32, u8, u8)],
) -> TestResult<PathBuf> {
    let mut bytes = vec![0u8; CN26_BYTES];
    for &(mask, t, tb) in entries {
        assert_eq!(mask >> 26, 0, "mask out of range");
        assert!(t <= 0xf && tb <= 0xf, "connectivity number out of nibble range");
        bytes[mask as usize] = (t << 4) | tb;
    }
    let path = base.join(TABLE_SUBDIR).join(CN26_FILE);
    fs::write(&path, &bytes).map_err(|e| TestError::TableWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Write a truncated (short) simple-point table under `base`, for
/// exercising the short-read guard. Returns the path and the truncated
/// length.
pub fn write_truncated_simple_table(
    base: &std::path::Path,
    len: usize,
) -> TestResult<(PathBuf, usize)> {
    assert!(len < SIMPLE26_BYTES);
    let path = base.join(TABLE_SUBDIR).join(SIMPLE26_FILE);
    fs::write(&path, vec![0u8; len]).map_err(|e| TestError::TableWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok((path, len))
}
