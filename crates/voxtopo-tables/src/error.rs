//! Error types for voxtopo-tables
//!
//! Table loading and every query are fallible: the tables are foundational
//! to all classification, and a partially-loaded table would silently
//! corrupt results, so load failures carry enough context for the caller to
//! decide whether to abort or recover.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from table lifecycle and table-driven queries
#[derive(Debug, Error)]
pub enum TableError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxtopo_core::Error),

    /// Base-directory configuration is missing
    #[error("environment variable {0} is not set")]
    MissingConfig(&'static str),

    /// Failed to open or read a table file
    #[error("failed to read table '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table file is smaller than the table it must hold
    #[error("short read on table '{path}': {expected} bytes expected, {actual} read")]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    /// Table initialized a second time without an intervening teardown
    #[error("{0} table already loaded")]
    AlreadyLoaded(&'static str),

    /// Query issued before the table it needs was loaded
    #[error("{0} table not loaded")]
    NotLoaded(&'static str),

    /// Table-driven variant that this module deliberately does not provide
    #[error("tabulated {operation} not implemented for {connectivity}-adjacency")]
    Unsupported {
        connectivity: u32,
        operation: &'static str,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
