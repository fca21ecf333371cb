// SPDX-License-Identifier: MIT

//! Error types for cache store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for cache store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during cache store operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open the cache with context
    #[error("Failed to open cache at '{path}': {source}")]
    CacheOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Cache file not found
    #[error("Cache not found at: {0}")]
    CacheNotFound(PathBuf),
}
