// SPDX-License-Identifier: MIT

//! Location of the package database directory.

use std::path::{Path, PathBuf};

/// Compiled-in default database directory.
const DEFAULT_DB_DIR: &str = "/var/db/pkg";

/// Environment variable overriding the database directory.
const DB_DIR_ENV: &str = "PKG_DBDIR";

/// Resolved location of the package database.
///
/// Resolved once at session construction and threaded into open and
/// lock explicitly; nothing below this reads the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    dir: PathBuf,
}

impl DbConfig {
    /// Use an explicit database directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the database directory from `PKG_DBDIR`, falling back
    /// to the compiled-in default.
    pub fn from_env() -> Self {
        let dir = std::env::var_os(DB_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_DIR));
        Self { dir }
    }

    /// The database directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the cache file read by query sessions.
    pub fn cache_path(&self) -> PathBuf {
        self.dir.join("pkgdb.cache")
    }

    /// Path to the lock file guarding the cache.
    ///
    /// Distinct from the cache file itself so rebuilds can replace the
    /// cache atomically while the lock stays in place.
    pub fn lock_path(&self) -> PathBuf {
        self.dir.join("lock")
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_dir() {
        let config = DbConfig::new("/tmp/testdb");
        assert_eq!(config.cache_path(), Path::new("/tmp/testdb/pkgdb.cache"));
        assert_eq!(config.lock_path(), Path::new("/tmp/testdb/lock"));
    }

    #[test]
    fn test_default_dir() {
        assert_eq!(DbConfig::default().dir(), Path::new("/var/db/pkg"));
    }
}
