// SPDX-License-Identifier: MIT

//! Cache connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::SCHEMA_SQL;

/// Cache open mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Read-only access (for query sessions against the shared cache)
    ReadOnly,
    /// Create the cache if it doesn't exist (for the rebuild side)
    Create,
}

/// Handle to the on-disk package cache.
///
/// Query sessions open the cache read-only; only the cache-rebuild
/// side and tests ever write.
#[derive(Debug)]
pub struct CacheDb {
    pub(crate) conn: Connection,
}

impl CacheDb {
    /// Open the cache file at `path` read-only.
    ///
    /// Fails with [`Error::CacheNotFound`] if the file is absent.
    /// Empty or torn content does not fail here; it surfaces later as
    /// "key not found".
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(path, OpenMode::ReadOnly)
    }

    /// Open or create a cache at `path`.
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        let flags = match mode {
            OpenMode::ReadOnly => {
                if !path.exists() {
                    return Err(Error::CacheNotFound(path.to_owned()));
                }
                OpenFlags::SQLITE_OPEN_READ_ONLY
            }
            OpenMode::Create => OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        };

        let conn = Connection::open_with_flags(path, flags).map_err(|e| Error::CacheOpen {
            path: path.to_owned(),
            source: e,
        })?;
        let db = Self { conn };

        if mode == OpenMode::Create {
            db.create_schema()?;
        }

        debug!("Opened cache at {} ({:?})", path.display(), mode);
        Ok(db)
    }

    /// Create an in-memory cache (for testing).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.create_schema()?;
        debug!("Created in-memory cache");
        Ok(db)
    }

    /// Create the cache schema.
    pub fn create_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Check if the cache has the expected schema table.
    pub fn has_schema(&self) -> Result<bool> {
        let count: i32 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='Pairs'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
