// SPDX-License-Identifier: MIT

//! Write operations for the cache store.
//!
//! These are used by the cache-rebuild side and by tests; query
//! sessions never write.

use rusqlite::params;

use crate::connection::CacheDb;
use crate::error::Result;

impl CacheDb {
    /// Add one value under `key`.
    ///
    /// A key may hold any number of values; each `append` adds another
    /// without disturbing the ones already stored, and enumeration
    /// returns them in the order they were appended.
    pub fn append(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Pairs (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove every value stored under `key`.
    ///
    /// Returns the number of values removed.
    pub fn remove(&self, key: &[u8]) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM Pairs WHERE key = ?1", params![key])?;
        Ok(rows)
    }

    /// Replace the values under `key` with a single value.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM Pairs WHERE key = ?1", params![key])?;
        tx.execute(
            "INSERT INTO Pairs (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        tx.commit()?;
        Ok(())
    }
}
