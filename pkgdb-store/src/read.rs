// SPDX-License-Identifier: MIT

//! Read operations for the cache store.

use rusqlite::params;

use crate::connection::CacheDb;
use crate::error::Result;

impl CacheDb {
    /// Look up the first value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    pub fn find_one(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT value FROM Pairs WHERE key = ?1 ORDER BY id LIMIT 1
            "#,
        )?;

        let value = stmt.query_row(params![key], |row| row.get(0));

        match value {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Enumerate every value stored under `key`, in insertion order.
    ///
    /// A fresh call re-scans from the start; an absent key yields an
    /// empty list, not an error.
    pub fn find_all(&self, key: &[u8]) -> Result<Vec<Vec<u8>>> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT value FROM Pairs WHERE key = ?1 ORDER BY id
            "#,
        )?;

        let mut values = Vec::new();
        let mut rows = stmt.query(params![key])?;
        while let Some(row) = rows.next()? {
            values.push(row.get(0)?);
        }
        Ok(values)
    }

    /// Check whether any value is stored under `key`.
    pub fn contains(&self, key: &[u8]) -> Result<bool> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            SELECT 1 FROM Pairs WHERE key = ?1 LIMIT 1
            "#,
        )?;

        let exists = stmt.query_row(params![key], |_| Ok(())).is_ok();
        Ok(exists)
    }
}
