// SPDX-License-Identifier: MIT

//! Multi-valued key/value cache backing the package database.
//!
//! The package database is a flat, indexed cache of installed-package
//! metadata. This crate provides the storage layer for it: a minimal
//! constant store where a key maps to one or more values, values under
//! a key keep their insertion order, and readers never mutate the file.
//!
//! **Architecture**: this is the storage collaborator of the query
//! core in the `pkgdb` crate; the key space convention lives there.
//!
//! # Key Features
//!
//! - Exact-key lookup (`find_one`) and ordered multi-value enumeration
//!   (`find_all`)
//! - Read-only access to the shared on-disk cache
//! - In-memory database for testing
//! - Write operations for the cache-rebuild side and tests
//!
//! # Example
//!
//! ```ignore
//! use pkgdb_store::CacheDb;
//!
//! let store = CacheDb::open_at("/var/db/pkg/pkgdb.cache")?;
//! if let Some(value) = store.find_one(b"count")? {
//!     println!("count value is {} bytes", value.len());
//! }
//! ```

mod connection;
mod error;
mod read;
mod schema;
mod write;

pub use connection::{CacheDb, OpenMode};
pub use error::{Error, Result};
