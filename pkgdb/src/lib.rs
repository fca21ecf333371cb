// SPDX-License-Identifier: MIT

//! Query engine for the installed-package database.
//!
//! Given the read-only package cache maintained by the rebuild side,
//! this crate resolves package records matched by a selector (exact
//! identity, shell glob, regular expression) and optionally
//! materializes each match's forward dependency list and
//! reverse-dependency list into an in-memory graph, under advisory
//! file locking shared with other processes.
//!
//! The cache itself lives in the `pkgdb-store` crate; this crate owns
//! the key space convention, the locking protocol, and the graph
//! construction.
//!
//! # Example
//!
//! ```ignore
//! use pkgdb::{DbConfig, LoadFlags, MatchMode, PkgDb, Query};
//!
//! let config = DbConfig::from_env();
//! let query = Query::new(MatchMode::Glob, Some("lib*"), LoadFlags::DEPENDENCIES);
//! let db = PkgDb::load(&config, &query)?;
//! for pkg in db.iter() {
//!     println!("{}", pkg.identity);
//! }
//! ```

mod config;
mod deps;
mod error;
pub mod keys;
mod lock;
mod package;
mod record;
mod selector;
mod session;

pub use config::DbConfig;
pub use error::{Error, Result};
pub use lock::{DbLock, LockKind};
pub use package::{Dependency, LoadFlags, Package, PkgFlags};
pub use selector::{MatchMode, Selector};
pub use session::{CacheRefresher, NoRefresh, PkgDb, Query};
