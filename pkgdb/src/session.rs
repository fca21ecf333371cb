// SPDX-License-Identifier: MIT

//! Query sessions over the package database.
//!
//! One session is one load cycle: refresh trigger, open, shared lock,
//! selector-filtered load of every record, optional dependency
//! resolution, sort, unlock. The shared lock is held only across the
//! load itself, so a finished reader never blocks a rebuild even while
//! its in-memory result set stays alive.
//!
//! Everything here is single-threaded synchronous I/O; a session must
//! not be shared across threads without external synchronization.

use std::collections::HashSet;

use pkgdb_store::CacheDb;
use tracing::{debug, warn};

use crate::config::DbConfig;
use crate::deps::{load_dependencies, load_reverse_dependencies};
use crate::error::{Error, Result};
use crate::keys::{self, Key};
use crate::lock::{DbLock, LockKind};
use crate::package::{LoadFlags, Package};
use crate::record::load_package;
use crate::selector::{MatchMode, Selector};

/// Triggers a cache rebuild before a session opens the store.
///
/// The rebuild is an external collaborator; its outcome is opaque to
/// the load, which proceeds or degrades to "no database" regardless.
/// It is expected to take the exclusive lock for its own critical
/// section.
pub trait CacheRefresher {
    fn refresh(&self, config: &DbConfig);
}

/// Refresher that does nothing, for callers that keep the cache fresh
/// by other means.
pub struct NoRefresh;

impl CacheRefresher for NoRefresh {
    fn refresh(&self, _config: &DbConfig) {}
}

/// A match request: how to interpret the pattern and what to resolve
/// for each matched package.
#[derive(Debug, Clone)]
pub struct Query {
    pub mode: MatchMode,
    pub pattern: Option<String>,
    pub flags: LoadFlags,
}

impl Query {
    pub fn new(mode: MatchMode, pattern: Option<&str>, flags: LoadFlags) -> Self {
        Self {
            mode,
            pattern: pattern.map(str::to_owned),
            flags,
        }
    }

    /// Match every package.
    pub fn all(flags: LoadFlags) -> Self {
        Self::new(MatchMode::All, None, flags)
    }
}

/// The result set of one query session.
///
/// Holds the store handle and every matched package, sorted by name.
/// Releasing the session is dropping it: packages, dependency leaves,
/// reverse-dependency nodes and the store handle are all single-owner,
/// so the release walk is exactly once by construction.
#[derive(Debug)]
pub struct PkgDb {
    // Kept open for the session's lifetime, mirroring the descriptor
    // lifetime of the on-disk cache; None when the database was absent.
    _store: Option<CacheDb>,
    packages: Vec<Package>,
    flags: LoadFlags,
}

impl PkgDb {
    /// Load a session without triggering a cache refresh.
    pub fn load(config: &DbConfig, query: &Query) -> Result<Self> {
        Self::load_with_refresh(config, query, &NoRefresh)
    }

    /// Load a session, triggering `refresher` first.
    ///
    /// A missing or unreadable cache file is not an error: it means
    /// nothing is installed yet, and the session comes back empty.
    /// Structural failures (lock, corrupt count, bad pattern) surface
    /// as `Err`; whatever was built up to that point is released by
    /// ownership.
    pub fn load_with_refresh(
        config: &DbConfig,
        query: &Query,
        refresher: &dyn CacheRefresher,
    ) -> Result<Self> {
        refresher.refresh(config);

        let store = match CacheDb::open_at(config.cache_path()) {
            Ok(store) => store,
            Err(err) => {
                warn!("no package cache at {}: {err}", config.cache_path().display());
                return Ok(Self {
                    _store: None,
                    packages: Vec::new(),
                    flags: query.flags,
                });
            }
        };

        // Readers never need exclusive access; only the rebuild side
        // writes, inside its own exclusive critical section.
        let lock = DbLock::acquire(config, LockKind::Shared)?;
        let result = Self::populate(store, query);
        lock.release();
        result
    }

    fn populate(store: CacheDb, query: &Query) -> Result<Self> {
        let selector = Selector::new(query.mode, query.pattern.as_deref())?;

        let count = store
            .find_one(&Key::Count.encode())?
            .and_then(|value| keys::decode_count(&value))
            .ok_or(Error::CorruptDatabase)?;

        let mut packages: Vec<Package> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for index in 0..count {
            let Some(mut pkg) = load_package(&store, index)? else {
                continue;
            };

            if !selector.matches(&pkg.identity) {
                continue;
            }
            if !seen.insert(pkg.identity.clone()) {
                continue;
            }

            if query.flags.contains(LoadFlags::DEPENDENCIES) {
                pkg.dependencies = load_dependencies(&store, index)?;
            }
            if query.flags.contains(LoadFlags::REVERSE_DEPENDENCIES) {
                pkg.reverse_dependencies = load_reverse_dependencies(&store, &pkg.identity, count)?;
            }

            packages.push(pkg);
        }

        // Byte-wise ascending by name; sort_by is stable, so equal
        // names keep cache enumeration order.
        packages.sort_by(|a, b| a.sort_name().as_bytes().cmp(b.sort_name().as_bytes()));

        debug!("selected {} of {count} package records", packages.len());
        Ok(Self {
            _store: Some(store),
            packages,
            flags: query.flags,
        })
    }

    /// Number of selected packages.
    pub fn count(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate the selected packages in name order. Each call starts a
    /// fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, Package> {
        self.packages.iter()
    }

    /// What the session was asked to resolve.
    pub fn load_flags(&self) -> LoadFlags {
        self.flags
    }
}

impl<'a> IntoIterator for &'a PkgDb {
    type Item = &'a Package;
    type IntoIter = std::slice::Iter<'a, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
