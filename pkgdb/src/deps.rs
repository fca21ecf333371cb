// SPDX-License-Identifier: MIT

//! Forward and reverse dependency resolution.
//!
//! Forward lists are stored per package and read back in declared
//! order. Reverse lists are not stored anywhere: they are computed by
//! scanning every package's forward list for the target identity.

use pkgdb_store::CacheDb;

use crate::error::Result;
use crate::keys::Key;
use crate::package::{Dependency, Package, PkgFlags};
use crate::record::load_package;

/// Load the forward dependency list of the package at `index`.
///
/// Entries are partially loaded leaves carrying the dependency
/// identity only; no further lookups happen per entry. Order is the
/// stored (declared) order. Non-UTF-8 entries are dropped.
pub(crate) fn load_dependencies(store: &CacheDb, index: u64) -> Result<Vec<Dependency>> {
    let values = store.find_all(&Key::Dependencies(index).encode())?;

    Ok(values
        .into_iter()
        .filter_map(|raw| String::from_utf8(raw).ok())
        .map(Dependency::new)
        .collect())
}

/// Compute the reverse-dependency list of the package with `identity`.
///
/// Walks every index in `0..total`: loads the candidate, loads its
/// scratch dependency list, and retains the candidate on the first
/// entry that is not flagged not-installed and whose identity equals
/// the target. The scratch list is consulted and discarded; it is
/// never attached to a retained candidate, so reverse-dependency
/// entries carry an empty `dependencies` list.
///
/// This is a full-table scan, O(N²) against the store in the worst
/// case; it runs only on explicit request.
pub(crate) fn load_reverse_dependencies(
    store: &CacheDb,
    identity: &str,
    total: u64,
) -> Result<Vec<Package>> {
    let mut rdeps = Vec::new();

    for index in 0..total {
        let Some(candidate) = load_package(store, index)? else {
            continue;
        };

        let scratch = load_dependencies(store, index)?;
        let depends_on_target = scratch
            .iter()
            .any(|dep| !dep.flags.contains(PkgFlags::NOT_INSTALLED) && dep.identity == identity);

        if depends_on_target {
            rdeps.push(candidate);
        }
    }

    Ok(rdeps)
}
