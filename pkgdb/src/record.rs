// SPDX-License-Identifier: MIT

//! Loading one package record from the cache.

use pkgdb_store::CacheDb;
use tracing::warn;

use crate::error::Result;
use crate::keys::Key;
use crate::package::{Package, PkgFlags};

/// Load the package record at `index`.
///
/// Returns `Ok(None)` when no identity is stored at the index; the
/// caller skips the index rather than treating the whole set as
/// corrupt. Each secondary field may be independently absent — that is
/// data (a sparse or partial record), not an error.
pub(crate) fn load_package(store: &CacheDb, index: u64) -> Result<Option<Package>> {
    let Some(identity) = text_value(store, Key::Identity(index))? else {
        return Ok(None);
    };

    Ok(Some(Package {
        index,
        identity,
        name: text_value(store, Key::Name(index))?,
        version: text_value(store, Key::Version(index))?,
        comment: text_value(store, Key::Comment(index))?,
        description: text_value(store, Key::Description(index))?,
        origin: text_value(store, Key::Origin(index))?,
        dependencies: Vec::new(),
        reverse_dependencies: Vec::new(),
        flags: PkgFlags::empty(),
    }))
}

/// Fetch a single text value; non-UTF-8 content is treated as absent.
fn text_value(store: &CacheDb, key: Key) -> Result<Option<String>> {
    let Some(raw) = store.find_one(&key.encode())? else {
        return Ok(None);
    };
    match String::from_utf8(raw) {
        Ok(text) => Ok(Some(text)),
        Err(_) => {
            warn!("discarding non-UTF-8 value under {key:?}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_index_is_none() {
        let store = CacheDb::open_memory().unwrap();
        assert!(load_package(&store, 0).unwrap().is_none());
    }

    #[test]
    fn test_partial_record_loads() {
        let store = CacheDb::open_memory().unwrap();
        store
            .append(&Key::Identity(0).encode(), b"vim-9.1")
            .unwrap();
        store.append(&Key::Name(0).encode(), b"vim").unwrap();

        let pkg = load_package(&store, 0).unwrap().unwrap();
        assert_eq!(pkg.identity, "vim-9.1");
        assert_eq!(pkg.name.as_deref(), Some("vim"));
        // Unstored fields stay unset without failing the load.
        assert_eq!(pkg.version, None);
        assert_eq!(pkg.comment, None);
        assert_eq!(pkg.description, None);
        assert_eq!(pkg.origin, None);
    }

    #[test]
    fn test_full_record_loads() {
        let store = CacheDb::open_memory().unwrap();
        store
            .append(&Key::Identity(2).encode(), b"zsh-5.9")
            .unwrap();
        store.append(&Key::Name(2).encode(), b"zsh").unwrap();
        store.append(&Key::Version(2).encode(), b"5.9").unwrap();
        store
            .append(&Key::Comment(2).encode(), b"The Z shell")
            .unwrap();
        store
            .append(&Key::Description(2).encode(), b"Zsh is a shell...")
            .unwrap();
        store
            .append(&Key::Origin(2).encode(), b"shells/zsh")
            .unwrap();

        let pkg = load_package(&store, 2).unwrap().unwrap();
        assert_eq!(pkg.index, 2);
        assert_eq!(pkg.version.as_deref(), Some("5.9"));
        assert_eq!(pkg.origin.as_deref(), Some("shells/zsh"));
        assert!(pkg.dependencies.is_empty());
        assert!(pkg.reverse_dependencies.is_empty());
    }

    #[test]
    fn test_non_utf8_field_treated_as_absent() {
        let store = CacheDb::open_memory().unwrap();
        store
            .append(&Key::Identity(0).encode(), b"bash-5.2")
            .unwrap();
        store.append(&Key::Comment(0).encode(), &[0xff, 0xfe]).unwrap();

        let pkg = load_package(&store, 0).unwrap().unwrap();
        assert_eq!(pkg.comment, None);
    }
}
