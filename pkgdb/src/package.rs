// SPDX-License-Identifier: MIT

//! Package records and their flag sets.

use bitflags::bitflags;

bitflags! {
    /// Per-record error flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PkgFlags: u8 {
        /// The record names a dependency that resolves to no installed
        /// package. Entries carrying this flag are placeholders, not
        /// real packages; the reverse-dependency scan ignores them.
        const NOT_INSTALLED = 0b0000_0001;
    }
}

bitflags! {
    /// What a query session resolves for each matched package.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LoadFlags: u8 {
        /// Populate each match's forward dependency list.
        const DEPENDENCIES = 0b0000_0001;
        /// Populate each match's reverse-dependency list.
        const REVERSE_DEPENDENCIES = 0b0000_0010;
    }
}

/// A forward-dependency entry: the partially loaded form of a package,
/// carrying its identity only.
///
/// Dependencies are leaves by construction — they cannot carry further
/// dependency lists — so releasing a package graph is a plain
/// structural walk with no aliasing to guard against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Canonical "name-version" identity of the dependency.
    pub identity: String,
    /// Error flags; see [`PkgFlags::NOT_INSTALLED`].
    pub flags: PkgFlags,
}

impl Dependency {
    pub(crate) fn new(identity: String) -> Self {
        Self {
            identity,
            flags: PkgFlags::empty(),
        }
    }
}

/// One entry in the installed-package database.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    /// Position in the cache enumeration; stable for one open session
    /// only.
    pub index: u64,
    /// Canonical "name-version" string; the cache's lookup key.
    pub identity: String,
    /// Package name. Absent only on a partial record; never fatal.
    pub name: Option<String>,
    /// Package version.
    pub version: Option<String>,
    /// One-line comment.
    pub comment: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Port origin.
    pub origin: Option<String>,
    /// Forward dependencies, declared order; populated only when the
    /// session was loaded with [`LoadFlags::DEPENDENCIES`].
    pub dependencies: Vec<Dependency>,
    /// Packages depending on this one, cache enumeration order;
    /// populated only with [`LoadFlags::REVERSE_DEPENDENCIES`]. The
    /// entries are fully loaded records whose own `dependencies` list
    /// is empty: the scan consults and discards it.
    pub reverse_dependencies: Vec<Package>,
    /// Error flags.
    pub flags: PkgFlags,
}

impl Package {
    /// The sort key of the selected set: the name, falling back to the
    /// identity for partial records with no name field.
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_name_falls_back_to_identity() {
        let mut pkg = Package {
            identity: "zsh-5.9".into(),
            ..Default::default()
        };
        assert_eq!(pkg.sort_name(), "zsh-5.9");

        pkg.name = Some("zsh".into());
        assert_eq!(pkg.sort_name(), "zsh");
    }

    #[test]
    fn test_not_installed_flag() {
        let mut dep = Dependency::new("ghost-1.0".into());
        assert!(!dep.flags.contains(PkgFlags::NOT_INSTALLED));

        dep.flags |= PkgFlags::NOT_INSTALLED;
        assert!(dep.flags.contains(PkgFlags::NOT_INSTALLED));
    }
}
