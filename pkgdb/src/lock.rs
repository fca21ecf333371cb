// SPDX-License-Identifier: MIT

//! Advisory locking for the package database.
//!
//! The database directory carries a dedicated lock file, separate from
//! the cache file itself. Readers take a shared `flock()` on it for
//! the duration of a load; the rebuild side takes an exclusive one
//! while it replaces the cache. This is the only inter-process
//! synchronization in the system.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;

use nix::errno::Errno;
use nix::fcntl::{Flock, FlockArg};
use tracing::debug;

use crate::config::DbConfig;
use crate::error::{Error, Result};

/// Which lock to take on the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockKind {
    /// Shared lock for readers; any number may hold it concurrently.
    Shared,
    /// Exclusive lock for the rebuild side; excludes all holders.
    Exclusive,
}

/// A held lock on the database, backed by `flock()` on the lock file.
///
/// Released when dropped; "not held" is simply the absence of the
/// value.
pub struct DbLock {
    _flock: Flock<File>,
    _path: PathBuf,
}

impl DbLock {
    /// Acquire a lock on the database named by `config` (blocking, no
    /// timeout).
    ///
    /// Creates the lock file if absent, world-readable. Failure to
    /// open or lock is an environment error with no recovery path in
    /// the core; it surfaces as [`Error::Lock`] and callers decide
    /// whether to terminate.
    pub fn acquire(config: &DbConfig, kind: LockKind) -> Result<Self> {
        let path = config.lock_path();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .mode(0o644)
            .open(&path)
            .map_err(|source| Error::Lock {
                path: path.clone(),
                source,
            })?;

        let (nonblocking, blocking) = match kind {
            LockKind::Shared => (FlockArg::LockSharedNonblock, FlockArg::LockShared),
            LockKind::Exclusive => (FlockArg::LockExclusiveNonblock, FlockArg::LockExclusive),
        };

        let flock = match Flock::lock(file, nonblocking) {
            Ok(flock) => flock,
            Err((file, Errno::EWOULDBLOCK)) => {
                debug!("waiting for the database lock at {}", path.display());
                Flock::lock(file, blocking).map_err(|(_, errno)| Error::Lock {
                    path: path.clone(),
                    source: io::Error::from_raw_os_error(errno as i32),
                })?
            }
            Err((_, errno)) => {
                return Err(Error::Lock {
                    path,
                    source: io::Error::from_raw_os_error(errno as i32),
                });
            }
        };

        debug!("acquired {kind:?} lock at {}", path.display());
        Ok(Self {
            _flock: flock,
            _path: path,
        })
    }

    /// Release the lock.
    pub fn release(self) {
        // Dropping unlocks and closes the descriptor.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_creates_lock_file() {
        let dir = TempDir::new().unwrap();
        let config = DbConfig::new(dir.path());

        let _lock = DbLock::acquire(&config, LockKind::Shared).unwrap();
        assert!(config.lock_path().exists());
    }

    #[test]
    fn test_shared_locks_coexist() {
        let dir = TempDir::new().unwrap();
        let config = DbConfig::new(dir.path());

        let first = DbLock::acquire(&config, LockKind::Shared).unwrap();
        // A second reader must not block while the first is held.
        let second = DbLock::acquire(&config, LockKind::Shared).unwrap();
        first.release();
        second.release();
    }

    #[test]
    fn test_exclusive_after_release() {
        let dir = TempDir::new().unwrap();
        let config = DbConfig::new(dir.path());

        {
            let _shared = DbLock::acquire(&config, LockKind::Shared).unwrap();
        }
        // Once the shared lock is dropped, an exclusive lock succeeds
        // immediately on the nonblocking fast path.
        let _exclusive = DbLock::acquire(&config, LockKind::Exclusive).unwrap();
    }

    #[test]
    fn test_lock_is_exclusive_across_threads() {
        let dir = TempDir::new().unwrap();
        let config = DbConfig::new(dir.path());

        let guard = DbLock::acquire(&config, LockKind::Exclusive).unwrap();

        let config2 = config.clone();
        let handle = std::thread::spawn(move || {
            // Blocks until the main thread releases.
            let lock = DbLock::acquire(&config2, LockKind::Shared).unwrap();
            lock.release();
        });

        std::thread::sleep(std::time::Duration::from_millis(50));
        guard.release();
        handle.join().unwrap();
    }
}
