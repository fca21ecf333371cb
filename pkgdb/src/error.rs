// SPDX-License-Identifier: MIT

//! Error types for package database queries.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for package database queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a query session.
///
/// Absence of individual records or fields is never an error; it is
/// recovered locally by skipping the record or leaving the field
/// unset. Only structural failures surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Cache store error
    #[error("Store error: {0}")]
    Store(#[from] pkgdb_store::Error),

    /// Failed to open or lock the database lock file.
    ///
    /// Lock failures are environment errors with no recovery path in
    /// the core; callers typically treat them as fatal. The decision
    /// to terminate belongs to the embedding application.
    #[error("Unable to acquire a lock on the database at '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The well-known count key is missing or malformed.
    #[error("Corrupted database")]
    CorruptDatabase,

    /// A pattern-bearing match mode was requested without a pattern.
    #[error("A pattern is required")]
    PatternRequired,

    /// The selector pattern failed to compile as a regular expression.
    #[error("'{pattern}' is not a valid regular expression")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The selector pattern failed to compile as a shell glob.
    #[error("'{pattern}' is not a valid glob pattern")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
