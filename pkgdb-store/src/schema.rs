// SPDX-License-Identifier: MIT

//! Schema definition for the cache store.
//!
//! One table holds every key/value pair. A key may appear on any
//! number of rows; the autoincrement rowid fixes the enumeration order
//! of its values to insertion order.

/// Cache schema SQL (the Pairs table and its key index)
pub const SCHEMA_SQL: &str = r#"
create table if not exists Pairs (
    id    integer primary key autoincrement not null,
    key   blob not null,
    value blob not null
);

create index if not exists IndexPairsKey on Pairs(key);
"#;
