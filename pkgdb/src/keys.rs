// SPDX-License-Identifier: MIT

//! Key space convention of the package cache.
//!
//! Every lookup the query core performs goes through one of these key
//! kinds, serialized deterministically. The cache-rebuild side must
//! reproduce the encoding bit-for-bit, which is why this module is
//! public.
//!
//! A package record at index `i` is spread over several keys: the raw
//! index bytes map to the identity string, and per-field ASCII keys
//! embed the index for the secondary fields and the dependency list.
//! The dependency-list key is multi-valued (one value per dependency
//! identity, declared order); everything else holds a single value.

/// A typed cache lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Total number of package indices; value is a `u64` in little
    /// endian.
    Count,
    /// Identity ("name-version") string of the package at an index.
    Identity(u64),
    /// Package name.
    Name(u64),
    /// Package version.
    Version(u64),
    /// One-line comment.
    Comment(u64),
    /// Long description.
    Description(u64),
    /// Port origin.
    Origin(u64),
    /// Dependency identity list (multi-valued).
    Dependencies(u64),
}

impl Key {
    /// Serialize the key to the exact bytes stored in the cache.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Key::Count => b"count".to_vec(),
            Key::Identity(idx) => idx.to_le_bytes().to_vec(),
            Key::Name(idx) => format!("{idx}_name").into_bytes(),
            Key::Version(idx) => format!("{idx}_version").into_bytes(),
            Key::Comment(idx) => format!("{idx}_comment").into_bytes(),
            Key::Description(idx) => format!("{idx}_desc").into_bytes(),
            Key::Origin(idx) => format!("{idx}_origin").into_bytes(),
            Key::Dependencies(idx) => format!("{idx}_deps").into_bytes(),
        }
    }
}

/// Encode a count value the way the cache stores it.
pub fn encode_count(count: u64) -> [u8; 8] {
    count.to_le_bytes()
}

/// Decode a count value; `None` if the stored bytes are malformed.
pub fn decode_count(value: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = value.try_into().ok()?;
    Some(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_is_deterministic() {
        assert_eq!(Key::Count.encode(), b"count");
        assert_eq!(Key::Identity(3).encode(), 3u64.to_le_bytes());
        assert_eq!(Key::Name(0).encode(), b"0_name");
        assert_eq!(Key::Version(12).encode(), b"12_version");
        assert_eq!(Key::Comment(12).encode(), b"12_comment");
        assert_eq!(Key::Description(7).encode(), b"7_desc");
        assert_eq!(Key::Origin(7).encode(), b"7_origin");
        assert_eq!(Key::Dependencies(42).encode(), b"42_deps");
    }

    #[test]
    fn test_keys_do_not_collide() {
        // Identity keys are raw 8-byte indices; field keys are ASCII
        // and never 8 bytes of the small-index form.
        let keys = [
            Key::Count,
            Key::Identity(0),
            Key::Identity(1),
            Key::Name(0),
            Key::Name(1),
            Key::Version(0),
            Key::Comment(0),
            Key::Description(0),
            Key::Origin(0),
            Key::Dependencies(0),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a.encode(), b.encode(), "{a:?} collides with {b:?}");
            }
        }
    }

    #[test]
    fn test_count_roundtrip() {
        assert_eq!(decode_count(&encode_count(0)), Some(0));
        assert_eq!(decode_count(&encode_count(u64::MAX)), Some(u64::MAX));
        assert_eq!(decode_count(b"short"), None);
        assert_eq!(decode_count(b"way too long for a u64"), None);
    }
}
