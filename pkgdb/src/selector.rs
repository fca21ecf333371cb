// SPDX-License-Identifier: MIT

//! Selector matching package identities against a query pattern.

use crate::error::{Error, Result};

/// How a query pattern is interpreted.
///
/// Closed enumeration; `Regex` and `ERegex` kept basic and extended
/// POSIX syntax apart in the original interface and both compile
/// through the same engine here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Match every package; the pattern is ignored.
    All,
    /// Byte equality with the identity string.
    Exact,
    /// Shell glob against the identity string.
    Glob,
    /// Basic regular expression against the identity string.
    Regex,
    /// Extended regular expression against the identity string.
    ERegex,
}

impl MatchMode {
    /// Whether this mode needs a pattern at all.
    pub fn requires_pattern(&self) -> bool {
        !matches!(self, MatchMode::All)
    }
}

#[derive(Debug)]
enum Compiled {
    All,
    Exact(String),
    Glob(glob::Pattern),
    Regex(regex::Regex),
}

/// A selector compiled once per session.
#[derive(Debug)]
pub struct Selector {
    compiled: Compiled,
}

impl Selector {
    /// Validate and compile a selector.
    ///
    /// A pattern-bearing mode without a pattern is a usage error,
    /// raised before any data access; a pattern that fails to compile
    /// aborts the session load, reported with the offending pattern.
    pub fn new(mode: MatchMode, pattern: Option<&str>) -> Result<Self> {
        if mode == MatchMode::All {
            return Ok(Self {
                compiled: Compiled::All,
            });
        }

        let pattern = pattern.ok_or(Error::PatternRequired)?;

        let compiled = match mode {
            MatchMode::All => unreachable!(),
            MatchMode::Exact => Compiled::Exact(pattern.to_owned()),
            MatchMode::Glob => {
                let glob = glob::Pattern::new(pattern).map_err(|source| Error::InvalidGlob {
                    pattern: pattern.to_owned(),
                    source,
                })?;
                Compiled::Glob(glob)
            }
            // No submatch positions are ever requested, so captures
            // stay unused either way.
            MatchMode::Regex | MatchMode::ERegex => {
                let re = regex::Regex::new(pattern).map_err(|source| Error::InvalidRegex {
                    pattern: pattern.to_owned(),
                    source,
                })?;
                Compiled::Regex(re)
            }
        };

        Ok(Self { compiled })
    }

    /// Evaluate the selector against a package identity.
    pub fn matches(&self, identity: &str) -> bool {
        match &self.compiled {
            Compiled::All => true,
            Compiled::Exact(pattern) => identity == pattern,
            Compiled::Glob(glob) => glob.matches(identity),
            Compiled::Regex(re) => re.is_match(identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_match_all_ignores_pattern() {
        let selector = Selector::new(MatchMode::All, None).unwrap();
        assert!(selector.matches("anything-1.0"));
        assert!(selector.matches(""));
    }

    #[rstest]
    #[case(MatchMode::Exact)]
    #[case(MatchMode::Glob)]
    #[case(MatchMode::Regex)]
    #[case(MatchMode::ERegex)]
    fn test_pattern_required(#[case] mode: MatchMode) {
        assert!(mode.requires_pattern());
        let err = Selector::new(mode, None).unwrap_err();
        assert!(matches!(err, Error::PatternRequired));
    }

    #[test]
    fn test_exact_is_byte_equality() {
        let selector = Selector::new(MatchMode::Exact, Some("zsh-5.9")).unwrap();
        assert!(selector.matches("zsh-5.9"));
        assert!(!selector.matches("zsh-5.9_1"));
        assert!(!selector.matches("zsh"));
    }

    #[rstest]
    #[case("lib*", "libfoo-1.0", true)]
    #[case("lib*", "bar-1.0", false)]
    #[case("*-1.0", "libfoo-1.0", true)]
    #[case("zsh-5.?", "zsh-5.9", true)]
    #[case("zsh-5.?", "zsh-5.10", false)]
    fn test_glob(#[case] pattern: &str, #[case] identity: &str, #[case] expected: bool) {
        let selector = Selector::new(MatchMode::Glob, Some(pattern)).unwrap();
        assert_eq!(selector.matches(identity), expected);
    }

    #[test]
    fn test_regex() {
        let selector = Selector::new(MatchMode::ERegex, Some("^lib(foo|baz)-")).unwrap();
        assert!(selector.matches("libfoo-1.0"));
        assert!(selector.matches("libbaz-2.1"));
        assert!(!selector.matches("libbar-1.0"));
    }

    #[test]
    fn test_bad_regex_reports_pattern() {
        let err = Selector::new(MatchMode::Regex, Some("foo[")).unwrap_err();
        match err {
            Error::InvalidRegex { pattern, .. } => assert_eq!(pattern, "foo["),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_glob_reports_pattern() {
        let err = Selector::new(MatchMode::Glob, Some("a[")).unwrap_err();
        match err {
            Error::InvalidGlob { pattern, .. } => assert_eq!(pattern, "a["),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
