//! Version token parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ResolveError;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]+\.[0-9]+(?:\.[0-9]+){0,2}(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?(?:\+[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$",
    )
    .expect("Invalid version regex")
});

/// A documentation version such as `1.5.0` or `1.6.0-rc1`.
///
/// The accepted grammar is `MAJOR.MINOR[.PATCH[.BUILD]]` with an optional
/// `-pre-release` and `+build` suffix. The input text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Parse and validate a version token.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let invalid = |reason: &str| ResolveError::InvalidVersion {
            version: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("version must not be empty"));
        }
        if !VERSION_RE.is_match(input) {
            return Err(invalid(
                "expected MAJOR.MINOR[.PATCH[.BUILD]] with optional -pre-release and +build suffixes",
            ));
        }

        Ok(Self(input.to_string()))
    }

    /// The version exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Debian-style alias of this version.
    ///
    /// Debian sorts `~` before the empty string, so the pre-release separator
    /// becomes `~` (`1.6.0-rc1` -> `1.6.0~rc1`). Release versions are unchanged.
    pub fn debian_alias(&self) -> String {
        match self.0.split_once('+') {
            Some((rest, build)) => format!("{}+{}", rest.replacen('-', "~", 1), build),
            None => self.0.replacen('-', "~", 1),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_release_versions() {
        for v in ["1.5.0", "1.5", "24.04", "6.2.0.1"] {
            assert_eq!(Version::parse(v).unwrap().as_str(), v);
        }
    }

    #[test]
    fn accepts_pre_release_and_build_suffixes() {
        assert!(Version::parse("1.6.0-rc1").is_ok());
        assert!(Version::parse("1.6.0-beta.2+20240101").is_ok());
        assert!(Version::parse("1.0.0-rc-1").is_ok());
    }

    #[test]
    fn rejects_empty_version() {
        let err = Version::parse("").unwrap_err();

        assert!(matches!(err, ResolveError::InvalidVersion { .. }));
    }

    #[test]
    fn rejects_unrecognized_tokens() {
        for v in ["latest", "1", "1..0", "v1.5.0", "1.5.0-", "1.5.0 ", "1.2.3.4.5", "1.5.0-rc_1", "1.5.0-rc..1", "１.５"] {
            assert!(
                matches!(Version::parse(v), Err(ResolveError::InvalidVersion { .. })),
                "{v} should be rejected"
            );
        }
    }

    #[test]
    fn debian_alias_matches_release_version() {
        assert_eq!(Version::parse("1.5.0").unwrap().debian_alias(), "1.5.0");
    }

    #[test]
    fn debian_alias_uses_tilde_for_pre_release() {
        assert_eq!(
            Version::parse("1.6.0-rc1").unwrap().debian_alias(),
            "1.6.0~rc1"
        );
        assert_eq!(
            Version::parse("1.6.0-rc.1+b7").unwrap().debian_alias(),
            "1.6.0~rc.1+b7"
        );
    }
}
