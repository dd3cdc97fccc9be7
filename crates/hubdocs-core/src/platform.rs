//! Supported platform matrix.

use serde::{Deserialize, Serialize};

/// A supported operating system release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Release number, e.g. "24.04"
    pub version: String,
    /// Release codename, e.g. "noble"
    pub codename: String,
}

impl Platform {
    pub fn new(version: impl Into<String>, codename: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            codename: codename.into(),
        }
    }
}

/// Supported platforms in display order.
///
/// The order is whatever the configuration lists; it is never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformMatrix(Vec<Platform>);

impl PlatformMatrix {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self(platforms)
    }

    /// Build a matrix from `(version, codename)` pairs.
    pub fn from_pairs<V, C>(pairs: impl IntoIterator<Item = (V, C)>) -> Self
    where
        V: Into<String>,
        C: Into<String>,
    {
        Self(pairs.into_iter().map(|(v, c)| Platform::new(v, c)).collect())
    }

    /// Ubuntu releases supported by the current documentation.
    pub fn ubuntu_default() -> Self {
        Self::from_pairs([("24.04", "noble"), ("22.04", "jammy")])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The matrix as `(version, codename)` pairs.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|p| (p.version.as_str(), p.codename.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_display_order() {
        let matrix = PlatformMatrix::from_pairs([("22.04", "jammy"), ("24.04", "noble"), ("20.04", "focal")]);

        assert_eq!(
            matrix.pairs(),
            vec![("22.04", "jammy"), ("24.04", "noble"), ("20.04", "focal")]
        );
    }

    #[test]
    fn default_lists_newest_first() {
        let matrix = PlatformMatrix::ubuntu_default();

        assert_eq!(matrix.pairs(), vec![("24.04", "noble"), ("22.04", "jammy")]);
    }
}
