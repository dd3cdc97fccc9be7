//! Path globs excluded from the documentation scan.

use std::path::{Component, Path};

use glob::Pattern;
use serde::Serialize;

use crate::error::ResolveError;

/// Exclusion patterns, validated and deduplicated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// Compile a set of glob patterns.
    ///
    /// Patterns are used verbatim. A blank pattern is an error; a repeated
    /// pattern keeps its first position.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ResolveError> {
        let mut compiled: Vec<Pattern> = Vec::with_capacity(patterns.len());

        for raw in patterns {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                return Err(ResolveError::InvalidExclusion {
                    pattern: raw.to_string(),
                    message: "pattern must not be blank".to_string(),
                });
            }
            if compiled.iter().any(|p| p.as_str() == raw) {
                continue;
            }

            let pattern = Pattern::new(raw).map_err(|e| ResolveError::InvalidExclusion {
                pattern: raw.to_string(),
                message: e.msg.to_string(),
            })?;
            compiled.push(pattern);
        }

        Ok(Self { patterns: compiled })
    }

    /// Pattern strings in insertion order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether a root-relative path is excluded.
    ///
    /// A pattern matches either the whole path or any single component,
    /// so `.venv` excludes everything below a `.venv` directory.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let full = relative.to_string_lossy().replace('\\', "/");

        self.patterns.iter().any(|pattern| {
            pattern.matches(&full)
                || relative.components().any(|c| match c {
                    Component::Normal(name) => pattern.matches(&name.to_string_lossy()),
                    _ => false,
                })
        })
    }
}

impl PartialEq for ExclusionSet {
    fn eq(&self, other: &Self) -> bool {
        self.patterns() == other.patterns()
    }
}

impl Eq for ExclusionSet {}

impl Serialize for ExclusionSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.patterns.iter().map(Pattern::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_in_insertion_order() {
        let set = ExclusionSet::new(&[".venv", "_build", ".venv"]).unwrap();

        assert_eq!(set.patterns(), vec![".venv", "_build"]);
    }

    #[test]
    fn empty_set_excludes_nothing() {
        let set = ExclusionSet::new::<&str>(&[]).unwrap();

        assert!(set.is_empty());
        assert!(!set.is_excluded(Path::new("index.md")));
    }

    #[test]
    fn excludes_directory_by_component() {
        let set = ExclusionSet::new(&[".venv"]).unwrap();

        assert!(set.is_excluded(Path::new(".venv/lib/site-packages/readme.md")));
        assert!(!set.is_excluded(Path::new("docs/venv.md")));
    }

    #[test]
    fn matches_full_path_globs() {
        let set = ExclusionSet::new(&["drafts/*.md"]).unwrap();

        assert!(set.is_excluded(Path::new("drafts/wip.md")));
        assert!(!set.is_excluded(Path::new("guides/wip.md")));
    }

    #[test]
    fn rejects_blank_pattern() {
        for blank in ["", "   "] {
            let result = ExclusionSet::new(&[".venv", blank]);

            assert!(matches!(
                result,
                Err(ResolveError::InvalidExclusion { ref message, .. }) if message.contains("blank")
            ));
        }
    }

    #[test]
    fn rejects_invalid_glob() {
        let result = ExclusionSet::new(&["[unclosed"]);

        assert!(matches!(
            result,
            Err(ResolveError::InvalidExclusion { ref pattern, .. }) if pattern == "[unclosed"
        ));
    }
}
