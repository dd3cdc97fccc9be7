//! Documentation source discovery.
//!
//! Walks a build root and lists the files the renderer would pick up,
//! skipping anything matched by the exclusion set.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::exclusion::ExclusionSet;

/// File extensions treated as documentation sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["md", "rst", "ipynb"];

/// Result of scanning a build root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceScan {
    /// Source files, relative to the root, sorted
    pub sources: Vec<PathBuf>,

    /// Number of entries skipped by exclusion patterns
    pub excluded: usize,
}

/// Errors that can occur while scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Build root not found: {0}")]
    RootNotFound(String),

    #[error("Failed to read build root: {0}")]
    ReadError(String),
}

/// Scan `root` for documentation sources.
pub fn scan_sources(root: &Path, exclusions: &ExclusionSet) -> Result<SourceScan, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.display().to_string()));
    }

    let mut scan = SourceScan::default();
    let mut walker = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| ScanError::ReadError(e.to_string()))?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if relative.as_os_str().is_empty() {
            continue;
        }

        if exclusions.is_excluded(relative) {
            scan.excluded += 1;
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        let ext = relative.extension().and_then(|e| e.to_str()).unwrap_or("");
        if SOURCE_EXTENSIONS.contains(&ext) {
            scan.sources.push(relative.to_path_buf());
        }
    }

    scan.sources.sort();
    tracing::debug!(
        "Found {} sources under {} ({} excluded)",
        scan.sources.len(),
        root.display(),
        scan.excluded
    );

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_sources_and_skips_excluded_dirs() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("how-to")).unwrap();
        fs::create_dir_all(root.join(".venv/lib")).unwrap();
        fs::write(root.join("index.md"), "# Home").unwrap();
        fs::write(root.join("how-to/install.rst"), "Install").unwrap();
        fs::write(root.join("conf.py"), "").unwrap();
        fs::write(root.join(".venv/lib/readme.md"), "vendored").unwrap();

        let exclusions = ExclusionSet::new(&[".venv"]).unwrap();
        let scan = scan_sources(root, &exclusions).unwrap();

        assert_eq!(
            scan.sources,
            vec![PathBuf::from("how-to/install.rst"), PathBuf::from("index.md")]
        );
        assert_eq!(scan.excluded, 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = tempdir().unwrap();

        let result = scan_sources(&temp.path().join("nope"), &ExclusionSet::default());

        assert!(matches!(result, Err(ScanError::RootNotFound(_))));
    }
}
