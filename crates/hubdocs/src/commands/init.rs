//! Scaffold a hub documentation build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(root: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing hubdocs in {}", root.display());

    let files = [
        ("docs.toml", DEFAULT_CONFIG),
        ("projects.yaml", DEFAULT_MANIFEST),
        ("sphinx/_toc.yml", DEFAULT_TOC),
        ("index.md", DEFAULT_INDEX),
    ];

    let mut written = 0;
    for (relative, content) in files {
        if write_file(root, relative, content, yes)? {
            written += 1;
        }
    }

    tracing::info!("Initialization complete! Wrote {} file(s)", written);
    tracing::info!("Run 'hubdocs check' to validate the build inputs.");

    Ok(())
}

/// Write a scaffold file unless it exists and `overwrite` is false.
fn write_file(root: &Path, relative: &str, content: &str, overwrite: bool) -> Result<bool> {
    let path = root.join(relative);

    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", relative);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", relative))?;
    tracing::info!("Created {}", relative);

    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# hubdocs configuration

[build]
# Manifest of projects aggregated into the site
manifest = "projects.yaml"

# Project being built (must be declared in the manifest)
project = "device-metrics-exporter"

# Version being documented
version = "1.5.0"

# Navigation tree descriptor
toc = "sphinx/_toc.yml"

# Paths skipped by the source scan
exclude = [".venv"]

[site]
author = "Advanced Micro Devices, Inc."
copyright = "Copyright (c) 2024 Advanced Micro Devices, Inc. All rights reserved."
extensions = ["rocm_docs"]

# Titles used for projects whose manifest entry has no display_name
[site.display_names]
device-metrics-exporter = "AMD Device Metrics Exporter"

[theme]
name = "rocm_docs_theme"
flavor = "instinct"
repository_url = "https://github.com/rocm/device-metrics-exporter"
show_navbar_depth = 0

# Supported Ubuntu releases, in display order
[[platforms]]
version = "24.04"
codename = "noble"

[[platforms]]
version = "22.04"
codename = "jammy"
"#;

const DEFAULT_MANIFEST: &str = r#"# Projects aggregated into the documentation hub.
# An empty remote means the project is built from the local checkout;
# an empty remote_repository keeps this file as the authoritative list.
remote_repository: ""
projects:
  - id: device-metrics-exporter
    remote: ""
"#;

const DEFAULT_TOC: &str = r#"defaults:
  numbered: False
  maxdepth: 6
root: index
subtrees:
  - caption: Getting started
    entries:
      - file: index
"#;

const DEFAULT_INDEX: &str = r#"# AMD Device Metrics Exporter

Welcome to the documentation.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::resolve::resolve_descriptor;
    use crate::BuildArgs;
    use tempfile::tempdir;

    #[test]
    fn scaffold_resolves_out_of_the_box() {
        let temp = tempdir().unwrap();

        run(temp.path(), false).unwrap();

        let descriptor = resolve_descriptor(
            temp.path(),
            &temp.path().join("docs.toml"),
            BuildArgs::default(),
        )
        .unwrap();
        assert_eq!(descriptor.html_title(), "AMD Device Metrics Exporter 1.5.0");
        assert_eq!(
            descriptor.theme_options().repository_url.as_deref(),
            Some("https://github.com/rocm/device-metrics-exporter")
        );
        assert!(descriptor.theme_options().announcement.is_some());
    }

    #[test]
    fn does_not_overwrite_without_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("docs.toml"), "# custom\n").unwrap();

        run(temp.path(), false).unwrap();

        let content = fs::read_to_string(temp.path().join("docs.toml")).unwrap();
        assert_eq!(content, "# custom\n");
        assert!(temp.path().join("projects.yaml").exists());
    }

    #[test]
    fn overwrites_with_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("docs.toml"), "# custom\n").unwrap();

        run(temp.path(), true).unwrap();

        let content = fs::read_to_string(temp.path().join("docs.toml")).unwrap();
        assert!(content.contains("device-metrics-exporter"));
    }
}
