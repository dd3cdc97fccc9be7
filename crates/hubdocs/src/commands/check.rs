//! Build input check command.

use std::path::Path;

use anyhow::Result;
use hubdocs_core::{scan_sources, ProjectSource};

use super::resolve::resolve_descriptor;
use crate::BuildArgs;

/// Run the check command.
pub fn run(root: &Path, config_path: &Path, args: BuildArgs) -> Result<()> {
    tracing::info!("Checking build inputs in {}", root.display());

    let descriptor = resolve_descriptor(root, config_path, args)?;

    match descriptor.projects_remote_repository() {
        Some(url) => tracing::info!("Project list from {}", url),
        None => tracing::info!("Project list from local manifest"),
    }
    for project in descriptor.projects().iter() {
        tracing::info!("  {} ({})", project.id(), describe_source(project.source()));
    }

    let scan = scan_sources(root, descriptor.exclude_patterns())?;

    tracing::info!(
        "{}: {} source files, {} excluded, toc {}",
        descriptor.html_title(),
        scan.sources.len(),
        scan.excluded,
        descriptor.toc_path().path().display()
    );

    if scan.sources.is_empty() {
        tracing::warn!("No documentation sources found under {}", root.display());
    }

    Ok(())
}

/// One-line summary of where a project is built from.
fn describe_source(source: &ProjectSource) -> String {
    match source {
        ProjectSource::Remote { url } => url.clone(),
        ProjectSource::Local { file: Some(file) } => format!("local, {}", file.display()),
        ProjectSource::Local { file: None } => "local".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn describes_each_source_kind() {
        assert_eq!(
            describe_source(&ProjectSource::Remote {
                url: "https://github.com/rocm/gpu-operator".to_string()
            }),
            "https://github.com/rocm/gpu-operator"
        );
        assert_eq!(
            describe_source(&ProjectSource::Local {
                file: Some(PathBuf::from("projects.yaml"))
            }),
            "local, projects.yaml"
        );
        assert_eq!(describe_source(&ProjectSource::Local { file: None }), "local");
    }

    #[test]
    fn checks_scaffolded_site() {
        let temp = tempdir().unwrap();
        crate::commands::init::run(temp.path(), false).unwrap();
        fs::create_dir_all(temp.path().join(".venv")).unwrap();
        fs::write(temp.path().join(".venv/notes.md"), "skip").unwrap();

        run(temp.path(), &temp.path().join("docs.toml"), BuildArgs::default()).unwrap();
    }
}
