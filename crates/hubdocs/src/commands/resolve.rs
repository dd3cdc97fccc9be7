//! Descriptor resolution command.

use std::path::Path;

use anyhow::{Context, Result};
use hubdocs_core::{Resolver, SiteBuildDescriptor};

use crate::config::ConfigFile;
use crate::{BuildArgs, OutputFormat};

/// Resolve the descriptor from docs.toml merged with command-line overrides.
pub fn resolve_descriptor(
    root: &Path,
    config_path: &Path,
    args: BuildArgs,
) -> Result<SiteBuildDescriptor> {
    let file_config = ConfigFile::load(config_path)?;
    let settings = file_config.site_settings();
    let build = file_config.build;

    let manifest = args.manifest.unwrap_or(build.manifest);
    let toc = args.toc.unwrap_or(build.toc);
    let project = args
        .project
        .or(build.project)
        .context("No current project given; pass --project or set build.project in docs.toml")?;
    let version = args
        .version
        .or(build.version)
        .context("No version given; pass --doc-version or set build.version in docs.toml")?;
    let exclude = if args.exclude.is_empty() {
        build.exclude
    } else {
        args.exclude
    };

    let descriptor = Resolver::new(root)
        .with_settings(settings)
        .resolve(&manifest, &project, &version, &toc, exclude.as_slice())
        .with_context(|| format!("Failed to resolve site configuration for {}", project))?;

    Ok(descriptor)
}

/// Render a descriptor in the requested format.
pub fn render(descriptor: &SiteBuildDescriptor, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(descriptor)?,
        OutputFormat::Yaml => serde_yaml::to_string(descriptor)?,
    };
    Ok(output)
}

/// Run the resolve command.
pub fn run(root: &Path, config_path: &Path, args: BuildArgs, format: OutputFormat) -> Result<()> {
    let descriptor = resolve_descriptor(root, config_path, args)?;
    println!("{}", render(&descriptor, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_site(root: &Path) {
        fs::write(
            root.join("projects.yaml"),
            "projects:\n  - id: device-metrics-exporter\n    remote: \"\"\n  - id: gpu-operator\n    remote: https://github.com/rocm/gpu-operator\n",
        )
        .unwrap();
        fs::create_dir_all(root.join("sphinx")).unwrap();
        fs::write(root.join("sphinx/_toc.yml"), "root: index\n").unwrap();
    }

    #[test]
    fn resolves_from_config_file() {
        let temp = tempdir().unwrap();
        write_site(temp.path());
        fs::write(
            temp.path().join("docs.toml"),
            "[build]\nproject = \"device-metrics-exporter\"\nversion = \"1.5.0\"\n",
        )
        .unwrap();

        let descriptor = resolve_descriptor(
            temp.path(),
            &temp.path().join("docs.toml"),
            BuildArgs::default(),
        )
        .unwrap();

        assert_eq!(descriptor.html_title(), "AMD Device Metrics Exporter 1.5.0");
        assert_eq!(descriptor.exclude_patterns().patterns(), vec![".venv"]);
    }

    #[test]
    fn arguments_override_config_file() {
        let temp = tempdir().unwrap();
        write_site(temp.path());
        fs::write(
            temp.path().join("docs.toml"),
            "[build]\nproject = \"device-metrics-exporter\"\nversion = \"1.5.0\"\n",
        )
        .unwrap();

        let args = BuildArgs {
            version: Some("1.6.0".to_string()),
            exclude: vec!["_build".to_string()],
            ..Default::default()
        };
        let descriptor =
            resolve_descriptor(temp.path(), &temp.path().join("docs.toml"), args).unwrap();

        assert_eq!(descriptor.version(), "1.6.0");
        assert_eq!(descriptor.exclude_patterns().patterns(), vec!["_build"]);
    }

    #[test]
    fn missing_version_is_an_error() {
        let temp = tempdir().unwrap();
        write_site(temp.path());

        let args = BuildArgs {
            project: Some("device-metrics-exporter".to_string()),
            ..Default::default()
        };
        let result = resolve_descriptor(temp.path(), &temp.path().join("docs.toml"), args);

        assert!(result.is_err());
    }

    #[test]
    fn renders_descriptor_fields() {
        let temp = tempdir().unwrap();
        write_site(temp.path());

        let args = BuildArgs {
            project: Some("device-metrics-exporter".to_string()),
            version: Some("1.5.0".to_string()),
            ..Default::default()
        };
        let descriptor =
            resolve_descriptor(temp.path(), &temp.path().join("docs.toml"), args).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&descriptor, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["project"], "AMD Device Metrics Exporter");
        assert_eq!(json["release"], "1.5.0");
        assert_eq!(json["theme"], "rocm_docs_theme");
        assert_eq!(json["theme_options"]["show_navbar_depth"], 0);
        assert_eq!(json["platform_matrix"][0]["codename"], "noble");
        assert_eq!(json["exclude_patterns"][0], ".venv");
        assert_eq!(json["projects"][0]["id"], "device-metrics-exporter");
        assert_eq!(json["projects"][0]["source"]["kind"], "local");
        assert_eq!(json["projects"][1]["source"]["kind"], "remote");
        assert_eq!(
            json["projects"][1]["source"]["url"],
            "https://github.com/rocm/gpu-operator"
        );
        assert!(json["projects_remote_repository"].is_null());
    }
}
