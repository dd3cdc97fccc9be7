//! Site configuration resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::descriptor::{SiteBuildDescriptor, SiteIdentity, TableOfContentsRef};
use crate::error::ResolveError;
use crate::exclusion::ExclusionSet;
use crate::manifest::{ProjectManifest, ProjectManifestEntry, ProjectSource};
use crate::platform::PlatformMatrix;
use crate::theme::ThemeConfig;
use crate::version::Version;

/// Static and optional inputs to a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Author credited on every page
    pub author: String,

    /// Copyright line
    pub copyright: String,

    /// Release label; the version is used when unset
    pub release: Option<String>,

    /// Theme and theme options
    pub theme: ThemeConfig,

    /// Renderer extensions
    pub extensions: Vec<String>,

    /// Supported platforms in display order
    pub platforms: PlatformMatrix,

    /// Display names by project identifier, used in `project` and
    /// `html_title` when the manifest entry declares none
    pub display_names: BTreeMap<String, String>,
}

impl SiteSettings {
    /// Display name for a project: the manifest's own name, then the
    /// configured mapping, then the identifier itself.
    pub fn display_name_for<'a>(&'a self, entry: &'a ProjectManifestEntry) -> &'a str {
        entry
            .display_name()
            .or_else(|| self.display_names.get(entry.id().as_str()).map(String::as_str))
            .unwrap_or(entry.id().as_str())
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            author: "Advanced Micro Devices, Inc.".to_string(),
            copyright: "Copyright (c) 2024 Advanced Micro Devices, Inc. All rights reserved."
                .to_string(),
            release: None,
            theme: ThemeConfig::default(),
            extensions: vec!["rocm_docs".to_string()],
            platforms: PlatformMatrix::ubuntu_default(),
            display_names: BTreeMap::from([(
                "device-metrics-exporter".to_string(),
                "AMD Device Metrics Exporter".to_string(),
            )]),
        }
    }
}

/// Resolves build inputs into a [`SiteBuildDescriptor`].
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    root: PathBuf,
    settings: SiteSettings,
}

impl Resolver {
    /// Create a resolver for a build root. Relative input paths are joined to it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            settings: SiteSettings::default(),
        }
    }

    /// Replace the static site settings.
    pub fn with_settings(mut self, settings: SiteSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Resolve a site build.
    ///
    /// Reads the manifest, checks that `current_project` is declared in it,
    /// validates the version and TOC descriptor, then attaches theme,
    /// platform, and exclusion settings. Nothing is written.
    pub fn resolve<S: AsRef<str>>(
        &self,
        manifest_path: &Path,
        current_project: &str,
        version: &str,
        toc_path: &Path,
        exclusions: &[S],
    ) -> Result<SiteBuildDescriptor, ResolveError> {
        let manifest_path = self.root.join(manifest_path);
        let manifest = ProjectManifest::load(&manifest_path)?;

        let current = manifest.projects.get(current_project).ok_or_else(|| {
            ResolveError::UnknownCurrentProject {
                id: current_project.to_string(),
                known: manifest
                    .projects
                    .ids()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }
        })?;
        let source = current.source();
        tracing::debug!(
            "Current project {} resolves from {}",
            current.id(),
            if source.is_local() { "local checkout" } else { "remote" }
        );

        let version = Version::parse(version)?;
        let identity = SiteIdentity::new(
            self.settings.display_name_for(current),
            version,
            self.settings.release.as_deref(),
        );

        let toc_path = self.root.join(toc_path);
        if !toc_path.is_file() {
            return Err(ResolveError::MissingTocDescriptor(toc_path));
        }

        let mut theme_options = self.settings.theme.options.clone();
        if theme_options.repository_url.is_none() {
            if let ProjectSource::Remote { url } = source {
                theme_options.repository_url = Some(url.clone());
            }
        }

        let exclude_patterns = ExclusionSet::new(exclusions)?;

        let descriptor = SiteBuildDescriptor {
            current_project: current.id().clone(),
            author: self.settings.author.clone(),
            copyright: self.settings.copyright.clone(),
            theme: self.settings.theme.name.clone(),
            theme_options,
            extensions: self.settings.extensions.clone(),
            projects: manifest.projects.clone(),
            projects_remote_repository: manifest.remote_repository.clone(),
            toc_path: TableOfContentsRef::new(toc_path),
            exclude_patterns,
            platform_matrix: self.settings.platforms.clone(),
            identity,
        };

        tracing::info!(
            "Resolved {} with {} project(s)",
            descriptor.html_title(),
            descriptor.projects().len()
        );

        Ok(descriptor)
    }
}

/// Resolve a site build with default settings, using paths as given.
pub fn resolve<S: AsRef<str>>(
    manifest_path: &Path,
    current_project: &str,
    version: &str,
    toc_path: &Path,
    exclusions: &[S],
) -> Result<SiteBuildDescriptor, ResolveError> {
    Resolver::default().resolve(manifest_path, current_project, version, toc_path, exclusions)
}
