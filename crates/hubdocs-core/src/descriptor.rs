//! The resolved site-build descriptor.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::exclusion::ExclusionSet;
use crate::manifest::{ProjectId, ProjectSet};
use crate::platform::PlatformMatrix;
use crate::theme::{ThemeName, ThemeOptions};
use crate::version::Version;

/// Who the site is and which release it documents.
///
/// Built once from the display name and version; the title and release
/// are derived and cannot be changed afterwards.
///
/// ```compile_fail
/// fn retitle(identity: &mut hubdocs_core::SiteIdentity) {
///     identity.html_title = String::from("Other 9.9");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteIdentity {
    project: String,
    version: Version,
    release: String,
    debian_version: String,
    html_title: String,
}

impl SiteIdentity {
    pub(crate) fn new(project: &str, version: Version, release: Option<&str>) -> Self {
        let release = release
            .filter(|r| !r.is_empty())
            .unwrap_or(version.as_str())
            .to_string();

        Self {
            project: project.to_string(),
            html_title: format!("{} {}", project, version),
            debian_version: version.debian_alias(),
            release,
            version,
        }
    }

    /// Display name of the current project
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Documented version
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Release label, defaults to the version
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Debian-style alias of the version
    pub fn debian_version(&self) -> &str {
        &self.debian_version
    }

    /// Page title: display name and version separated by one space
    pub fn html_title(&self) -> &str {
        &self.html_title
    }
}

/// Reference to the navigation-tree descriptor consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableOfContentsRef(PathBuf);

impl TableOfContentsRef {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Fully resolved configuration for one site build.
///
/// Produced once by the resolver and handed to the rendering engine as is.
/// Fields are read-only outside this crate.
///
/// ```compile_fail
/// fn bump(descriptor: &mut hubdocs_core::SiteBuildDescriptor) {
///     descriptor.extensions.clear();
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteBuildDescriptor {
    #[serde(flatten)]
    pub(crate) identity: SiteIdentity,
    pub(crate) current_project: ProjectId,
    pub(crate) author: String,
    pub(crate) copyright: String,
    pub(crate) theme: ThemeName,
    pub(crate) theme_options: ThemeOptions,
    pub(crate) extensions: Vec<String>,
    pub(crate) projects: ProjectSet,
    pub(crate) projects_remote_repository: Option<String>,
    pub(crate) toc_path: TableOfContentsRef,
    pub(crate) exclude_patterns: ExclusionSet,
    pub(crate) platform_matrix: PlatformMatrix,
}

impl SiteBuildDescriptor {
    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    pub fn project(&self) -> &str {
        self.identity.project()
    }

    pub fn version(&self) -> &str {
        self.identity.version().as_str()
    }

    pub fn release(&self) -> &str {
        self.identity.release()
    }

    pub fn debian_version(&self) -> &str {
        self.identity.debian_version()
    }

    pub fn html_title(&self) -> &str {
        self.identity.html_title()
    }

    /// Identifier of the hub project being built
    pub fn current_project(&self) -> &ProjectId {
        &self.current_project
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn theme(&self) -> &ThemeName {
        &self.theme
    }

    pub fn theme_options(&self) -> &ThemeOptions {
        &self.theme_options
    }

    /// Renderer extensions to load
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// All projects aggregated into the site
    pub fn projects(&self) -> &ProjectSet {
        &self.projects
    }

    /// Remote repository holding the shared project list, if not local
    pub fn projects_remote_repository(&self) -> Option<&str> {
        self.projects_remote_repository.as_deref()
    }

    pub fn toc_path(&self) -> &TableOfContentsRef {
        &self.toc_path
    }

    pub fn exclude_patterns(&self) -> &ExclusionSet {
        &self.exclude_patterns
    }

    pub fn platform_matrix(&self) -> &PlatformMatrix {
        &self.platform_matrix
    }
}
