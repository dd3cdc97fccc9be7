//! Project manifest loading.
//!
//! A manifest declares every documentation project eligible for aggregation
//! into the hub site:
//!
//! ```yaml
//! projects:
//!   - device-metrics-exporter
//!   - id: gpu-operator
//!     display_name: AMD GPU Operator
//!     remote: https://github.com/rocm/gpu-operator
//! ```
//!
//! Entries are either a bare identifier or a mapping. An entry with an empty
//! `remote` is resolved from the local checkout. An optional top-level
//! `remote_repository` names where the shared project list itself lives;
//! empty means the local manifest is authoritative.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Identifier of a documentation project, as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a project's documentation sources come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectSource {
    /// Fetched from a remote repository by the aggregation engine.
    Remote { url: String },
    /// Taken from the local checkout, optionally through a local manifest file.
    Local { file: Option<PathBuf> },
}

impl ProjectSource {
    pub fn is_local(&self) -> bool {
        matches!(self, ProjectSource::Local { .. })
    }
}

/// A single project declared in the manifest.
///
/// The remote location and local file are folded into one [`ProjectSource`]
/// when the manifest is parsed, and that is what gets recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectManifestEntry {
    id: ProjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    source: ProjectSource,
}

impl ProjectManifestEntry {
    fn new(
        id: ProjectId,
        display_name: Option<String>,
        remote: &str,
        local_file: Option<PathBuf>,
    ) -> Self {
        let remote = remote.trim();
        let source = if remote.is_empty() {
            ProjectSource::Local { file: local_file }
        } else {
            if local_file.is_some() {
                tracing::warn!(
                    "Project {} declares both a remote and a local file; using remote",
                    id
                );
            }
            ProjectSource::Remote {
                url: remote.to_string(),
            }
        };

        Self {
            id,
            display_name: display_name.filter(|n| !n.trim().is_empty()),
            source,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Human-readable name declared in the manifest, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The authoritative source for this project.
    ///
    /// A non-empty remote location wins over a local file.
    pub fn source(&self) -> &ProjectSource {
        &self.source
    }

    /// Remote location, when the project is fetched remotely.
    pub fn remote(&self) -> Option<&str> {
        match &self.source {
            ProjectSource::Remote { url } => Some(url),
            ProjectSource::Local { .. } => None,
        }
    }

    /// Local manifest file, when the project is built locally.
    pub fn local_file(&self) -> Option<&Path> {
        match &self.source {
            ProjectSource::Local { file } => file.as_deref(),
            ProjectSource::Remote { .. } => None,
        }
    }
}

/// Ordered set of projects known to the build. Identifiers are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectSet {
    entries: Vec<ProjectManifestEntry>,
}

impl ProjectSet {
    /// Build a set, rejecting duplicate identifiers.
    pub fn new(entries: Vec<ProjectManifestEntry>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(format!("duplicate project identifier '{}'", entry.id));
            }
        }
        Ok(Self { entries })
    }

    /// Look up a project by identifier.
    pub fn get(&self, id: &str) -> Option<&ProjectManifestEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Identifiers in manifest order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A loaded project manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    /// Path the manifest was read from
    pub path: PathBuf,

    /// Remote repository the shared project list is fetched from;
    /// `None` means the local manifest is authoritative
    pub remote_repository: Option<String>,

    /// Declared projects
    pub projects: ProjectSet,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    remote_repository: String,
    #[serde(default)]
    projects: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Id(String),
    Full {
        id: String,
        #[serde(default)]
        display_name: Option<String>,
        #[serde(default)]
        remote: String,
        #[serde(default)]
        local_file: Option<PathBuf>,
    },
}

impl ProjectManifest {
    /// Load a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ResolveError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ResolveError::ManifestNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ResolveError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(path, &content)
    }

    /// Parse manifest content. `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ResolveError> {
        let invalid = |message: String| ResolveError::InvalidManifest {
            path: path.to_path_buf(),
            message,
        };

        let raw: RawManifest = serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;

        let mut entries = Vec::with_capacity(raw.projects.len());
        for raw_entry in raw.projects {
            let entry = match raw_entry {
                RawEntry::Id(id) => {
                    ProjectManifestEntry::new(checked_id(id).map_err(invalid)?, None, "", None)
                }
                RawEntry::Full {
                    id,
                    display_name,
                    remote,
                    local_file,
                } => ProjectManifestEntry::new(
                    checked_id(id).map_err(invalid)?,
                    display_name,
                    &remote,
                    local_file,
                ),
            };
            entries.push(entry);
        }

        let projects = ProjectSet::new(entries).map_err(invalid)?;
        tracing::debug!(
            "Loaded {} projects from {}",
            projects.len(),
            path.display()
        );

        let remote_repository = Some(raw.remote_repository.trim())
            .filter(|r| !r.is_empty())
            .map(String::from);

        Ok(Self {
            path: path.to_path_buf(),
            remote_repository,
            projects,
        })
    }
}

fn checked_id(id: String) -> Result<ProjectId, String> {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(format!("invalid project identifier '{}'", id));
    }
    Ok(ProjectId(id))
}
