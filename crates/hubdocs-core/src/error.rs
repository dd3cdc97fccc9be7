//! Resolution errors.

use std::path::PathBuf;

/// Errors that abort a site configuration resolution.
///
/// Every variant is terminal: a build cannot proceed with a partially
/// resolved configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Project manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Invalid project manifest {}: {message}", .path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Unknown current project '{id}' (declared: {})", format_known(.known))]
    UnknownCurrentProject { id: String, known: Vec<String> },

    #[error("Table of contents descriptor not found: {}", .0.display())]
    MissingTocDescriptor(PathBuf),

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Invalid exclusion pattern '{pattern}': {message}")]
    InvalidExclusion { pattern: String, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_known(known: &[String]) -> String {
    if known.is_empty() {
        "none".to_string()
    } else {
        known.join(", ")
    }
}
