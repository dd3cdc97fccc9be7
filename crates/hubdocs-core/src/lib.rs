//! Site configuration resolver for aggregated multi-project documentation.
//!
//! A hub documentation site pulls reference material from the current project
//! and any number of spoke projects declared in a manifest. This crate reads
//! that manifest, checks the build inputs against it, and produces a single
//! [`SiteBuildDescriptor`] for the rendering engine to consume.

pub mod descriptor;
pub mod error;
pub mod exclusion;
pub mod manifest;
pub mod platform;
pub mod resolver;
pub mod sources;
pub mod theme;
pub mod version;

pub use descriptor::{SiteBuildDescriptor, SiteIdentity, TableOfContentsRef};
pub use error::ResolveError;
pub use exclusion::ExclusionSet;
pub use manifest::{ProjectId, ProjectManifest, ProjectManifestEntry, ProjectSet, ProjectSource};
pub use platform::{Platform, PlatformMatrix};
pub use resolver::{resolve, Resolver, SiteSettings};
pub use sources::{scan_sources, ScanError, SourceScan};
pub use theme::{ThemeConfig, ThemeName, ThemeOptions};
pub use version::Version;
