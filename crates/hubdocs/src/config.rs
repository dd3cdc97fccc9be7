//! Configuration file structure (docs.toml).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hubdocs_core::{Platform, PlatformMatrix, SiteSettings, ThemeName};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub theme: ThemeSection,
    /// Supported platforms, in display order
    pub platforms: Option<Vec<Platform>>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    pub project: Option<String>,
    pub version: Option<String>,
    #[serde(default = "default_toc")]
    pub toc: PathBuf,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            project: None,
            version: None,
            toc: default_toc(),
            exclude: default_exclude(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct SiteSection {
    pub author: Option<String>,
    pub copyright: Option<String>,
    pub release: Option<String>,
    pub extensions: Option<Vec<String>>,
    /// Extra project display names, merged over the built-in ones
    #[serde(default)]
    pub display_names: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ThemeSection {
    pub name: Option<ThemeName>,
    pub flavor: Option<String>,
    pub repository_url: Option<String>,
    pub announcement: Option<String>,
    pub show_navbar_depth: Option<u32>,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("projects.yaml")
}
fn default_toc() -> PathBuf {
    PathBuf::from("sphinx/_toc.yml")
}
fn default_exclude() -> Vec<String> {
    vec![".venv".to_string()]
}

impl ConfigFile {
    /// Load configuration if the file exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge file values over the built-in site settings.
    ///
    /// An empty `announcement` or `repository_url` clears the default.
    pub fn site_settings(&self) -> SiteSettings {
        let mut settings = SiteSettings::default();

        if let Some(author) = &self.site.author {
            settings.author = author.clone();
        }
        if let Some(copyright) = &self.site.copyright {
            settings.copyright = copyright.clone();
        }
        settings.release = self.site.release.clone();
        if let Some(extensions) = &self.site.extensions {
            settings.extensions = extensions.clone();
        }
        settings.display_names.extend(
            self.site
                .display_names
                .iter()
                .map(|(id, name)| (id.clone(), name.clone())),
        );

        let theme = &mut settings.theme;
        if let Some(name) = &self.theme.name {
            theme.name = name.clone();
        }
        if let Some(flavor) = &self.theme.flavor {
            theme.options.flavor = flavor.clone();
        }
        if let Some(url) = &self.theme.repository_url {
            theme.options.repository_url = non_empty(url);
        }
        if let Some(announcement) = &self.theme.announcement {
            theme.options.announcement = non_empty(announcement);
        }
        if let Some(depth) = self.theme.show_navbar_depth {
            theme.options.show_navbar_depth = depth;
        }

        if let Some(platforms) = &self.platforms {
            settings.platforms = PlatformMatrix::new(platforms.clone());
        }

        settings
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
