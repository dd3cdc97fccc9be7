//! Theme configuration passed through to the renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the HTML theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeName {
    /// The ROCm documentation theme
    #[default]
    RocmDocs,
    /// Any other theme, by its registered name
    Custom(String),
}

impl ThemeName {
    pub fn as_str(&self) -> &str {
        match self {
            ThemeName::RocmDocs => "rocm_docs_theme",
            ThemeName::Custom(name) => name,
        }
    }
}

impl From<&str> for ThemeName {
    fn from(name: &str) -> Self {
        match name {
            "rocm_docs_theme" => ThemeName::RocmDocs,
            other => ThemeName::Custom(other.to_string()),
        }
    }
}

impl From<String> for ThemeName {
    fn from(name: String) -> Self {
        ThemeName::from(name.as_str())
    }
}

impl From<ThemeName> for String {
    fn from(theme: ThemeName) -> Self {
        theme.as_str().to_string()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options handed to the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOptions {
    /// Theme flavor tag (e.g. "instinct")
    pub flavor: String,

    /// Repository linked from every page
    pub repository_url: Option<String>,

    /// Banner text shown above the content
    pub announcement: Option<String>,

    /// Navigation levels expanded by default
    pub show_navbar_depth: u32,
}

/// Full theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub name: ThemeName,
    pub options: ThemeOptions,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: ThemeName::RocmDocs,
            options: ThemeOptions {
                flavor: "instinct".to_string(),
                repository_url: Some(
                    "https://github.com/rocm/device-metrics-exporter".to_string(),
                ),
                announcement: Some(DEVELOPMENT_BRANCH_ANNOUNCEMENT.to_string()),
                show_navbar_depth: 0,
            },
        }
    }
}

/// Banner shown on documentation built from a development branch.
pub const DEVELOPMENT_BRANCH_ANNOUNCEMENT: &str = "You're viewing documentation from a development branch. \
Please switch to the release branch for the officially released documentation.";
