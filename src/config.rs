//! Documentation build settings
//!
//! The settings a documentation host reads for the Sushi docs, kept as
//! plain data. They are read from TOML; every key is optional and
//! missing keys keep the project defaults.
//!
//! Example:
//! ```toml
//! project = "Sushi"
//! html_theme = "alabaster"
//! pygments_style = "sushi"
//! highlight_language = "sushi"
//!
//! [source_suffix]
//! ".rst" = "restructuredtext"
//! ".md" = "markdown"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Documentation build settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub project: String,
    pub author: String,
    pub version: String,
    pub release: String,
    pub language: String,
    pub master_doc: String,
    /// Globs of files and directories the host skips
    pub exclude_patterns: Vec<String>,
    /// Extension modules the host loads
    pub extensions: Vec<String>,
    /// File suffix -> source format
    pub source_suffix: BTreeMap<String, String>,
    pub templates_path: Vec<String>,
    pub html_theme: String,
    pub html_static_path: Vec<String>,
    /// Style table used for code blocks
    pub pygments_style: String,
    /// Lexer used for code blocks that name no language
    pub highlight_language: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        let source_suffix = [
            (".rst", "restructuredtext"),
            (".txt", "markdown"),
            (".md", "markdown"),
        ]
        .into_iter()
        .map(|(suffix, format)| (suffix.to_string(), format.to_string()))
        .collect();

        Self {
            project: "Sushi".to_string(),
            author: "TheHeadmaster".to_string(),
            version: "0.1".to_string(),
            release: "0.1".to_string(),
            language: "en".to_string(),
            master_doc: "index".to_string(),
            exclude_patterns: strings(&["_build", "Thumbs.db", ".DS_Store"]),
            extensions: strings(&["myst_parser"]),
            source_suffix,
            templates_path: strings(&["_templates"]),
            html_theme: "alabaster".to_string(),
            html_static_path: strings(&["_static"]),
            pygments_style: "sushi".to_string(),
            highlight_language: "sushi".to_string(),
        }
    }
}

impl DocsConfig {
    /// Parse settings from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), project = %config.project, "loaded docs config");
        Ok(config)
    }

    /// Load settings, using the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no docs config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get the source format for a document path from its suffix
    pub fn source_format(&self, path: &Path) -> Option<&str> {
        let name = path.file_name()?.to_str()?;
        self.source_suffix
            .iter()
            .filter(|(suffix, _)| name.ends_with(suffix.as_str()))
            .max_by_key(|(suffix, _)| suffix.len())
            .map(|(_, format)| format.as_str())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
