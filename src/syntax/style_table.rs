//! Style tables
//!
//! A style table maps token categories to style entries. Looking up a
//! category layers the entries of its ancestors from the root down, so
//! an unregistered category renders like its nearest registered
//! ancestor and a registered one only overrides what it sets.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::style::{Color, Style, StyleEntry};
use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// On-disk form of a style table
///
/// ```toml
/// name = "sushi"
/// background = "#ffffff"
///
/// [styles]
/// "Keyword" = "#aa0000"
/// "Name.Class" = ""
/// ```
#[derive(Debug, Deserialize)]
struct StyleFile {
    name: String,
    background: Option<String>,
    #[serde(default)]
    styles: BTreeMap<String, String>,
}

/// Immutable mapping from token category to display attributes
#[derive(Debug, Clone)]
pub struct StyleTable {
    /// Name hosts refer to this style by
    pub name: String,
    /// Background color of the whole code block
    pub background: Option<Color>,
    /// Entries as registered
    entries: HashMap<TokenType, StyleEntry>,
    /// Resolved style for every category
    resolved: HashMap<TokenType, Style>,
}

impl StyleTable {
    /// Build a table from (category, style string) pairs
    pub fn from_pairs(name: &str, pairs: &[(TokenType, &str)]) -> Result<Self> {
        let mut entries = HashMap::new();
        for (token_type, style_str) in pairs {
            entries.insert(*token_type, StyleEntry::parse(style_str)?);
        }
        Ok(Self::build(name, None, entries))
    }

    /// Parse a table from TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: StyleFile = toml::from_str(contents)?;

        let background = match file.background.as_deref() {
            Some(hex) => Some(Color::from_hex(hex).ok_or_else(|| HighlightError::InvalidStyle {
                style: hex.to_string(),
                reason: "bad background color".to_string(),
            })?),
            None => None,
        };

        let mut entries = HashMap::new();
        for (name, style_str) in &file.styles {
            let token_type = TokenType::from_name(name)
                .ok_or_else(|| HighlightError::UnknownTokenType(name.clone()))?;
            // "String" and "Literal.String" name the same category
            if entries.insert(token_type, StyleEntry::parse(style_str)?).is_some() {
                return Err(HighlightError::Duplicate(format!(
                    "style entry for {} ('{}')",
                    token_type, name
                )));
            }
        }

        Ok(Self::build(&file.name, background, entries))
    }

    /// Load a table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn build(
        name: &str,
        background: Option<Color>,
        entries: HashMap<TokenType, StyleEntry>,
    ) -> Self {
        let mut resolved: HashMap<TokenType, Style> = HashMap::new();
        // ALL lists parents before children, so each parent is resolved first
        for token_type in TokenType::ALL {
            let mut style = token_type
                .parent()
                .and_then(|parent| resolved.get(&parent).copied())
                .unwrap_or_default();
            if let Some(entry) = entries.get(&token_type) {
                style.apply(entry);
            }
            resolved.insert(token_type, style);
        }

        debug!(style = name, entries = entries.len(), "built style table");
        Self {
            name: name.to_string(),
            background,
            entries,
            resolved,
        }
    }

    /// Get the display attributes for a category
    pub fn style_for(&self, token_type: TokenType) -> Style {
        self.resolved.get(&token_type).copied().unwrap_or_default()
    }

    /// Get the entry registered for exactly this category
    pub fn entry(&self, token_type: TokenType) -> Option<&StyleEntry> {
        self.entries.get(&token_type)
    }

    /// Nearest category at or above `token_type` with a registered entry
    pub fn defining_ancestor(&self, token_type: TokenType) -> Option<TokenType> {
        token_type.ancestors().find(|t| self.entries.contains_key(t))
    }
}
