//! Lexer and style registry
//!
//! The registry is the explicit registration point a documentation host
//! talks to: lexers are found by name, alias or file name, style tables
//! by name. It is built at startup and only read afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::lexer::Lexer;
use super::style::Span;
use super::style_table::StyleTable;
use crate::config::DocsConfig;
use crate::error::{HighlightError, Result};

/// Registered lexers and style tables
#[derive(Debug, Default)]
pub struct Registry {
    /// Lexers keyed by display name
    lexers: BTreeMap<String, Lexer>,
    /// Lowercased name or alias -> lexer name
    alias_map: BTreeMap<String, String>,
    /// Style tables keyed by name
    styles: BTreeMap<String, StyleTable>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in lexers and styles
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for lexer in builtin::all_lexers()? {
            registry.add_lexer(lexer)?;
        }
        for style in builtin::all_styles()? {
            registry.add_style(style)?;
        }
        Ok(registry)
    }

    /// Register a lexer under its name and aliases
    ///
    /// Fails without registering anything if the name or an alias is
    /// already taken.
    pub fn add_lexer(&mut self, lexer: Lexer) -> Result<()> {
        let mut keys: Vec<String> = std::iter::once(&lexer.name)
            .chain(lexer.aliases.iter())
            .map(|key| key.to_lowercase())
            .collect();
        keys.sort();
        keys.dedup();

        if let Some(taken) = keys.iter().find(|key| self.alias_map.contains_key(*key)) {
            return Err(HighlightError::Duplicate(format!("lexer '{}'", taken)));
        }

        debug!(
            lexer = %lexer.name,
            aliases = ?lexer.aliases,
            rules = lexer.rules().len(),
            "registered lexer"
        );
        for key in keys {
            self.alias_map.insert(key, lexer.name.clone());
        }
        self.lexers.insert(lexer.name.clone(), lexer);
        Ok(())
    }

    /// Register a style table under its name
    pub fn add_style(&mut self, style: StyleTable) -> Result<()> {
        if self.styles.contains_key(&style.name) {
            return Err(HighlightError::Duplicate(format!("style '{}'", style.name)));
        }
        debug!(style = %style.name, "registered style");
        self.styles.insert(style.name.clone(), style);
        Ok(())
    }

    /// Get a lexer by name or alias (case-insensitive)
    pub fn lexer(&self, alias: &str) -> Result<&Lexer> {
        self.alias_map
            .get(&alias.to_lowercase())
            .and_then(|name| self.lexers.get(name))
            .ok_or_else(|| HighlightError::UnknownLexer(alias.to_string()))
    }

    /// Detect a lexer from a file name
    pub fn lexer_for_filename(&self, path: &Path) -> Option<&Lexer> {
        let file_name = path.file_name()?.to_str()?;
        self.lexers.values().find(|lexer| {
            lexer
                .filenames
                .iter()
                .any(|pattern| filename_matches(pattern, file_name))
        })
    }

    /// Get a style table by name
    pub fn style(&self, name: &str) -> Result<&StyleTable> {
        self.styles
            .get(name)
            .ok_or_else(|| HighlightError::UnknownStyle(name.to_string()))
    }

    /// List registered lexer names
    pub fn lexer_names(&self) -> Vec<&str> {
        self.lexers.keys().map(|s| s.as_str()).collect()
    }

    /// List registered style names
    pub fn style_names(&self) -> Vec<&str> {
        self.styles.keys().map(|s| s.as_str()).collect()
    }

    /// Pair a lexer with a style table
    pub fn highlighter(&self, lexer: &str, style: &str) -> Result<Highlighter<'_>> {
        Ok(Highlighter {
            lexer: self.lexer(lexer)?,
            style: self.style(style)?,
        })
    }

    /// Pair the lexer and style a documentation config names
    pub fn highlighter_for(&self, config: &DocsConfig) -> Result<Highlighter<'_>> {
        self.highlighter(&config.highlight_language, &config.pygments_style)
    }
}

/// Match a file name against a pattern with at most one leading `*`
fn filename_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.ends_with(suffix),
        None => pattern == file_name,
    }
}

/// A lexer and style table used together
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'r> {
    pub lexer: &'r Lexer,
    pub style: &'r StyleTable,
}

impl<'r> Highlighter<'r> {
    /// Highlight `text`, producing one styled span per token
    pub fn highlight(&self, text: &str) -> Result<Vec<Span>> {
        self.lexer
            .tokens(text)
            .map(|token| -> Result<Span> {
                let token = token?;
                Ok(Span::new(token.start, token.end(), self.style.style_for(token.token_type)))
            })
            .collect()
    }
}
