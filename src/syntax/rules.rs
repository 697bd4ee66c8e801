//! Pattern rules for tokenizing
//!
//! A rule pairs a regex with the category assigned to its matches.
//! Lexers try their rules in declaration order; the first rule that
//! matches at the scan position wins.

use regex::Regex;

use super::tokens::TokenType;
use crate::error::{HighlightError, Result};

/// A single pattern rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled pattern, anchored at the scan position
    pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
}

impl Rule {
    /// Create a new rule
    ///
    /// The pattern is anchored, so it only ever matches starting at the
    /// position the lexer is scanning.
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Result<Self> {
        let anchored = format!(r"\A(?:{})", pattern);
        let pattern = Regex::new(&anchored).map_err(|source| HighlightError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            token_type,
        })
    }

    /// Create a rule matching any of `words` as whole words only
    ///
    /// A word followed by further word characters (`MyKeywordX` for the
    /// word `MyKeyword`) is not matched. Words ending in punctuation
    /// (`c++`) match before anything that is not a word character.
    pub fn words(name: &str, words: &[&str], token_type: TokenType) -> Result<Self> {
        let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
        Self::new(name, &format!(r"(?:{})\b{{end-half}}", alternatives.join("|")), token_type)
    }

    /// Match this rule at byte position `pos` of `text`
    ///
    /// Returns the end of the match. Empty matches are reported as no
    /// match, so a rule can never stall the scan.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        self.pattern
            .find(&text[pos..])
            .filter(|m| !m.is_empty())
            .map(|m| pos + m.end())
    }
}
