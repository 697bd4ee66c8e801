//! Rule-driven lexers
//!
//! A [`Lexer`] combines identifying metadata (name, aliases, filename
//! patterns) with an ordered rule list. Tokenizing never mutates the
//! lexer, so one instance can serve any number of inputs and threads.

use tracing::{trace, warn};

use super::rules::Rule;
use super::tokens::TokenType;
use crate::error::LexError;

/// A classified span of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    /// Byte offset of the span in the input
    pub start: usize,
    /// The matched text
    pub text: &'t str,
    /// Category assigned by the matching rule
    pub token_type: TokenType,
}

impl<'t> Token<'t> {
    /// Byte offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// A complete lexer definition
#[derive(Debug, Clone)]
pub struct Lexer {
    /// Display name (e.g., "Sushi")
    pub name: String,
    /// Short identifiers a host may refer to this lexer by
    pub aliases: Vec<String>,
    /// Filename patterns (e.g., "*.sus")
    pub filenames: Vec<String>,
    /// Rules in the order they are tried
    rules: Vec<Rule>,
}

impl Lexer {
    /// Create a new lexer with no rules
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            filenames: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add an alias
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_string());
    }

    /// Add a filename pattern
    pub fn add_filename(&mut self, pattern: &str) {
        self.filenames.push(pattern.to_string());
    }

    /// Append a rule; it is tried after every rule added before it
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Rules in the order they are tried
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Check whether `alias` names this lexer (case-insensitive)
    pub fn answers_to(&self, alias: &str) -> bool {
        self.name.eq_ignore_ascii_case(alias)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Lazily tokenize `text`
    ///
    /// Every call starts a fresh scan at offset 0, so the sequence can
    /// be restarted simply by calling this again.
    pub fn tokens<'l, 't>(&'l self, text: &'t str) -> Tokens<'l, 't> {
        Tokens {
            lexer: self,
            text,
            pos: 0,
            failed: false,
        }
    }

    /// Tokenize all of `text`, failing on the first position no rule matches
    pub fn tokenize<'t>(&self, text: &'t str) -> Result<Vec<Token<'t>>, LexError> {
        self.tokens(text).collect()
    }

    /// Find the first rule matching at `pos`
    fn match_at(&self, text: &str, pos: usize) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_at(text, pos).map(|end| (end, rule)))
    }
}

/// Lazy token sequence produced by [`Lexer::tokens`]
///
/// Yields tokens in input order. If a position cannot be matched the
/// error is yielded once and the sequence ends.
#[derive(Debug, Clone)]
pub struct Tokens<'l, 't> {
    lexer: &'l Lexer,
    text: &'t str,
    pos: usize,
    failed: bool,
}

impl<'l, 't> Iterator for Tokens<'l, 't> {
    type Item = Result<Token<'t>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        match self.lexer.match_at(self.text, start) {
            Some((end, rule)) => {
                let token = Token {
                    start,
                    text: &self.text[start..end],
                    token_type: rule.token_type,
                };
                trace!(rule = %rule.name, start, end, "matched token");
                self.pos = end;
                Some(Ok(token))
            }
            None => {
                self.failed = true;
                let err = LexError::new(&self.lexer.name, self.text, start);
                warn!(lexer = %self.lexer.name, offset = start, "no rule matches");
                Some(Err(err))
            }
        }
    }
}

impl<'l, 't> std::iter::FusedIterator for Tokens<'l, 't> {}
