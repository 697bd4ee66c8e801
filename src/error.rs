//! Error types for sushi-highlight

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::syntax::SourcePosition;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid style '{style}': {reason}")]
    InvalidStyle { style: String, reason: String },

    #[error("Unknown token type: {0}")]
    UnknownTokenType(String),

    #[error("No lexer registered for: {0}")]
    UnknownLexer(String),

    #[error("No style registered for: {0}")]
    UnknownStyle(String),

    #[error("Already registered: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// No rule of a lexer matched at some position of the input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{lexer}: no rule matches at line {line}, column {column} (offset {offset})")]
pub struct LexError {
    /// Name of the lexer that failed
    pub lexer: String,
    /// Byte offset of the first unconsumed character
    pub offset: usize,
    /// 1-based line of the offset
    pub line: usize,
    /// 0-based column (in characters) of the offset
    pub column: usize,
}

impl LexError {
    pub(crate) fn new(lexer: &str, text: &str, offset: usize) -> Self {
        let position = SourcePosition::locate(text, offset).unwrap_or_default();
        Self {
            lexer: lexer.to_string(),
            offset,
            line: position.line,
            column: position.column,
        }
    }

    /// Render the offending line of `source` with a caret under the offset
    ///
    /// The caret is aligned by display width so wide characters before
    /// the offset do not shift it.
    pub fn render(&self, source: &str) -> String {
        let mut offset = self.offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = source[..offset]
            .rfind(|c: char| c == '\n' || c == '\r')
            .map(|i| i + 1)
            .unwrap_or(0);
        let line_end = source[offset..]
            .find(|c: char| c == '\n' || c == '\r')
            .map(|i| offset + i)
            .unwrap_or(source.len());

        let line = &source[line_start..line_end];
        let indent = UnicodeWidthStr::width(&source[line_start..offset]);
        format!("{}\n{}\n{}^", self, line, " ".repeat(indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_position() {
        let err = LexError::new("Test", "ab\ncd$", 5);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 2);
        assert_eq!(
            err.to_string(),
            "Test: no rule matches at line 2, column 2 (offset 5)"
        );
    }

    #[test]
    fn test_render_caret() {
        let source = "first\nab$cd\nlast";
        let err = LexError::new("Test", source, 8);
        let rendered = err.render(source);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], "ab$cd");
        assert_eq!(lines[2], "  ^");
    }

    #[test]
    fn test_render_caret_after_wide_chars() {
        let source = "寿司$";
        let err = LexError::new("Test", source, "寿司".len());
        assert!(err.render(source).ends_with("\n    ^"));
    }

    #[test]
    fn test_lex_error_converts() {
        let err: HighlightError = LexError::new("Test", "x", 0).into();
        assert!(matches!(err, HighlightError::Lex(_)));
    }
}
