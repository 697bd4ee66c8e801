//! sushi-highlight - syntax highlighting for Sushi documentation
//!
//! Provides the Sushi lexer and color style, a registry a documentation
//! host can look them up in, and the settings of the Sushi docs build.
//!
//! ```
//! use sushi_highlight::Registry;
//!
//! let registry = Registry::with_builtins()?;
//! let highlighter = registry.highlighter("sushi", "sushi")?;
//! let spans = highlighter.highlight("bool ready = true;")?;
//! assert_eq!(spans.len(), 8);
//! # Ok::<(), sushi_highlight::HighlightError>(())
//! ```

pub mod config;
pub mod error;
pub mod syntax;

pub use config::DocsConfig;
pub use error::{HighlightError, LexError, Result};
pub use syntax::{
    Color, Highlighter, Lexer, Registry, Rule, Span, Style, StyleTable, Token, TokenType,
};
