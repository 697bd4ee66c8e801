//! Syntax highlighting module
//!
//! This module provides the pieces a documentation host needs to
//! highlight code blocks:
//! - Token categories and their hierarchy
//! - Rule-driven lexers and the lazy token sequence they produce
//! - Style tables resolving categories to display attributes
//! - A registry binding lexers and styles to the names hosts use

mod builtin;
mod lexer;
mod position;
mod registry;
mod rules;
mod style;
mod style_table;
mod tokens;

pub use builtin::{sushi_alt_style, sushi_lexer, sushi_style, RESERVED_KEYWORDS};
pub use lexer::{Lexer, Token, Tokens};
pub use position::SourcePosition;
pub use registry::{Highlighter, Registry};
pub use rules::Rule;
pub use style::{Color, Span, Style, StyleEntry};
pub use style_table::StyleTable;
pub use tokens::{Ancestors, TokenType};
