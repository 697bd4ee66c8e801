//! Built-in lexer and style definitions

mod sushi;

use super::lexer::Lexer;
use super::style_table::StyleTable;
use crate::error::Result;

pub use sushi::{sushi_alt_style, sushi_lexer, sushi_style, RESERVED_KEYWORDS};

/// Get all built-in lexers
pub fn all_lexers() -> Result<Vec<Lexer>> {
    Ok(vec![sushi::sushi_lexer()?])
}

/// Get all built-in style tables
pub fn all_styles() -> Result<Vec<StyleTable>> {
    Ok(vec![sushi::sushi_style()?, sushi::sushi_alt_style()?])
}
