//! Sushi language definition

use crate::error::Result;
use crate::syntax::lexer::Lexer;
use crate::syntax::rules::Rule;
use crate::syntax::style_table::StyleTable;
use crate::syntax::tokens::TokenType;

/// Words that cannot be used as identifiers without an `@` prefix
pub const RESERVED_KEYWORDS: [&str; 5] = ["bool", "true", "false", "i32", "f32"];

const TYPE_KEYWORDS: [&str; 3] = ["bool", "i32", "f32"];
const CONSTANT_KEYWORDS: [&str; 2] = ["true", "false"];

/// Create the Sushi lexer
pub fn sushi_lexer() -> Result<Lexer> {
    let mut lexer = Lexer::new("Sushi");
    lexer.add_alias("sushi");
    lexer.add_filename("*.sus");

    // Layout
    lexer.add_rule(Rule::new("whitespace", r"[^\S\r\n]+", TokenType::Text)?);
    lexer.add_rule(Rule::new("newline", r"\r\n|\r|\n", TokenType::Text)?);

    // Comments; a line comment takes its line break with it
    lexer.add_rule(Rule::new(
        "line_comment",
        r"//[^\r\n]*(?:\r\n|\r|\n)?",
        TokenType::CommentSingle,
    )?);
    // An unterminated block comment runs to the end of input
    lexer.add_rule(Rule::new(
        "block_comment",
        r"(?s)/\*.*?(?:\*/|\z)",
        TokenType::CommentMultiline,
    )?);

    // Keywords, before identifiers
    lexer.add_rule(Rule::words("type_keyword", &TYPE_KEYWORDS, TokenType::KeywordType)?);
    lexer.add_rule(Rule::words(
        "constant_keyword",
        &CONSTANT_KEYWORDS,
        TokenType::KeywordConstant,
    )?);

    // Identifiers; `@` lets a reserved word be used as a name
    lexer.add_rule(Rule::new("escaped_identifier", r"@[\p{Alphabetic}_]\w*", TokenType::Name)?);
    lexer.add_rule(Rule::new("identifier", r"[\p{Alphabetic}_]\w*", TokenType::Name)?);

    // Numbers
    lexer.add_rule(Rule::new("float", r"[0-9]+\.[0-9]+", TokenType::NumberFloat)?);
    lexer.add_rule(Rule::new("integer", r"[0-9]+", TokenType::NumberInteger)?);

    // Symbols
    lexer.add_rule(Rule::new("terminator", r";", TokenType::Punctuation)?);
    lexer.add_rule(Rule::new("bracket", r"[(){}\[\],]", TokenType::Punctuation)?);
    lexer.add_rule(Rule::new("assignment", r"=", TokenType::Operator)?);
    lexer.add_rule(Rule::new("operator", r"(?s).", TokenType::Operator)?);

    Ok(lexer)
}

/// Create the Sushi color style
pub fn sushi_style() -> Result<StyleTable> {
    StyleTable::from_pairs(
        "sushi",
        &[
            (TokenType::Token, ""),
            (TokenType::Comment, ""),
            (TokenType::Keyword, "#aa0000"),
            (TokenType::KeywordConstant, "#aa0000"),
            (TokenType::KeywordDeclaration, "#aa0000"),
            (TokenType::KeywordNamespace, "#aa0000"),
            (TokenType::KeywordPseudo, "#aa0000"),
            (TokenType::KeywordReserved, "#aa0000"),
            (TokenType::KeywordType, "#aa0000"),
            (TokenType::Name, "#aa00aa"),
            (TokenType::NameClass, ""),
            (TokenType::NameFunction, ""),
            (TokenType::Operator, "#ffffb6"),
            (TokenType::String, ""),
        ],
    )
}

/// Create the alternate Sushi palette, with name and operator colors swapped
pub fn sushi_alt_style() -> Result<StyleTable> {
    StyleTable::from_pairs(
        "sushi-alt",
        &[
            (TokenType::Token, ""),
            (TokenType::Comment, ""),
            (TokenType::Keyword, "#aa0000"),
            (TokenType::Name, "#ffffb6"),
            (TokenType::NameClass, ""),
            (TokenType::NameFunction, ""),
            (TokenType::Operator, "#aa00aa"),
            (TokenType::String, ""),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::{Color, Style};

    fn lex(text: &str) -> Vec<(TokenType, &str)> {
        sushi_lexer()
            .unwrap()
            .tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.token_type, t.text))
            .collect()
    }

    #[test]
    fn test_names_and_whitespace() {
        assert_eq!(
            lex("foo bar"),
            vec![
                (TokenType::Name, "foo"),
                (TokenType::Text, " "),
                (TokenType::Name, "bar"),
            ]
        );
    }

    #[test]
    fn test_line_comment_takes_newline() {
        assert_eq!(lex("// hello\n"), vec![(TokenType::CommentSingle, "// hello\n")]);
        assert_eq!(
            lex("// a\r\nx"),
            vec![(TokenType::CommentSingle, "// a\r\n"), (TokenType::Name, "x")]
        );
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            lex("/* a\n b */x"),
            vec![(TokenType::CommentMultiline, "/* a\n b */"), (TokenType::Name, "x")]
        );
        assert_eq!(lex("/* a */ /* b */").len(), 3);
        assert_eq!(lex("/* open"), vec![(TokenType::CommentMultiline, "/* open")]);
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            lex("i32 count = 42;"),
            vec![
                (TokenType::KeywordType, "i32"),
                (TokenType::Text, " "),
                (TokenType::Name, "count"),
                (TokenType::Text, " "),
                (TokenType::Operator, "="),
                (TokenType::Text, " "),
                (TokenType::NumberInteger, "42"),
                (TokenType::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_boolean_and_float_literals() {
        assert_eq!(
            lex("true 1.5 false"),
            vec![
                (TokenType::KeywordConstant, "true"),
                (TokenType::Text, " "),
                (TokenType::NumberFloat, "1.5"),
                (TokenType::Text, " "),
                (TokenType::KeywordConstant, "false"),
            ]
        );
    }

    #[test]
    fn test_keywords_match_whole_words() {
        assert_eq!(lex("boolean"), vec![(TokenType::Name, "boolean")]);
        assert_eq!(lex("true_value"), vec![(TokenType::Name, "true_value")]);
        assert_eq!(lex("i32x"), vec![(TokenType::Name, "i32x")]);
        assert_eq!(lex("falseé"), vec![(TokenType::Name, "falseé")]);
    }

    #[test]
    fn test_escaped_identifier() {
        assert_eq!(lex("@bool"), vec![(TokenType::Name, "@bool")]);
        assert_eq!(
            lex("@ x"),
            vec![
                (TokenType::Operator, "@"),
                (TokenType::Text, " "),
                (TokenType::Name, "x"),
            ]
        );
    }

    #[test]
    fn test_function_shape() {
        let tokens = lex("f32 half(f32 x) { }");
        assert!(tokens.contains(&(TokenType::Punctuation, "(")));
        assert!(tokens.contains(&(TokenType::Punctuation, ")")));
        assert!(tokens.contains(&(TokenType::Punctuation, "{")));
        assert_eq!(tokens.iter().filter(|t| t.0 == TokenType::KeywordType).count(), 2);
    }

    #[test]
    fn test_catch_all_never_fails() {
        let tokens = lex("a + b\t$ 寿司 ~\r");
        let rebuilt: String = tokens.iter().map(|t| t.1).collect();
        assert_eq!(rebuilt, "a + b\t$ 寿司 ~\r");
        assert!(tokens.contains(&(TokenType::Operator, "+")));
        assert!(tokens.contains(&(TokenType::Name, "寿司")));
    }

    #[test]
    fn test_reserved_keywords_are_all_ruled() {
        for word in RESERVED_KEYWORDS {
            let tokens = lex(word);
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].0.is_subtype_of(TokenType::Keyword), "{word} is not a keyword");
        }
    }

    #[test]
    fn test_style_colors() {
        let style = sushi_style().unwrap();
        let red = Style::fg(Color::rgb(0xaa, 0x00, 0x00));
        assert_eq!(style.style_for(TokenType::Keyword), red);
        assert_eq!(style.style_for(TokenType::KeywordType), red);
        assert_eq!(style.style_for(TokenType::NameClass), Style::fg(Color::rgb(0xaa, 0x00, 0xaa)));
        assert_eq!(style.style_for(TokenType::Operator), Style::fg(Color::rgb(0xff, 0xff, 0xb6)));
        assert!(style.style_for(TokenType::CommentSingle).is_default());
        assert!(style.style_for(TokenType::Text).is_default());
    }

    #[test]
    fn test_alt_style_colors() {
        let style = sushi_alt_style().unwrap();
        let red = Style::fg(Color::rgb(0xaa, 0x00, 0x00));
        let pale = Style::fg(Color::rgb(0xff, 0xff, 0xb6));
        assert_eq!(style.name, "sushi-alt");
        assert_eq!(style.style_for(TokenType::KeywordType), red);
        assert_eq!(style.style_for(TokenType::NameFunction), pale);
        assert_eq!(style.style_for(TokenType::Operator), Style::fg(Color::rgb(0xaa, 0x00, 0xaa)));
        assert!(style.style_for(TokenType::Punctuation).is_default());
    }
}
