//! Token categories for syntax highlighting
//!
//! Categories form a tree rooted at [`TokenType::Token`], using the
//! same dotted names as Pygments so style sheets written for it can be
//! loaded unchanged.

/// Hierarchical token category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Root of the category tree
    Token,
    /// Plain text, including whitespace
    Text,
    Whitespace,
    /// Input no rule could classify
    Error,
    Comment,
    CommentSingle,
    CommentMultiline,
    Keyword,
    /// Boolean literals (true, false)
    KeywordConstant,
    KeywordDeclaration,
    KeywordNamespace,
    KeywordPseudo,
    KeywordReserved,
    /// Built-in type names (bool, i32, f32)
    KeywordType,
    Name,
    NameBuiltin,
    NameClass,
    NameFunction,
    NameVariable,
    Literal,
    String,
    Number,
    NumberInteger,
    NumberFloat,
    Operator,
    Punctuation,
    Generic,
}

impl TokenType {
    /// Every category, parents before children
    pub const ALL: [TokenType; 27] = [
        TokenType::Token,
        TokenType::Text,
        TokenType::Whitespace,
        TokenType::Error,
        TokenType::Comment,
        TokenType::CommentSingle,
        TokenType::CommentMultiline,
        TokenType::Keyword,
        TokenType::KeywordConstant,
        TokenType::KeywordDeclaration,
        TokenType::KeywordNamespace,
        TokenType::KeywordPseudo,
        TokenType::KeywordReserved,
        TokenType::KeywordType,
        TokenType::Name,
        TokenType::NameBuiltin,
        TokenType::NameClass,
        TokenType::NameFunction,
        TokenType::NameVariable,
        TokenType::Literal,
        TokenType::String,
        TokenType::Number,
        TokenType::NumberInteger,
        TokenType::NumberFloat,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Generic,
    ];

    /// Get the direct ancestor of this category (None for the root)
    pub fn parent(&self) -> Option<TokenType> {
        match self {
            TokenType::Token => None,
            TokenType::Whitespace => Some(TokenType::Text),
            TokenType::CommentSingle | TokenType::CommentMultiline => Some(TokenType::Comment),
            TokenType::KeywordConstant
            | TokenType::KeywordDeclaration
            | TokenType::KeywordNamespace
            | TokenType::KeywordPseudo
            | TokenType::KeywordReserved
            | TokenType::KeywordType => Some(TokenType::Keyword),
            TokenType::NameBuiltin
            | TokenType::NameClass
            | TokenType::NameFunction
            | TokenType::NameVariable => Some(TokenType::Name),
            TokenType::String | TokenType::Number => Some(TokenType::Literal),
            TokenType::NumberInteger | TokenType::NumberFloat => Some(TokenType::Number),
            TokenType::Text
            | TokenType::Error
            | TokenType::Comment
            | TokenType::Keyword
            | TokenType::Name
            | TokenType::Literal
            | TokenType::Operator
            | TokenType::Punctuation
            | TokenType::Generic => Some(TokenType::Token),
        }
    }

    /// Iterate from this category up to the root, self included
    pub fn ancestors(&self) -> Ancestors {
        Ancestors { next: Some(*self) }
    }

    /// Check whether this category is `other` or lies below it
    pub fn is_subtype_of(&self, other: TokenType) -> bool {
        self.ancestors().any(|t| t == other)
    }

    /// Get the dotted name of this category
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Token => "Token",
            TokenType::Text => "Text",
            TokenType::Whitespace => "Text.Whitespace",
            TokenType::Error => "Error",
            TokenType::Comment => "Comment",
            TokenType::CommentSingle => "Comment.Single",
            TokenType::CommentMultiline => "Comment.Multiline",
            TokenType::Keyword => "Keyword",
            TokenType::KeywordConstant => "Keyword.Constant",
            TokenType::KeywordDeclaration => "Keyword.Declaration",
            TokenType::KeywordNamespace => "Keyword.Namespace",
            TokenType::KeywordPseudo => "Keyword.Pseudo",
            TokenType::KeywordReserved => "Keyword.Reserved",
            TokenType::KeywordType => "Keyword.Type",
            TokenType::Name => "Name",
            TokenType::NameBuiltin => "Name.Builtin",
            TokenType::NameClass => "Name.Class",
            TokenType::NameFunction => "Name.Function",
            TokenType::NameVariable => "Name.Variable",
            TokenType::Literal => "Literal",
            TokenType::String => "Literal.String",
            TokenType::Number => "Literal.Number",
            TokenType::NumberInteger => "Literal.Number.Integer",
            TokenType::NumberFloat => "Literal.Number.Float",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::Generic => "Generic",
        }
    }

    /// Parse a category from its dotted name (for style files)
    ///
    /// Accepts an optional `Token.` prefix and the short forms
    /// `String` and `Number.*` that Pygments exposes as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name == "Token" {
            return Some(TokenType::Token);
        }
        let name = name.strip_prefix("Token.").unwrap_or(name);
        let canonical = match name {
            "String" => "Literal.String",
            "Number" => "Literal.Number",
            "Number.Integer" => "Literal.Number.Integer",
            "Number.Float" => "Literal.Number.Float",
            other => other,
        };
        Self::ALL.iter().copied().find(|t| t.name() == canonical)
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over a category and its ancestors
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<TokenType>,
}

impl Iterator for Ancestors {
    type Item = TokenType;

    fn next(&mut self) -> Option<TokenType> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
