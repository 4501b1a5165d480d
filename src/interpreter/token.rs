use crate::ast::Part;

/// A token of an equation, as seen by the parser passes.
///
/// The tokenizer only produces the literal and punctuation variants. The
/// extraction passes then collapse function calls and parenthesized groups
/// into [`Token::Function`] and [`Token::Block`], which carry the already
/// parsed sub-tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal, such as `3.14` or `.5`.
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// A parenthesized group that has already been parsed.
    Block(Part),
    /// Variable or function name.
    Identifier(String),
    /// A function call that has already been parsed.
    Function(Part),
}

/// Payload-free mirror of [`Token`], convenient for matching and reporting.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// See [`Token::Number`].
    Number,
    /// See [`Token::Plus`].
    Plus,
    /// See [`Token::Minus`].
    Minus,
    /// See [`Token::Star`].
    Star,
    /// See [`Token::Slash`].
    Slash,
    /// See [`Token::Percent`].
    Percent,
    /// See [`Token::Caret`].
    Caret,
    /// See [`Token::OpenParen`].
    OpenParen,
    /// See [`Token::CloseParen`].
    CloseParen,
    /// See [`Token::Comma`].
    Comma,
    /// See [`Token::Block`].
    Block,
    /// See [`Token::Identifier`].
    Identifier,
    /// See [`Token::Function`].
    Function,
}

/// A token together with the character offset it was read from.
pub type Spanned = (Token, usize);

impl Token {
    /// Returns the kind of this token.
    ///
    /// ## Example
    /// ```
    /// use equation::interpreter::{lexer::tokenize, settings::NumberFormat, token::TokenKind};
    ///
    /// let kinds: Vec<TokenKind> = tokenize("sin(x)", &NumberFormat::default()).unwrap()
    ///                                                                         .iter()
    ///                                                                         .map(|(t, _)| t.kind())
    ///                                                                         .collect();
    /// assert_eq!(kinds,
    ///            [TokenKind::Identifier, TokenKind::OpenParen, TokenKind::Identifier, TokenKind::CloseParen]);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::Caret => TokenKind::Caret,
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
            Self::Comma => TokenKind::Comma,
            Self::Block(_) => TokenKind::Block,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Function(_) => TokenKind::Function,
        }
    }

    /// Returns `true` for tokens that produce a value on their own: numbers,
    /// identifiers, function calls and blocks.
    ///
    /// ## Example
    /// ```
    /// use equation::interpreter::token::Token;
    ///
    /// assert!(Token::Number(1.0).is_value());
    /// assert!(Token::Identifier("x".to_string()).is_value());
    /// assert!(!Token::Plus.is_value());
    /// ```
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Identifier(_) | Self::Function(_) | Self::Block(_))
    }

    /// Returns `true` for arithmetic operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent | Self::Caret)
    }
}
