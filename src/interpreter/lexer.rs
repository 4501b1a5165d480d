use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        settings::NumberFormat,
        token::{Spanned, Token},
    },
};

/// Raw lexical unit recognized directly from the source text.
///
/// Number literals are not matched as a whole here because the decimal
/// separator is only known at runtime. Digit runs and separator characters are
/// folded into [`Token::Number`] by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// A run of ASCII digits such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// A letter followed by letters and digits, such as `x` or `sin`.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*")]
    Word,
    /// Whitespace and control characters.
    #[regex(r"[\s\p{Cc}]+", logos::skip)]
    Ignored,
}

/// Digits and separators collected so far for one number literal.
struct PendingNumber {
    text:          String,
    position:      usize,
    end:           usize,
    has_separator: bool,
}

impl PendingNumber {
    fn new(position: usize) -> Self {
        Self { text: String::new(),
               position,
               end: 0,
               has_separator: false }
    }

    fn push(&mut self, digits: Option<&str>, position: usize, end: usize) -> ParseResult<()> {
        if let Some(digits) = digits {
            self.text.push_str(digits);
        } else {
            if self.has_separator {
                return Err(ParseError::InvalidNumber { position });
            }
            self.has_separator = true;
            self.text.push('.');
        }
        self.end = end;
        Ok(())
    }

    fn finish(self) -> ParseResult<Spanned> {
        self.text
            .parse::<f64>()
            .map(|value| (Token::Number(value), self.position))
            .map_err(|_| ParseError::InvalidNumber { position: self.position })
    }
}

/// Converts byte offsets into character offsets while walking forward.
struct CharCursor<'a> {
    source: &'a str,
    byte:   usize,
    chars:  usize,
}

impl CharCursor<'_> {
    fn position(&mut self, byte: usize) -> usize {
        self.chars += self.source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Splits an equation into positioned tokens.
///
/// Operators, parentheses and commas become fixed tokens, whitespace and
/// control characters are skipped, letters start identifiers and digits or
/// the decimal separator start numbers. A number consumes contiguous digits
/// and at most one decimal separator. When the separator is `,`, a comma only
/// continues a number that is directly in front of it; anywhere else it stays
/// a [`Token::Comma`].
///
/// # Parameters
/// - `source`: The equation text.
/// - `format`: Number format providing the decimal separator.
///
/// # Returns
/// Tokens paired with the character offset they start at.
///
/// # Errors
/// - `UnknownCharacter` for characters that start no token.
/// - `InvalidNumber` for a second separator in one number or a lone separator.
///
/// # Example
/// ```
/// use equation::interpreter::{lexer::tokenize, settings::NumberFormat, token::Token};
///
/// let tokens = tokenize("2.5 * x", &NumberFormat::default()).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.5), 0),
///                 (Token::Star, 4),
///                 (Token::Identifier("x".to_string()), 6)]);
///
/// let tokens = tokenize("1,5", &NumberFormat::new(',')).unwrap();
/// assert_eq!(tokens, vec![(Token::Number(1.5), 0)]);
/// ```
pub fn tokenize(source: &str, format: &NumberFormat) -> ParseResult<Vec<Spanned>> {
    let separator = format.decimal_separator;
    let mut cursor = CharCursor { source,
                                  byte: 0,
                                  chars: 0 };
    let mut tokens = Vec::new();
    let mut number: Option<PendingNumber> = None;
    let mut lexer = Lexeme::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = cursor.position(span.start);
        let continues_number = number.as_ref().is_some_and(|n| n.end == span.start);

        let token = match result {
            Ok(Lexeme::Digits) => None,
            Ok(Lexeme::Dot) if separator == '.' => None,
            Ok(Lexeme::Comma) if separator == ',' && continues_number => None,
            Ok(Lexeme::Dot) => {
                return Err(ParseError::UnknownCharacter { character: '.',
                                                          position });
            },
            Ok(Lexeme::Plus) => Some(Token::Plus),
            Ok(Lexeme::Minus) => Some(Token::Minus),
            Ok(Lexeme::Star) => Some(Token::Star),
            Ok(Lexeme::Slash) => Some(Token::Slash),
            Ok(Lexeme::Percent) => Some(Token::Percent),
            Ok(Lexeme::Caret) => Some(Token::Caret),
            Ok(Lexeme::LParen) => Some(Token::OpenParen),
            Ok(Lexeme::RParen) => Some(Token::CloseParen),
            Ok(Lexeme::Comma) => Some(Token::Comma),
            Ok(Lexeme::Word) => Some(Token::Identifier(lexer.slice().to_string())),
            Ok(Lexeme::Ignored) => continue,
            Err(()) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                let char_end = span.start + character.len_utf8();
                if span.end < char_end {
                    lexer.bump(char_end - span.end);
                }
                if character != separator {
                    return Err(ParseError::UnknownCharacter { character, position });
                }
                None
            },
        };

        let end = lexer.span().end.max(span.end);
        match token {
            Some(token) => {
                if let Some(pending) = number.take() {
                    tokens.push(pending.finish()?);
                }
                tokens.push((token, position));
            },
            None => {
                let digits = matches!(result, Ok(Lexeme::Digits)).then(|| lexer.slice());
                if !continues_number {
                    if let Some(pending) = number.take() {
                        tokens.push(pending.finish()?);
                    }
                    number = Some(PendingNumber::new(position));
                }
                if let Some(pending) = number.as_mut() {
                    pending.push(digits, position, end)?;
                }
            },
        }
    }

    if let Some(pending) = number.take() {
        tokens.push(pending.finish()?);
    }

    trace!(count = tokens.len(), "tokenized equation");
    Ok(tokens)
}
