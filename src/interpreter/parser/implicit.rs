use crate::interpreter::token::{Spanned, Token};

/// Inserts a multiplication between every two adjacent value tokens.
///
/// Numbers, identifiers, function calls and blocks produce values; when two of
/// them follow each other, a [`Token::Star`] positioned at the right-hand token
/// is placed between them. `2x` becomes `2 * x` and `3(2 + 2)` becomes
/// `3 * (2 + 2)`.
///
/// # Example
/// ```
/// use equation::interpreter::{parser::implicit::insert_implicit_multiplication, token::Token};
///
/// let tokens = vec![(Token::Number(2.0), 0), (Token::Identifier("x".to_string()), 1)];
/// let tokens = insert_implicit_multiplication(tokens);
/// assert_eq!(tokens[1], (Token::Star, 1));
/// assert_eq!(tokens.len(), 3);
/// ```
#[must_use]
pub fn insert_implicit_multiplication(tokens: Vec<Spanned>) -> Vec<Spanned> {
    let mut output: Vec<Spanned> = Vec::with_capacity(tokens.len() * 2);

    for (token, position) in tokens {
        if token.is_value() && output.last().is_some_and(|(previous, _)| previous.is_value()) {
            output.push((Token::Star, position));
        }
        output.push((token, position));
    }

    output
}
