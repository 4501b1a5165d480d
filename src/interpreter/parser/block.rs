use crate::{
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, parse_nested},
        settings::ParseSettings,
        token::{Spanned, Token},
    },
};

/// Collapses every parenthesized group into a single [`Token::Block`].
///
/// Function calls have already been collapsed, so every remaining `(` opens a
/// block. The tokens up to the matching `)` are parsed recursively and the
/// resulting tree is stored in the block token.
///
/// # Parameters
/// - `tokens`: Token sequence to rewrite.
/// - `settings`: Function registry and parser switches.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A new token sequence without any parenthesis tokens.
///
/// # Errors
/// - `UnclosedBlock` if a `(` is never closed.
/// - `EmptyBlock` for `()`.
/// - `UnmatchedCloseParen` for a `)` without an opening parenthesis.
pub fn extract_blocks(tokens: Vec<Spanned>,
                      settings: &ParseSettings,
                      depth: usize)
                      -> ParseResult<Vec<Spanned>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter();

    while let Some((token, position)) = tokens.next() {
        match token {
            Token::OpenParen => {
                let inner = read_block(position, &mut tokens)?;
                let part = parse_nested(inner, settings, depth + 1)?;
                output.push((Token::Block(part), position));
            },
            Token::CloseParen => return Err(ParseError::UnmatchedCloseParen { position }),
            other => output.push((other, position)),
        }
    }

    Ok(output)
}

/// Collects the tokens between a `(` at `position` and its matching `)`.
fn read_block<I>(position: usize, tokens: &mut I) -> ParseResult<Vec<Spanned>>
    where I: Iterator<Item = Spanned>
{
    let mut inner = Vec::new();
    let mut nesting = 1usize;

    for (token, token_position) in tokens.by_ref() {
        match token {
            Token::OpenParen => nesting += 1,
            Token::CloseParen => nesting -= 1,
            _ => {},
        }

        if nesting == 0 {
            if inner.is_empty() {
                return Err(ParseError::EmptyBlock { position });
            }
            return Ok(inner);
        }

        inner.push((token, token_position));
    }

    Err(ParseError::UnclosedBlock { position })
}
