use std::iter::Peekable;

use crate::{
    ast::Part,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, parse_nested},
        settings::ParseSettings,
        token::{Spanned, Token},
    },
};

/// Collapses every function call into a single [`Token::Function`].
///
/// An identifier directly followed by `(` starts a call. Its argument list is
/// split at top-level commas and every argument is parsed on its own through
/// the whole pipeline, so nested calls and parentheses inside arguments are
/// handled by the recursive parse. The call is then bound to the function
/// registered under the same name and argument count.
///
/// Runs before [`extract_blocks`](crate::interpreter::parser::block::extract_blocks)
/// so the parentheses of an argument list are never read as a block.
///
/// # Parameters
/// - `tokens`: Token sequence to rewrite.
/// - `settings`: Function registry and parser switches.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A new token sequence in which every call is a single token.
///
/// # Errors
/// - `EmptyArgument` if an argument span is empty, including `f()`.
/// - `UnclosedFunctionList` if the argument list never closes.
/// - `UnknownFunction` if no function matches the name and argument count.
pub fn extract_functions(tokens: Vec<Spanned>,
                         settings: &ParseSettings,
                         depth: usize)
                         -> ParseResult<Vec<Spanned>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut tokens = tokens.into_iter().peekable();

    while let Some((token, position)) = tokens.next() {
        match token {
            Token::Identifier(name) if matches!(tokens.peek(), Some((Token::OpenParen, _))) => {
                tokens.next();
                let call = read_call(name, position, &mut tokens, settings, depth)?;
                output.push((Token::Function(call), position));
            },
            other => output.push((other, position)),
        }
    }

    Ok(output)
}

/// Reads the argument list of one call, positioned after its `(`.
///
/// Consumes tokens up to and including the matching `)`.
fn read_call<I>(name: String,
                position: usize,
                tokens: &mut Peekable<I>,
                settings: &ParseSettings,
                depth: usize)
                -> ParseResult<Part>
    where I: Iterator<Item = Spanned>
{
    let mut arguments = Vec::new();
    let mut current = Vec::new();
    let mut nesting = 1usize;

    for (token, token_position) in tokens.by_ref() {
        match token {
            Token::OpenParen => nesting += 1,
            Token::CloseParen => nesting -= 1,
            _ => {},
        }

        let closes = nesting == 0;
        if closes || (nesting == 1 && matches!(token, Token::Comma)) {
            if current.is_empty() {
                return Err(ParseError::EmptyArgument { position: token_position });
            }
            arguments.push(parse_nested(std::mem::take(&mut current), settings, depth + 1)?);

            if closes {
                return bind_call(name, arguments, position, settings);
            }
            continue;
        }

        current.push((token, token_position));
    }

    Err(ParseError::UnclosedFunctionList { name, position })
}

/// Looks up the implementation for a call by exact name and argument count.
fn bind_call(name: String,
             arguments: Vec<Part>,
             position: usize,
             settings: &ParseSettings)
             -> ParseResult<Part> {
    match settings.function(&name, arguments.len()) {
        Some(definition) => Ok(definition.create_part(arguments)),
        None => Err(ParseError::UnknownFunction { name,
                                                  arity: arguments.len(),
                                                  position }),
    }
}
