use tracing::trace;

use crate::{
    ast::Part,
    error::ParseError,
    interpreter::{
        parser::{block::extract_blocks, build::build, function::extract_functions,
                 implicit::insert_implicit_multiplication, resolve::resolve},
        settings::ParseSettings,
        token::Spanned,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into a tree.
///
/// This is the entry point for the parser. The tokens pass through every stage
/// in order: function extraction, block extraction, implicit multiplication
/// (when enabled), precedence resolution and tree building.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
/// - `settings`: Registered functions and parser switches.
///
/// # Returns
/// The root [`Part`] of the parsed equation.
///
/// # Example
/// ```
/// use equation::interpreter::{
///     lexer::tokenize,
///     parser::core::parse_tokens,
///     settings::{NumberFormat, ParseSettings},
/// };
///
/// let tokens = tokenize("1 + 2 * 3", &NumberFormat::default()).unwrap();
/// let part = parse_tokens(tokens, &ParseSettings::default()).unwrap();
/// assert_eq!(part.to_string(), "1 + 2 * 3");
/// ```
pub fn parse_tokens(tokens: Vec<Spanned>, settings: &ParseSettings) -> ParseResult<Part> {
    parse_nested(tokens, settings, 0)
}

/// Runs the whole pipeline on a span that is nested `depth` levels deep.
///
/// Function arguments and parenthesized blocks re-enter here with
/// `depth + 1`.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `TooDeeplyNested` if `depth` exceeds `settings.max_depth` or the tree
///   would be higher than `settings.max_height`.
/// - Any error raised by the individual passes.
pub(in crate::interpreter::parser) fn parse_nested(tokens: Vec<Spanned>,
                                                   settings: &ParseSettings,
                                                   depth: usize)
                                                   -> ParseResult<Part> {
    let Some(&(_, start)) = tokens.first() else {
        return Err(ParseError::EmptyExpression { position: 0 });
    };

    if depth > settings.max_depth {
        return Err(ParseError::TooDeeplyNested { depth,
                                                 position: start });
    }

    trace!(depth, count = tokens.len(), "parsing token span");

    let tokens = extract_functions(tokens, settings, depth)?;
    let tokens = extract_blocks(tokens, settings, depth)?;
    let tokens = if settings.implicit_multiplication {
        insert_implicit_multiplication(tokens)
    } else {
        tokens
    };

    let resolution = resolve(&tokens)?;
    build(tokens, &resolution, settings.max_height)
}
