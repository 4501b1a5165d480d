/// The lexer module tokenizes equation text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// tagged with the character offset it starts at. Number literals are read
/// with a configurable decimal separator.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Reports unknown characters and malformed numbers.
pub mod lexer;
/// Token types shared by the lexer and the parser passes.
pub mod token;
/// The parser module builds the tree of [`Part`](crate::ast::Part)s from
/// tokens.
///
/// Parsing runs as a sequence of passes over a flat token sequence: function
/// calls and parenthesized blocks are collapsed first, implicit
/// multiplications are inserted, and operator precedence is resolved by
/// letting operators claim their operands.
///
/// # Responsibilities
/// - Binds function calls to registered implementations.
/// - Validates structure, reporting errors with the character position.
pub mod parser;
/// The evaluator module calculates parsed equations.
///
/// The evaluator traverses the tree, resolves variables from the calculation
/// context and calls the bound function implementations.
///
/// # Responsibilities
/// - Evaluates every kind of [`Part`](crate::ast::Part).
/// - Reports undefined variables and invalid function arguments.
pub mod evaluator;
/// Conversion of parsed equations back to text.
pub mod printer;
/// Parse, number format and render options.
pub mod settings;
