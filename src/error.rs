/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an equation and
/// arranging its tokens into a tree: unknown characters, malformed numbers,
/// unbalanced parentheses, unknown functions and operators that cannot be
/// resolved into a single root.
pub mod parse_error;
/// Execution errors.
///
/// Contains all error types that can be raised while calculating an already
/// parsed equation, such as references to undefined variables.
pub mod execution_error;

pub use execution_error::ExecutionError;
pub use parse_error::ParseError;
