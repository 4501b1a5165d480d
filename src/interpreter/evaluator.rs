/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix `+` and `-` operators.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the calculation context, the recursive evaluator and the shared
/// result type.
pub mod core;

/// Function registry and built-in functions.
///
/// Describes callable functions and provides the default set.
pub mod function;
