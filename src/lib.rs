//! # equation
//!
//! equation parses algebraic expressions such as `2x^2 + sin(30) / 4` into a
//! reusable syntax tree and calculates them against variable bindings and an
//! angle unit. Equations can also be written back as text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::CalculationContext;

/// Defines the structure of parsed equations.
///
/// This module declares the `Part` enum and the operator types that represent
/// an equation as a tree. The tree is built by the parser and traversed by the
/// evaluator and the printer.
///
/// # Responsibilities
/// - Defines every node kind an equation can contain.
/// - Defines operator symbols and claiming priorities.
pub mod ast;
/// Parsed equations and their public entry points.
///
/// Ties tokenizing, parsing, calculation and printing together behind the
/// [`Equation`] type.
pub mod equation;
/// Provides unified error types for parsing and calculation.
///
/// This module defines all errors that can be raised while tokenizing, parsing
/// or calculating an equation. Parse errors carry the character offset at
/// which the problem was found.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates tokenizing, parsing, evaluation and printing.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser passes, the evaluator and the printer.
/// - Holds the settings types that configure each phase.
pub mod interpreter;
/// Units of measurement used by the trigonometric functions.
pub mod measure;

pub use equation::Equation;

/// Parses `source` and calculates it in one step.
///
/// Uses the default number format and parse settings.
///
/// # Errors
/// Returns an error if parsing or calculation fails.
///
/// # Examples
/// ```
/// use equation::{evaluate, interpreter::evaluator::core::CalculationContext};
///
/// let ctx = CalculationContext::new().with_variable("x", 3.0);
/// assert_eq!(evaluate("2x + 1", &ctx).unwrap(), 7.0);
///
/// // Example with an intentional error (unknown variable).
/// assert!(evaluate("y + 1", &ctx).is_err());
/// ```
pub fn evaluate(source: &str, ctx: &CalculationContext) -> Result<f64, Box<dyn std::error::Error>> {
    let equation = Equation::parse(source)?;
    Ok(equation.calculate(ctx)?)
}
