/// Parser entry points and the shared result type.
///
/// Drives the individual passes in order and recurses into nested spans.
pub mod core;

/// Function call extraction.
///
/// Collapses `name(arg, ...)` into a single token bound to its implementation.
pub mod function;

/// Block extraction.
///
/// Collapses parenthesized groups into single tokens holding their subtree.
pub mod block;

/// Implicit multiplication.
///
/// Inserts `*` between adjacent value tokens.
pub mod implicit;

/// Precedence resolution.
///
/// Assigns operands to every operator by claiming priorities.
pub mod resolve;

/// Tree construction from a resolved token sequence.
pub mod build;
