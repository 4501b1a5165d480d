/// Built-in function implementations.
///
/// Rounding, absolute value and the trigonometric functions.
pub mod builtin;
/// The `clamp` function implementation.
///
/// Restricts a value to a specified inclusive range.
pub mod clamp;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two arguments.
pub mod min_max;

pub mod core;
