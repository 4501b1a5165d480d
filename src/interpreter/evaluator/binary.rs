/// Dispatch of binary operations.
pub mod core;

/// Addition, subtraction, multiplication, division and modulo.
pub mod scalar;

/// Exponentiation.
///
/// Computes powers from the magnitude of the base and restores the sign for
/// odd integral exponents.
pub mod power;
