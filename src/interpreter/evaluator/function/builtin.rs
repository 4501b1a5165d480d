use crate::{
    ast::Part,
    interpreter::evaluator::{
        core::{CalculationContext, EvalResult},
        function::core::eval_arguments,
    },
    measure::{ANGLE, RADIAN},
};

/// Applies an `f64` method to the single argument of a call.
///
/// The generated functions accept exactly one argument.
///
/// # Example
/// ```
/// use equation::{
///     ast::Part,
///     interpreter::evaluator::{core::CalculationContext, function::builtin::floor},
/// };
///
/// let ctx = CalculationContext::new();
/// assert_eq!(floor(&[Part::Number(2.7)], &ctx).unwrap(), 2.0);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Part], ctx: &CalculationContext) -> EvalResult<f64> {
            let [x] = eval_arguments(stringify!($fname), args, ctx)?;
            Ok(x.$real_fn())
        }
    };
}

/// Applies a trigonometric `f64` method to the single argument of a call.
///
/// The argument is read in the context's angle unit and converted to radians
/// first.
///
/// # Example
/// ```
/// use equation::{
///     ast::Part,
///     interpreter::evaluator::{core::CalculationContext, function::builtin::sin},
///     measure::RADIAN,
/// };
///
/// let degrees = CalculationContext::new();
/// assert!((sin(&[Part::Number(90.0)], &degrees).unwrap() - 1.0).abs() < 1e-12);
///
/// let radians = CalculationContext::new().with_angle_unit(RADIAN);
/// let half_pi = Part::Number(std::f64::consts::FRAC_PI_2);
/// assert!((sin(&[half_pi], &radians).unwrap() - 1.0).abs() < 1e-12);
/// ```
macro_rules! angle_builtin {
    ($fname:ident) => {
        pub fn $fname(args: &[Part], ctx: &CalculationContext) -> EvalResult<f64> {
            let [angle] = eval_arguments(stringify!($fname), args, ctx)?;
            Ok(ANGLE.convert(angle, ctx.angle_unit, RADIAN)?.$fname())
        }
    };
}

real_builtin!(abs, abs);
real_builtin!(ceiling, ceil);
real_builtin!(floor, floor);
// Halfway cases go to the even neighbour: round(2.5) is 2.
real_builtin!(round, round_ties_even);

angle_builtin!(sin);
angle_builtin!(cos);
angle_builtin!(tan);
