use crate::{
    ast::Part,
    interpreter::evaluator::{
        core::{CalculationContext, EvalResult},
        function::core::eval_arguments,
    },
};

/// Computes the minimum or maximum of two arguments.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. A NaN argument makes the result NaN.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `ctx`: Context the arguments are evaluated in.
///
/// # Returns
/// The smaller or larger argument.
///
/// # Example
/// ```
/// use equation::{
///     ast::Part,
///     interpreter::evaluator::{core::CalculationContext, function::min_max::min_max},
/// };
///
/// let ctx = CalculationContext::new();
/// let args = [Part::Number(3.0), Part::Number(7.0)];
///
/// assert_eq!(min_max("min", &args, &ctx).unwrap(), 3.0);
/// assert_eq!(min_max("max", &args, &ctx).unwrap(), 7.0);
/// ```
pub fn min_max(name: &str, args: &[Part], ctx: &CalculationContext) -> EvalResult<f64> {
    let [left, right] = eval_arguments(name, args, ctx)?;

    if left.is_nan() || right.is_nan() {
        return Ok(f64::NAN);
    }

    Ok(if name == "min" {
           left.min(right)
       } else {
           left.max(right)
       })
}
