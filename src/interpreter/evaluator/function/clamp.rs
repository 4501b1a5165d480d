use crate::{
    ast::Part,
    error::ExecutionError,
    interpreter::evaluator::{
        core::{CalculationContext, EvalResult},
        function::core::eval_arguments,
    },
};

/// Clamps a value between a minimum and maximum bound.
///
/// If `min > max`, an `InvalidArgument` error is returned.
///
/// # Parameters
/// - `args`: Slice containing `[value, min, max]`.
/// - `ctx`: Context the arguments are evaluated in.
///
/// # Returns
/// The value restricted to `[min, max]`.
///
/// # Example
/// ```
/// use equation::{
///     ast::Part,
///     interpreter::evaluator::{core::CalculationContext, function::clamp::clamp},
/// };
///
/// let ctx = CalculationContext::new();
/// let args = [Part::Number(5.0), Part::Number(0.0), Part::Number(3.0)];
///
/// // 5 clamped between 0 and 3 yields 3
/// assert_eq!(clamp(&args, &ctx).unwrap(), 3.0);
/// ```
pub fn clamp(args: &[Part], ctx: &CalculationContext) -> EvalResult<f64> {
    let [value, min, max] = eval_arguments("clamp", args, ctx)?;

    if min > max {
        return Err(ExecutionError::InvalidArgument { function: "clamp".to_string(),
                                                     details:  format!("min ({min}) > max ({max})"), });
    }

    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };

    Ok(clamped)
}
