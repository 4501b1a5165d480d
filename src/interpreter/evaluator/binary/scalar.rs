use crate::{ast::BinaryOperator, interpreter::evaluator::core::CalculationContext};

impl CalculationContext {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Operations follow IEEE-754 double precision: dividing by zero yields an
    /// infinity or NaN and `%` keeps the sign of the dividend. Exponentiation
    /// is handled by [`eval_pow`](CalculationContext::eval_pow).
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use equation::{ast::BinaryOperator, interpreter::evaluator::core::CalculationContext};
    ///
    /// let result = CalculationContext::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0);
    /// assert_eq!(result, 3.0);
    ///
    /// let result = CalculationContext::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0);
    /// assert_eq!(result, -1.0);
    ///
    /// assert!(CalculationContext::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }
}
