use crate::{ast::BinaryOperator, interpreter::evaluator::core::CalculationContext};

impl CalculationContext {
    /// Evaluates a binary operation between two values.
    ///
    /// Addition, subtraction, multiplication, division and modulo are routed
    /// to `eval_scalar_op`; exponentiation calls `eval_pow`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result of `left op right`.
    ///
    /// # Example
    /// ```
    /// use equation::{ast::BinaryOperator, interpreter::evaluator::core::CalculationContext};
    ///
    /// let result = CalculationContext::eval_binary(BinaryOperator::Add, 3.0, 4.0);
    /// assert_eq!(result, 7.0);
    ///
    /// let result = CalculationContext::eval_binary(BinaryOperator::Pow, 2.0, 10.0);
    /// assert_eq!(result, 1024.0);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Pow => Self::eval_pow(left, right),
            _ => Self::eval_scalar_op(op, left, right),
        }
    }
}
