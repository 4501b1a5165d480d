use crate::{ast::UnaryOperator, interpreter::evaluator::core::CalculationContext};

impl CalculationContext {
    /// Applies a unary operator to a value.
    ///
    /// # Example
    /// ```
    /// use equation::{ast::UnaryOperator, interpreter::evaluator::core::CalculationContext};
    ///
    /// assert_eq!(CalculationContext::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(CalculationContext::eval_unary(UnaryOperator::Identity, 5.0), 5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Identity => value,
            UnaryOperator::Negate => -value,
        }
    }
}
