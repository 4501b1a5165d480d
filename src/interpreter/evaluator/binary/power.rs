use crate::interpreter::evaluator::core::CalculationContext;

impl CalculationContext {
    /// Evaluates an exponentiation.
    ///
    /// The power is computed from the magnitude of the base. When the base is
    /// negative and the exponent is an odd integer the result is negated, so
    /// `(-2)^3` is `-8`. Any other negative base yields a positive result
    /// instead of NaN: `(-2)^2` is `4` and `(-4)^0.5` is `2`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// The result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use equation::interpreter::evaluator::core::CalculationContext;
    ///
    /// assert_eq!(CalculationContext::eval_pow(2.0, 10.0), 1024.0);
    /// assert_eq!(CalculationContext::eval_pow(-2.0, 3.0), -8.0);
    /// assert_eq!(CalculationContext::eval_pow(-4.0, 0.5), 2.0);
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        let magnitude = base.abs().powf(exponent);

        if base < 0.0 && exponent.abs() % 2.0 == 1.0 {
            -magnitude
        } else {
            magnitude
        }
    }
}
