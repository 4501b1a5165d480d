use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::Part,
    error::ExecutionError,
    measure::{ANGLE, Unit},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExecutionError` describing the failure.
pub type EvalResult<T> = Result<T, ExecutionError>;

/// Everything a parsed equation needs to be calculated.
///
/// Holds the variable bindings and the angle unit trigonometric functions read
/// their arguments in. The context is only read during a calculation, so a
/// single context can be shared by many calculations.
///
/// ## Example
/// ```
/// use equation::{
///     Equation,
///     interpreter::evaluator::core::CalculationContext,
///     measure::RADIAN,
/// };
///
/// let ctx = CalculationContext::new().with_variable("x", 5.0)
///                                    .with_angle_unit(RADIAN);
///
/// let eq: Equation = "2x + 1".parse().unwrap();
/// assert_eq!(eq.calculate(&ctx).unwrap(), 11.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationContext {
    /// Variable values by name.
    pub variables:  HashMap<String, f64>,
    /// Unit in which trigonometric arguments are given.
    pub angle_unit: Unit,
}

impl Default for CalculationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationContext {
    /// Creates a context without variables that reads angles in the base unit
    /// of [`ANGLE`], degrees.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:  HashMap::new(),
               angle_unit: ANGLE.base, }
    }

    /// Binds `name` to `value`, replacing an earlier binding.
    #[must_use]
    pub fn with_variable(mut self, name: &str, value: f64) -> Self {
        self.set_variable(name, value);
        self
    }

    /// Sets the angle unit.
    #[must_use]
    pub const fn with_angle_unit(mut self, unit: Unit) -> Self {
        self.angle_unit = unit;
        self
    }

    /// Binds `name` to `value` in place.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Evaluates a part and returns the resulting number.
    ///
    /// Recursively evaluates the tree. Variables are looked up in this context
    /// and function calls run the implementation bound at parse time with
    /// their unevaluated arguments. Arithmetic follows IEEE-754, so division
    /// by zero yields an infinity or NaN instead of an error.
    ///
    /// # Parameters
    /// - `part`: The part to evaluate.
    ///
    /// # Returns
    /// The calculated value.
    ///
    /// # Errors
    /// - `UndefinedVariable` if a referenced variable is not bound.
    /// - Any error raised by a function implementation.
    ///
    /// # Example
    /// ```
    /// use equation::{
    ///     ast::{BinaryOperator, Part},
    ///     interpreter::evaluator::core::CalculationContext,
    /// };
    ///
    /// let ctx = CalculationContext::new().with_variable("x", 4.0);
    /// let part = Part::binary(BinaryOperator::Mul,
    ///                         Part::Number(3.0),
    ///                         Part::Variable("x".to_string()));
    /// assert_eq!(ctx.eval(&part).unwrap(), 12.0);
    /// ```
    pub fn eval(&self, part: &Part) -> EvalResult<f64> {
        match part {
            Part::Number(value) => Ok(*value),
            Part::Variable(name) => {
                self.get_variable(name)
                    .ok_or_else(|| ExecutionError::UndefinedVariable { name: name.clone() })
            },
            Part::FunctionCall { name,
                                 arguments,
                                 function, } => {
                trace!(function = %name, arguments = arguments.len(), "calling function");
                function(arguments, self)
            },
            Part::Block(inner) => self.eval(inner),
            Part::UnaryOp { op, operand } => Ok(Self::eval_unary(*op, self.eval(operand)?)),
            Part::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
        }
    }

    /// Evaluates every part of a slice, stopping at the first error.
    pub fn eval_all(&self, parts: &[Part]) -> EvalResult<Vec<f64>> {
        parts.iter().map(|part| self.eval(part)).collect()
    }
}
