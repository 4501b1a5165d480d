use std::str::FromStr;

use tracing::debug;

use crate::{
    ast::Part,
    error::ParseError,
    interpreter::{
        evaluator::core::{CalculationContext, EvalResult},
        lexer::tokenize,
        parser::core::{ParseResult, parse_tokens},
        settings::{NumberFormat, ParseSettings, RenderOptions},
        token::Spanned,
    },
};

/// A parsed equation.
///
/// Holds the root of an immutable tree. An equation is parsed once and can
/// then be calculated any number of times against different contexts, and
/// shared between threads.
///
/// ## Example
/// ```
/// use equation::{Equation, interpreter::evaluator::core::CalculationContext};
///
/// let eq = Equation::parse("2 + 3 * 4").unwrap();
/// assert_eq!(eq.calculate(&CalculationContext::new()).unwrap(), 14.0);
/// assert_eq!(eq.to_string(), "2 + 3 * 4");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    root: Part,
}

impl Equation {
    /// Parses `source` with the default number format and parse settings.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse(source: &str) -> ParseResult<Self> {
        Self::parse_with(source, &NumberFormat::default(), &ParseSettings::default())
    }

    /// Parses `source` with an explicit number format and parse settings.
    ///
    /// # Parameters
    /// - `source`: Equation text.
    /// - `format`: Decimal separator used by number literals.
    /// - `settings`: Registered functions and parser switches.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first problem found.
    ///
    /// ## Example
    /// ```
    /// use equation::{
    ///     Equation,
    ///     error::ParseError,
    ///     interpreter::settings::{NumberFormat, ParseSettings},
    /// };
    ///
    /// let format = NumberFormat::new(',');
    /// let eq = Equation::parse_with("1,5 * 2", &format, &ParseSettings::default()).unwrap();
    /// assert_eq!(eq.calculate_default().unwrap(), 3.0);
    ///
    /// let strict = ParseSettings::default().with_implicit_multiplication(false);
    /// let err = Equation::parse_with("2x", &NumberFormat::default(), &strict).unwrap_err();
    /// assert!(matches!(err, ParseError::NoRootOperation { .. }));
    /// ```
    pub fn parse_with(source: &str,
                      format: &NumberFormat,
                      settings: &ParseSettings)
                      -> ParseResult<Self> {
        let tokens = Self::tokenize(source, format)?;
        let equation = Self::from_tokens(tokens, settings)?;
        debug!(source, "parsed equation");
        Ok(equation)
    }

    /// Tokenizes `source` without parsing it.
    ///
    /// # Errors
    /// Returns `UnknownCharacter` or `InvalidNumber` on malformed input.
    pub fn tokenize(source: &str, format: &NumberFormat) -> ParseResult<Vec<Spanned>> {
        tokenize(source, format)
    }

    /// Parses an already tokenized equation.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn from_tokens(tokens: Vec<Spanned>, settings: &ParseSettings) -> ParseResult<Self> {
        Ok(Self { root: parse_tokens(tokens, settings)? })
    }

    /// Calculates the equation against `ctx`.
    ///
    /// # Errors
    /// Returns an [`ExecutionError`](crate::error::ExecutionError) if a
    /// variable is unbound or a function rejects its arguments.
    ///
    /// ## Example
    /// ```
    /// use equation::{
    ///     Equation,
    ///     error::ExecutionError,
    ///     interpreter::evaluator::core::CalculationContext,
    /// };
    ///
    /// let eq = Equation::parse("2x").unwrap();
    ///
    /// let ctx = CalculationContext::new().with_variable("x", 5.0);
    /// assert_eq!(eq.calculate(&ctx).unwrap(), 10.0);
    ///
    /// let err = eq.calculate(&CalculationContext::new()).unwrap_err();
    /// assert_eq!(err, ExecutionError::UndefinedVariable { name: "x".to_string() });
    /// ```
    pub fn calculate(&self, ctx: &CalculationContext) -> EvalResult<f64> {
        let value = ctx.eval(&self.root)?;
        debug!(value, "calculated equation");
        Ok(value)
    }

    /// Calculates the equation with no variables and angles in degrees.
    ///
    /// # Errors
    /// Returns an [`ExecutionError`](crate::error::ExecutionError) if the
    /// equation references a variable or a function rejects its arguments.
    pub fn calculate_default(&self) -> EvalResult<f64> {
        self.calculate(&CalculationContext::default())
    }

    /// Writes the equation back as text.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        self.root.render(options)
    }

    /// Returns the root of the parsed tree.
    #[must_use]
    pub const fn root(&self) -> &Part {
        &self.root
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.root, f)
    }
}
