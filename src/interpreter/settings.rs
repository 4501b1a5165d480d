use crate::interpreter::evaluator::function::core::{FunctionDefinition, FunctionImpl,
                                                    builtin_definitions};

/// Default limit for nested parentheses and function calls.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default limit for the height of a parsed tree.
///
/// Every binary operator in a chain such as `1 + 1 + 1` adds a level, as does
/// every prefix operator, parenthesis and function call.
pub const DEFAULT_MAX_HEIGHT: usize = 512;

/// Describes how numbers are written in equation text.
///
/// Used by the tokenizer to read number literals and by the printer to write
/// them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Character separating the integral and fractional part of a number.
    pub decimal_separator: char,
}

impl NumberFormat {
    /// Creates a number format with the given decimal separator.
    #[must_use]
    pub const fn new(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new('.')
    }
}

/// Settings that control how an equation is parsed.
///
/// The default settings enable implicit multiplication and register every
/// built-in function (`abs`, `min`, `max`, `clamp`, `ceiling`, `round`,
/// `floor`, `sin`, `cos`, `tan`).
///
/// ## Example
/// ```
/// use equation::{
///     Equation,
///     interpreter::{evaluator::core::CalculationContext, settings::{NumberFormat, ParseSettings}},
/// };
///
/// fn twice(args: &[equation::ast::Part],
///          ctx: &CalculationContext)
///          -> Result<f64, equation::error::ExecutionError> {
///     Ok(2.0 * ctx.eval(&args[0])?)
/// }
///
/// let settings = ParseSettings::default().with_function("twice", 1, twice);
/// let eq = Equation::parse_with("twice(4) + 1", &NumberFormat::default(), &settings).unwrap();
/// assert_eq!(eq.calculate_default().unwrap(), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct ParseSettings {
    /// If `true`, `2x` and `3(2 + 2)` are read as `2 * x` and `3 * (2 + 2)`.
    pub implicit_multiplication: bool,
    /// Functions that may be called from the equation.
    pub functions:               Vec<FunctionDefinition>,
    /// Maximum nesting depth of parentheses and function calls.
    pub max_depth:               usize,
    /// Maximum height of the parsed tree.
    pub max_height:              usize,
}

impl ParseSettings {
    /// Creates settings with no functions registered at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { implicit_multiplication: true,
               functions:               Vec::new(),
               max_depth:               DEFAULT_MAX_DEPTH,
               max_height:              DEFAULT_MAX_HEIGHT, }
    }

    /// Enables or disables implicit multiplication.
    #[must_use]
    pub fn with_implicit_multiplication(mut self, enabled: bool) -> Self {
        self.implicit_multiplication = enabled;
        self
    }

    /// Registers an additional function.
    ///
    /// Functions are matched by exact name and argument count, so the same
    /// name may be registered once per arity.
    #[must_use]
    pub fn with_function(mut self, name: &str, arity: usize, function: FunctionImpl) -> Self {
        self.functions.push(FunctionDefinition::new(name, arity, function));
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum tree height.
    ///
    /// Calculating and printing walk the tree recursively, so this bounds
    /// their stack use as well.
    #[must_use]
    pub fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Finds the function registered under `name` with exactly `arity`
    /// parameters.
    #[must_use]
    pub fn function(&self, name: &str, arity: usize) -> Option<&FunctionDefinition> {
        self.functions
            .iter()
            .find(|def| def.name == name && def.arity == arity)
    }
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self { functions: builtin_definitions(),
               ..Self::empty() }
    }
}

/// Options that control how an equation is printed.
///
/// With `,` as the decimal separator, an argument comma directly after a
/// number would continue that number, so the printer writes a space in front
/// of it: `max(0.5, 1)` prints as `max(0,5 ,1)` with a spacing of 0 and as
/// `max(0,5 , 1)` with a spacing of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces around binary operators and after argument commas.
    pub spacing:       usize,
    /// Format used to write number literals.
    pub number_format: NumberFormat,
}

impl RenderOptions {
    /// Creates render options with the given spacing and the default number
    /// format.
    #[must_use]
    pub fn new(spacing: usize) -> Self {
        Self { spacing,
               number_format: NumberFormat::default() }
    }

    /// Sets the number format.
    #[must_use]
    pub const fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Returns the separator string placed around operators.
    #[must_use]
    pub fn separator(&self) -> String {
        " ".repeat(self.spacing)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(1)
    }
}
