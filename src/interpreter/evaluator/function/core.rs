use crate::{
    ast::Part,
    error::ExecutionError,
    interpreter::evaluator::{
        core::{CalculationContext, EvalResult},
        function::{builtin, clamp, min_max},
    },
};

/// Signature of every callable function.
///
/// An implementation receives its arguments unevaluated together with the
/// calculation context and decides itself how to evaluate them.
pub type FunctionImpl = fn(&[Part], &CalculationContext) -> EvalResult<f64>;

/// A function that may be called from an equation.
///
/// Calls are bound to a definition while parsing, by exact name and argument
/// count.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    /// Name used to call the function.
    pub name:     String,
    /// Exact number of arguments.
    pub arity:    usize,
    /// The implementation.
    pub function: FunctionImpl,
}

impl FunctionDefinition {
    /// Creates a function definition.
    #[must_use]
    pub fn new(name: &str, arity: usize, function: FunctionImpl) -> Self {
        Self { name: name.to_string(),
               arity,
               function }
    }

    /// Creates a call of this function with the given arguments.
    ///
    /// ## Example
    /// ```
    /// use equation::{
    ///     ast::Part,
    ///     interpreter::evaluator::{core::CalculationContext, function::core::builtin_definitions},
    /// };
    ///
    /// let abs = builtin_definitions().into_iter().find(|d| d.name == "abs").unwrap();
    /// let call = abs.create_part(vec![Part::Number(-3.0)]);
    /// assert_eq!(CalculationContext::new().eval(&call).unwrap(), 3.0);
    /// ```
    #[must_use]
    pub fn create_part(&self, arguments: Vec<Part>) -> Part {
        Part::FunctionCall { name: self.name.clone(),
                             arguments,
                             function: self.function }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  FunctionImpl,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"     => { arity: 1, func: builtin::abs },
    "min"     => { arity: 2, func: |args, ctx| min_max::min_max("min", args, ctx) },
    "max"     => { arity: 2, func: |args, ctx| min_max::min_max("max", args, ctx) },
    "clamp"   => { arity: 3, func: clamp::clamp },
    "ceiling" => { arity: 1, func: builtin::ceiling },
    "round"   => { arity: 1, func: builtin::round },
    "floor"   => { arity: 1, func: builtin::floor },
    "sin"     => { arity: 1, func: builtin::sin },
    "cos"     => { arity: 1, func: builtin::cos },
    "tan"     => { arity: 1, func: builtin::tan },
}

/// Returns a definition for every built-in function.
///
/// ## Example
/// ```
/// use equation::interpreter::evaluator::function::core::builtin_definitions;
///
/// let defs = builtin_definitions();
/// assert!(defs.iter().any(|d| d.name == "clamp" && d.arity == 3));
/// ```
#[must_use]
pub fn builtin_definitions() -> Vec<FunctionDefinition> {
    BUILTIN_TABLE.iter()
                 .map(|def| FunctionDefinition::new(def.name, def.arity, def.func))
                 .collect()
}

/// Evaluates all arguments of a call that expects exactly `N` of them.
///
/// # Errors
/// - `InvalidArgument` if the number of arguments differs from `N`.
/// - Any error raised while evaluating an argument.
pub fn eval_arguments<const N: usize>(function: &str,
                                      args: &[Part],
                                      ctx: &CalculationContext)
                                      -> EvalResult<[f64; N]> {
    if args.len() != N {
        return Err(ExecutionError::InvalidArgument { function: function.to_string(),
                                                     details:  format!("expected {N} arguments, got {}",
                                                                       args.len()), });
    }

    let mut values = [0.0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = ctx.eval(arg)?;
    }
    Ok(values)
}
