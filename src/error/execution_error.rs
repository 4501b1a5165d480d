#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while calculating a parsed equation.
pub enum ExecutionError {
    /// The equation referenced a variable the context does not define.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// A function received an argument outside its domain.
    InvalidArgument {
        /// The name of the function.
        function: String,
        /// Details about why the argument is invalid.
        details:  String,
    },
    /// A unit conversion was requested between units of different measures.
    IncompatibleUnit {
        /// Name of the unit that does not belong to the measure.
        unit:    String,
        /// Name of the measure performing the conversion.
        measure: String,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Variable '{name}' isn't defined."),
            Self::InvalidArgument { function, details } => {
                write!(f, "Invalid argument to '{function}': {details}.")
            },
            Self::IncompatibleUnit { unit, measure } => {
                write!(f, "Unit '{unit}' is not a unit of {measure}.")
            },
        }
    }
}

impl std::error::Error for ExecutionError {}
