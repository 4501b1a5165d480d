#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing or parsing an
/// equation.
///
/// Every variant carries the character offset (not byte offset) in the source
/// string where the problem was detected.
pub enum ParseError {
    /// Found a character that does not start any token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the source.
        position:  usize,
    },
    /// A number literal contained more than one decimal separator, or consisted
    /// of a separator alone.
    InvalidNumber {
        /// Character offset in the source.
        position: usize,
    },
    /// There was nothing to parse.
    EmptyExpression {
        /// Character offset in the source.
        position: usize,
    },
    /// A function argument between two commas (or a comma and a parenthesis)
    /// was empty.
    EmptyArgument {
        /// Character offset in the source.
        position: usize,
    },
    /// A pair of parentheses enclosed nothing.
    EmptyBlock {
        /// Character offset in the source.
        position: usize,
    },
    /// The argument list of a function call was never closed.
    UnclosedFunctionList {
        /// Name of the function.
        name:     String,
        /// Character offset of the function name.
        position: usize,
    },
    /// An opening parenthesis `(` was never closed.
    UnclosedBlock {
        /// Character offset of the opening parenthesis.
        position: usize,
    },
    /// A closing parenthesis `)` had no matching opening parenthesis.
    UnmatchedCloseParen {
        /// Character offset of the closing parenthesis.
        position: usize,
    },
    /// No function with this name and argument count is registered.
    UnknownFunction {
        /// Name of the function.
        name:     String,
        /// Number of arguments supplied.
        arity:    usize,
        /// Character offset of the function name.
        position: usize,
    },
    /// The operators could not be arranged into a single tree.
    NoRootOperation {
        /// Character offset of the token where resolution failed.
        position: usize,
    },
    /// A comma appeared outside of a function argument list.
    UnexpectedComma {
        /// Character offset of the comma.
        position: usize,
    },
    /// Parentheses or function calls were nested deeper than allowed.
    TooDeeplyNested {
        /// The nesting depth that was reached.
        depth:    usize,
        /// Character offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character offset at which the error was detected.
    ///
    /// # Example
    /// ```
    /// use equation::error::ParseError;
    ///
    /// let err = ParseError::UnclosedBlock { position: 4 };
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. }
            | Self::InvalidNumber { position }
            | Self::EmptyExpression { position }
            | Self::EmptyArgument { position }
            | Self::EmptyBlock { position }
            | Self::UnclosedFunctionList { position, .. }
            | Self::UnclosedBlock { position }
            | Self::UnmatchedCloseParen { position }
            | Self::UnknownFunction { position, .. }
            | Self::NoRootOperation { position }
            | Self::UnexpectedComma { position }
            | Self::TooDeeplyNested { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Error at char {position}: Unknown character '{character}'.")
            },
            Self::InvalidNumber { position } => {
                write!(f, "Error at char {position}: Invalid number.")
            },
            Self::EmptyExpression { position } => {
                write!(f, "Error at char {position}: Expression is empty.")
            },
            Self::EmptyArgument { position } => {
                write!(f, "Error at char {position}: Argument can't be empty.")
            },
            Self::EmptyBlock { position } => {
                write!(f, "Error at char {position}: Block can't be empty.")
            },
            Self::UnclosedFunctionList { name, position } => write!(f,
                                                                    "Error at char {position}: Unclosed parameter list of function '{name}'."),
            Self::UnclosedBlock { position } => {
                write!(f, "Error at char {position}: Unclosed parenthesis.")
            },
            Self::UnmatchedCloseParen { position } => write!(f,
                                                             "Error at char {position}: Closing parenthesis without an opening parenthesis."),
            Self::UnknownFunction { name, arity, position } => write!(f,
                                                                      "Error at char {position}: Function '{name}' with {arity} parameter(s) isn't defined."),
            Self::NoRootOperation { position } => write!(f,
                                                         "Error at char {position}: Failed to find root operation."),
            Self::UnexpectedComma { position } => write!(f,
                                                         "Error at char {position}: Comma outside of a function argument list."),
            Self::TooDeeplyNested { depth, position } => write!(f,
                                                                "Error at char {position}: Nesting depth {depth} exceeds the limit."),
        }
    }
}

impl std::error::Error for ParseError {}
