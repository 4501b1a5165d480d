use crate::interpreter::evaluator::function::core::FunctionImpl;

/// A node of a parsed equation.
///
/// `Part` is a closed set of variants: literals, variable references, calls to
/// registered functions, explicit parenthesized blocks and unary or binary
/// operations. Trees are immutable once built and are exclusively owned by
/// their [`Equation`](crate::equation::Equation).
#[derive(Debug, Clone)]
pub enum Part {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name, resolved at calculation time.
    Variable(String),
    /// Call of a function that was resolved while parsing.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, unevaluated.
        arguments: Vec<Self>,
        /// Implementation bound when the call was parsed.
        function:  FunctionImpl,
    },
    /// An explicit `( … )` group, kept so it can be printed again.
    Block(Box<Self>),
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand part.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Part {
    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use equation::ast::{BinaryOperator, Part};
    ///
    /// let sum = Part::binary(BinaryOperator::Add, Part::Number(1.0), Part::Number(2.0));
    /// assert_eq!(sum.to_string(), "1 + 2");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Wraps a part into an explicit block.
    #[must_use]
    pub fn block(inner: Self) -> Self {
        Self::Block(Box::new(inner))
    }

    /// Returns the number of levels of the tree rooted at this part.
    ///
    /// Walks the tree with an explicit stack, so it is safe on trees of any
    /// height.
    ///
    /// ## Example
    /// ```
    /// use equation::Equation;
    ///
    /// assert_eq!(Equation::parse("1").unwrap().root().height(), 1);
    /// assert_eq!(Equation::parse("1 + 2 * 3").unwrap().root().height(), 3);
    /// assert_eq!(Equation::parse("abs((-x))").unwrap().root().height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1usize)];

        while let Some((part, level)) = pending.pop() {
            height = height.max(level);
            match part {
                Self::Number(_) | Self::Variable(_) => {},
                Self::FunctionCall { arguments, .. } => {
                    pending.extend(arguments.iter().map(|argument| (argument, level + 1)));
                },
                Self::Block(inner) | Self::UnaryOp { operand: inner, .. } => {
                    pending.push((inner.as_ref(), level + 1));
                },
                Self::BinaryOp { left, right, .. } => {
                    pending.push((left.as_ref(), level + 1));
                    pending.push((right.as_ref(), level + 1));
                },
            }
        }

        height
    }
}

// The bound implementation is ignored: two calls are the same call when they
// name the same function with the same arguments.
impl PartialEq for Part {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::FunctionCall { name: a, arguments: x, .. },
             Self::FunctionCall { name: b, arguments: y, .. }) => a == b && x == y,
            (Self::Block(a), Self::Block(b)) => a == b,
            (Self::UnaryOp { op: a, operand: x }, Self::UnaryOp { op: b, operand: y }) => {
                a == b && x == y
            },
            (Self::BinaryOp { op: a,
                              left: l1,
                              right: r1, },
             Self::BinaryOp { op: b,
                              left: l2,
                              right: r2, }) => a == b && l1 == l2 && r1 == r2,
            _ => false,
        }
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), returns the operand unchanged.
    Identity,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl UnaryOperator {
    /// Claiming priority of every unary operator.
    ///
    /// Large enough to outrank any binary operator competing for the same
    /// operand.
    pub const PRIORITY: u32 = 1 << 8;

    /// Returns the symbol used to print the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Identity => "+",
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the claiming priority of the operator; higher binds tighter.
    ///
    /// ## Example
    /// ```
    /// use equation::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.priority() > BinaryOperator::Mul.priority());
    /// assert_eq!(BinaryOperator::Mul.priority(), BinaryOperator::Mod.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u32 {
        match self {
            Self::Add | Self::Sub => 4,
            Self::Mul | Self::Div | Self::Mod => 5,
            Self::Pow => 6,
        }
    }

    /// Returns the symbol used to print the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
