use crate::{
    ast::{BinaryOperator, Part, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            resolve::{ParseOperation, Resolution},
        },
        token::{Spanned, Token, TokenKind},
    },
};

/// Builds the tree described by a [`Resolution`].
///
/// Starting at the root, every operation is turned into a [`Part`] whose
/// children are built from its operand tokens. Each token is consumed
/// exactly once.
///
/// The height of the tree is counted while it grows, including the height of
/// blocks and calls parsed earlier, so a long operator chain fails here
/// instead of producing a tree too deep to calculate or print.
///
/// # Parameters
/// - `tokens`: The token sequence that was resolved.
/// - `resolution`: Root and operand assignment produced by
///   [`resolve`](crate::interpreter::parser::resolve::resolve).
/// - `max_height`: Largest allowed height of the resulting tree.
///
/// # Returns
/// The root [`Part`].
///
/// # Errors
/// - `NoRootOperation` if the resolution does not describe a tree over
///   `tokens`.
/// - `TooDeeplyNested` if the tree would be higher than `max_height`.
pub fn build(tokens: Vec<Spanned>,
             resolution: &Resolution,
             max_height: usize)
             -> ParseResult<Part> {
    let mut builder = Builder { slots: tokens.into_iter().map(Some).collect(),
                                resolution,
                                max_height };
    builder.build_at(resolution.root, 1)
}

struct Builder<'a> {
    slots:      Vec<Option<Spanned>>,
    resolution: &'a Resolution,
    max_height: usize,
}

impl Builder<'_> {
    /// Builds the part for the token at `index`, placed `level` levels below
    /// the top of this tree.
    fn build_at(&mut self, index: usize, level: usize) -> ParseResult<Part> {
        let Some((token, position)) = self.slots.get_mut(index).and_then(Option::take) else {
            return Err(ParseError::NoRootOperation { position: 0 });
        };

        let part = match token {
            Token::Number(value) => Part::Number(value),
            Token::Identifier(name) => Part::Variable(name),
            Token::Function(call) => call,
            Token::Block(inner) => Part::block(inner),
            operator => {
                self.check_height(level, position)?;
                let resolution = self.resolution;
                let Some(operation) = resolution.operations.get(&index) else {
                    return Err(ParseError::NoRootOperation { position });
                };
                return self.build_operation(operator.kind(), operation, position, level);
            },
        };

        self.check_height(level + part.height() - 1, position)?;
        Ok(part)
    }

    fn check_height(&self, height: usize, position: usize) -> ParseResult<()> {
        if height > self.max_height {
            return Err(ParseError::TooDeeplyNested { depth: height,
                                                     position });
        }
        Ok(())
    }

    fn build_operation(&mut self,
                       kind: TokenKind,
                       operation: &ParseOperation,
                       position: usize,
                       level: usize)
                       -> ParseResult<Part> {
        match (operation.is_binary, operation.operands.as_slice()) {
            (false, &[operand]) => {
                let op = match kind {
                    TokenKind::Plus => UnaryOperator::Identity,
                    TokenKind::Minus => UnaryOperator::Negate,
                    _ => return Err(ParseError::NoRootOperation { position }),
                };
                Ok(Part::unary(op, self.build_at(operand, level + 1)?))
            },
            (true, &[left, right]) => {
                let op = match kind {
                    TokenKind::Plus => BinaryOperator::Add,
                    TokenKind::Minus => BinaryOperator::Sub,
                    TokenKind::Star => BinaryOperator::Mul,
                    TokenKind::Slash => BinaryOperator::Div,
                    TokenKind::Percent => BinaryOperator::Mod,
                    TokenKind::Caret => BinaryOperator::Pow,
                    _ => return Err(ParseError::NoRootOperation { position }),
                };
                let left = self.build_at(left, level + 1)?;
                let right = self.build_at(right, level + 1)?;
                Ok(Part::binary(op, left, right))
            },
            _ => Err(ParseError::NoRootOperation { position }),
        }
    }
}
