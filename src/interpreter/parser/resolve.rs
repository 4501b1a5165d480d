use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Spanned, Token},
    },
};

/// An operator token taking part in precedence resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperation {
    /// Index of the operator token in the sequence.
    pub token_index: usize,
    /// `false` for prefix `+` and `-`.
    pub is_binary:   bool,
    /// Claiming priority; higher binds tighter.
    pub priority:    u32,
    /// Token indices of the operands: `[right]` for unary operations,
    /// `[left, right]` for binary ones.
    pub operands:    Vec<usize>,
}

/// Result of resolving a flat token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Index of the token at the top of the tree.
    pub root:       usize,
    /// Every operation, keyed by its token index.
    pub operations: HashMap<usize, ParseOperation>,
}

/// Returns the claiming priority of an operator token.
///
/// Prefix operators use [`UnaryOperator::PRIORITY`], which outranks every
/// binary operator.
#[must_use]
pub const fn operator_priority(token: &Token, is_binary: bool) -> u32 {
    if !is_binary {
        return UnaryOperator::PRIORITY;
    }
    match token {
        Token::Plus => BinaryOperator::Add.priority(),
        Token::Minus => BinaryOperator::Sub.priority(),
        Token::Star => BinaryOperator::Mul.priority(),
        Token::Slash => BinaryOperator::Div.priority(),
        Token::Percent => BinaryOperator::Mod.priority(),
        Token::Caret => BinaryOperator::Pow.priority(),
        _ => 0,
    }
}

/// Resolves operator precedence over a flat, fully extracted token sequence.
///
/// The sequence is scanned once from left to right. `+` and `-` are prefix
/// operators at the start of the sequence or after a token that does not
/// produce a value; every other operator is binary. Each operation then
/// claims its operands: the right neighbour, and for binary operations also
/// the left neighbour.
///
/// The right neighbour is always free when claimed. The left neighbour may
/// already belong to an earlier operation. In that case the claim walks up
/// the owners as long as they bind at least as tightly as the claimant, takes
/// the topmost of them as its operand and steps into its place below the
/// first weaker owner. Equal priorities keep the earlier operation below the
/// later one, so every binary operator is left-associative.
///
/// Exactly one token stays unclaimed: the root.
///
/// # Parameters
/// - `tokens`: Tokens without parentheses, as left by the extraction passes.
///
/// # Returns
/// The root index and all operations with their resolved operands.
///
/// # Errors
/// - `UnexpectedComma` for a comma outside a function argument list.
/// - `NoRootOperation` if an operator lacks an operand or the tokens do not
///   form a single tree.
///
/// # Example
/// ```
/// use equation::interpreter::{parser::resolve::resolve, token::Token};
///
/// // 1 + 2 * 3
/// let tokens = vec![(Token::Number(1.0), 0),
///                   (Token::Plus, 1),
///                   (Token::Number(2.0), 2),
///                   (Token::Star, 3),
///                   (Token::Number(3.0), 4)];
///
/// let resolution = resolve(&tokens).unwrap();
/// assert_eq!(resolution.root, 1);
/// assert_eq!(resolution.operations[&1].operands, vec![0, 3]);
/// assert_eq!(resolution.operations[&3].operands, vec![2, 4]);
/// ```
pub fn resolve(tokens: &[Spanned]) -> ParseResult<Resolution> {
    let mut owners: Vec<Option<usize>> = vec![None; tokens.len()];
    let mut operations: HashMap<usize, ParseOperation> = HashMap::new();

    for (index, (token, position)) in tokens.iter().enumerate() {
        if token.is_value() {
            continue;
        }
        if matches!(token, Token::Comma) {
            return Err(ParseError::UnexpectedComma { position: *position });
        }

        let follows_value = index > 0 && tokens[index - 1].0.is_value();
        let is_binary = match token {
            Token::Plus | Token::Minus => follows_value,
            _ => true,
        };

        if !token.is_operator() || index + 1 >= tokens.len() || (is_binary && !follows_value) {
            return Err(ParseError::NoRootOperation { position: *position });
        }

        let priority = operator_priority(token, is_binary);
        let mut operands = Vec::with_capacity(2);

        if is_binary {
            operands.push(claim_left(index, priority, &mut owners, &mut operations));
        }

        owners[index + 1] = Some(index);
        operands.push(index + 1);

        operations.insert(index,
                          ParseOperation { token_index: index,
                                           is_binary,
                                           priority,
                                           operands });
    }

    let mut unclaimed = owners.iter()
                              .enumerate()
                              .filter(|(_, owner)| owner.is_none())
                              .map(|(index, _)| index);

    match (unclaimed.next(), unclaimed.next()) {
        (Some(root), None) => {
            trace!(root, operations = operations.len(), "resolved precedence");
            Ok(Resolution { root, operations })
        },
        (_, Some(extra)) => Err(ParseError::NoRootOperation { position: tokens[extra].1 }),
        (None, None) => {
            Err(ParseError::NoRootOperation { position: tokens.first().map_or(0, |t| t.1) })
        },
    }
}

/// Claims the left operand for the binary operation at `claimant`.
///
/// Returns the token index that became the operand.
fn claim_left(claimant: usize,
              priority: u32,
              owners: &mut [Option<usize>],
              operations: &mut HashMap<usize, ParseOperation>)
              -> usize {
    let mut operand = claimant - 1;

    while let Some(owner) = owners[operand] {
        if operations.get(&owner).is_none_or(|op| op.priority < priority) {
            break;
        }
        operand = owner;
    }

    if let Some(owner) = owners[operand] {
        if let Some(op) = operations.get_mut(&owner) {
            for slot in &mut op.operands {
                if *slot == operand {
                    *slot = claimant;
                }
            }
        }
        owners[claimant] = Some(owner);
    }

    owners[operand] = Some(claimant);
    operand
}
