use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::lexer::{Token, TokenKind},
};

/// The binary operators an expression tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps an operator token kind to its tree operator.
    ///
    /// Returns `None` for literals and parentheses.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Pow => Some(Self::Pow),
            TokenKind::Literal | TokenKind::ParenOpen | TokenKind::ParenClose => None,
        }
    }

    /// The symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// An expression tree folded from a postfix sequence.
///
/// The tree is only used to show how an expression was grouped; evaluation
/// works on the postfix sequence directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An operand, kept as written.
    Literal {
        /// Source text of the literal.
        text:     String,
        /// Byte offset in the source expression.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source expression.
        position: usize,
    },
}

impl Expr {
    /// Folds a postfix token sequence into a tree.
    ///
    /// Uses the same operand discipline as the evaluator: each operator takes
    /// the two most recent subtrees, the later one on the right.
    ///
    /// # Errors
    /// Returns `EvaluationError::MalformedExpression` if an operator lacks
    /// operands, if the sequence does not fold into exactly one tree, or if it
    /// contains a parenthesis.
    ///
    /// # Example
    /// ```
    /// use shunt::{ast::Expr, to_postfix};
    ///
    /// let tree = Expr::from_postfix(&to_postfix("2 ^ 3 ^ 2").unwrap()).unwrap();
    /// assert_eq!(tree.to_string(), "(2 ^ (3 ^ 2))");
    /// ```
    pub fn from_postfix(postfix: &[Token]) -> EvalResult<Self> {
        let mut stack: Vec<Self> = Vec::new();

        for token in postfix {
            if token.kind() == TokenKind::Literal {
                stack.push(Self::Literal { text:     token.text().to_string(),
                                           position: token.position(), });
                continue;
            }

            let Some(op) = BinaryOperator::from_kind(token.kind()) else {
                return Err(malformed(format!("parenthesis '{token}' at position {} in postfix input",
                                             token.position())));
            };
            let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                return Err(malformed(format!("operator '{token}' at position {} is missing an operand",
                                             token.position())));
            };
            stack.push(Self::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        position: token.position() });
        }

        let count = stack.len();
        match stack.pop() {
            Some(tree) if count == 1 => Ok(tree),
            None => Err(malformed("no value to return".to_string())),
            Some(_) => Err(malformed(format!("{count} values are not joined by an operator"))),
        }
    }

    /// Gets the source position of the node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }
}

const fn malformed(details: String) -> EvaluationError {
    EvaluationError::MalformedExpression { details }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { text, .. } => write!(f, "{text}"),
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "({left} {} {right})", op.symbol())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_postfix;

    fn tree(input: &str) -> Expr {
        Expr::from_postfix(&to_postfix(input).unwrap()).unwrap()
    }

    #[test]
    fn grouping_follows_precedence_and_associativity() {
        assert_eq!(tree("1 + 2 * 3").to_string(), "(1 + (2 * 3))");
        assert_eq!(tree("10 - 3 - 2").to_string(), "((10 - 3) - 2)");
        assert_eq!(tree("2 ^ 3 ^ 2").to_string(), "(2 ^ (3 ^ 2))");
        assert_eq!(tree("(1 + 2) * 3").to_string(), "((1 + 2) * 3)");
        assert_eq!(tree("7").to_string(), "7");
    }

    #[test]
    fn nodes_keep_positions() {
        let expr = tree("4 / 2");

        assert_eq!(expr.position(), 2);
        let Expr::BinaryOp { left, op, right, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert_eq!(op, BinaryOperator::Div);
        assert_eq!(left.position(), 0);
        assert_eq!(right.position(), 4);
    }

    #[test]
    fn incomplete_sequences_are_malformed() {
        for input in ["+", "1 2", "1 +"] {
            let result = Expr::from_postfix(&to_postfix(input).unwrap());
            assert!(matches!(result, Err(EvaluationError::MalformedExpression { .. })),
                    "{input}");
        }
        assert!(Expr::from_postfix(&[]).is_err());
    }
}
