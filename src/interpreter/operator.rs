use crate::interpreter::lexer::TokenKind;

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Static properties of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// The token kind this entry describes.
    pub kind:          TokenKind,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// How equal-precedence chains group.
    pub associativity: Associativity,
    /// Number of operands consumed.
    pub arity:         usize,
}

/// The operator table. Parentheses are not operators and never appear here.
pub static OPERATORS: [OperatorInfo; 5] =
    [OperatorInfo { kind:          TokenKind::Pow,
                    precedence:    4,
                    associativity: Associativity::Right,
                    arity:         2, },
     OperatorInfo { kind:          TokenKind::Mul,
                    precedence:    3,
                    associativity: Associativity::Left,
                    arity:         2, },
     OperatorInfo { kind:          TokenKind::Div,
                    precedence:    3,
                    associativity: Associativity::Left,
                    arity:         2, },
     OperatorInfo { kind:          TokenKind::Add,
                    precedence:    2,
                    associativity: Associativity::Left,
                    arity:         2, },
     OperatorInfo { kind:          TokenKind::Sub,
                    precedence:    2,
                    associativity: Associativity::Left,
                    arity:         2, }];

/// Looks up the operator table entry for a token kind.
///
/// Returns `None` for literals and parentheses.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::TokenKind,
///     operator::{Associativity, lookup},
/// };
///
/// let pow = lookup(TokenKind::Pow).unwrap();
/// assert_eq!(pow.precedence, 4);
/// assert_eq!(pow.associativity, Associativity::Right);
///
/// assert!(lookup(TokenKind::ParenOpen).is_none());
/// ```
#[must_use]
pub fn lookup(kind: TokenKind) -> Option<&'static OperatorInfo> {
    OPERATORS.iter().find(|info| info.kind == kind)
}

impl OperatorInfo {
    /// Decides whether an incoming operator must first pop `top` off the
    /// operator stack.
    ///
    /// Left-associative operators pop a top of equal or higher precedence;
    /// right-associative operators only pop a strictly higher one.
    #[must_use]
    pub fn yields_to(&self, top: &Self) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= top.precedence,
            Associativity::Right => self.precedence < top.precedence,
        }
    }
}
