/// Result type used throughout the engine.
///
/// Every pipeline stage returns either a value of type `T` or the
/// `EvaluationError` that stopped it.
pub type EvalResult<T> = Result<T, EvaluationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while computing an expression.
pub enum EvaluationError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// A character could not be classified as a symbol, whitespace or part of
    /// a literal.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the expression.
        position:  usize,
    },
    /// A `)` was found with no matching `(` before it.
    UnmatchedCloseParen {
        /// Byte offset of the closing parenthesis.
        position: usize,
    },
    /// A `(` was never closed.
    UnmatchedOpenParen {
        /// Byte offset of the opening parenthesis.
        position: usize,
    },
    /// A literal does not parse as a number.
    InvalidLiteral {
        /// The literal text as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// The right-hand operand of `/` was zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The token sequence does not form a complete expression.
    MalformedExpression {
        /// What was wrong with the expression.
        details: String,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Error at position {position}: Invalid character '{character}'."),
            Self::UnmatchedCloseParen { position } => write!(f,
                                                             "Error at position {position}: Closing parenthesis ')' has no matching '('."),
            Self::UnmatchedOpenParen { position } => write!(f,
                                                            "Error at position {position}: Opening parenthesis '(' is never closed."),
            Self::InvalidLiteral { literal, position } => {
                write!(f, "Error at position {position}: Invalid literal '{literal}'.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::MalformedExpression { details } => {
                write!(f, "Error: Malformed expression: {details}.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
