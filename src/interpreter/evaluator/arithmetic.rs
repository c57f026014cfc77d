use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        lexer::{Token, TokenKind},
        value::Number,
    },
};

/// Applies a binary operator to two operands as `left <op> right`.
///
/// Integer operands stay integers when the exact result fits in an `i64`.
/// Mixed operands, overflowing results and inexact quotients are computed as
/// reals.
///
/// # Parameters
/// - `operator`: The operator token; its position is used for errors.
/// - `left`: The operand that was pushed first.
/// - `right`: The operand that was pushed last.
///
/// # Errors
/// - `DivisionByZero` if `operator` is `/` and `right` is zero.
/// - `MalformedExpression` if `operator` is not a binary operator.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     evaluator::arithmetic::apply,
///     lexer::{Token, TokenKind},
///     value::Number,
/// };
///
/// let minus = Token::new(TokenKind::Sub, "-", 0);
/// let result = apply(&minus, Number::Integer(10), Number::Integer(3)).unwrap();
/// assert_eq!(result, Number::Integer(7));
///
/// let slash = Token::new(TokenKind::Div, "/", 0);
/// let result = apply(&slash, Number::Integer(7), Number::Integer(2)).unwrap();
/// assert_eq!(result, Number::Real(3.5));
/// ```
pub fn apply(operator: &Token, left: Number, right: Number) -> EvalResult<Number> {
    match operator.kind() {
        TokenKind::Add => Ok(integer_or_real(left, right, i64::checked_add, |l, r| l + r)),
        TokenKind::Sub => Ok(integer_or_real(left, right, i64::checked_sub, |l, r| l - r)),
        TokenKind::Mul => Ok(integer_or_real(left, right, i64::checked_mul, |l, r| l * r)),
        TokenKind::Div => divide(left, right, operator.position()),
        TokenKind::Pow => Ok(power(left, right)),
        TokenKind::Literal | TokenKind::ParenOpen | TokenKind::ParenClose => {
            Err(EvaluationError::MalformedExpression { details: format!("'{operator}' is not an operator") })
        },
    }
}

fn integer_or_real(left: Number,
                   right: Number,
                   integer_op: fn(i64, i64) -> Option<i64>,
                   real_op: fn(f64, f64) -> f64)
                   -> Number {
    if let (Number::Integer(l), Number::Integer(r)) = (left, right)
       && let Some(result) = integer_op(l, r)
    {
        return Number::Integer(result);
    }
    Number::Real(real_op(left.as_real(), right.as_real()))
}

fn divide(left: Number, right: Number, position: usize) -> EvalResult<Number> {
    if right.is_zero() {
        return Err(EvaluationError::DivisionByZero { position });
    }

    if let (Number::Integer(l), Number::Integer(r)) = (left, right)
       && l.checked_rem(r) == Some(0)
       && let Some(quotient) = l.checked_div(r)
    {
        return Ok(Number::Integer(quotient));
    }
    Ok(Number::Real(left.as_real() / right.as_real()))
}

fn power(base: Number, exponent: Number) -> Number {
    if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
       && let Ok(e) = u32::try_from(e)
       && let Some(result) = b.checked_pow(e)
    {
        return Number::Integer(result);
    }
    Number::Real(base.as_real().powf(exponent.as_real()))
}
