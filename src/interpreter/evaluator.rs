use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        lexer::{Token, TokenKind},
        operator::lookup,
        value::Number,
    },
};

/// Operator application.
///
/// Implements `+ - * / ^` over integer and real operands, including promotion
/// and the division-by-zero check.
pub mod arithmetic;

/// Evaluates a postfix token sequence.
///
/// Literals are parsed and pushed onto an operand stack. Each operator pops
/// its operands, the last pushed being the right-hand side, and pushes the
/// result. Evaluation stops at the first fault.
///
/// # Parameters
/// - `postfix`: Tokens in reverse Polish order, as produced by
///   [`convert`](crate::interpreter::converter::convert).
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `InvalidLiteral` if a literal is not a number.
/// - `DivisionByZero` if a divisor is zero.
/// - `MalformedExpression` if an operator lacks operands, if the stack does not
///   end with exactly one value, or if a parenthesis appears in the input.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     converter::convert, evaluator::evaluate, lexer::tokenize, value::Number,
/// };
///
/// let postfix = convert(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(evaluate(&postfix).unwrap(), Number::Integer(512));
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<Number> {
    let mut operands: Vec<Number> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token.kind() {
            TokenKind::Literal => operands.push(Number::parse(token)?),
            TokenKind::ParenOpen | TokenKind::ParenClose => {
                return Err(EvaluationError::MalformedExpression {
                    details: format!("parenthesis '{token}' at position {} in postfix input",
                                     token.position()),
                });
            },
            kind => {
                let info = lookup(kind).ok_or_else(|| EvaluationError::MalformedExpression {
                                            details: format!("'{token}' is not an operator"),
                                        })?;
                let Some(start) = operands.len().checked_sub(info.arity) else {
                    return Err(EvaluationError::MalformedExpression {
                        details: format!("operator '{token}' at position {} is missing an operand",
                                         token.position()),
                    });
                };
                let arguments = operands.split_off(start);
                let [left, right] = arguments[..] else {
                    return Err(EvaluationError::MalformedExpression {
                        details: format!("operator '{token}' takes {} operands", info.arity),
                    });
                };

                let result = arithmetic::apply(token, left, right)?;
                log::trace!("{left} {token} {right} = {result}");
                operands.push(result);
            },
        }
    }

    match operands[..] {
        [result] => Ok(result),
        [] => Err(EvaluationError::MalformedExpression { details: "no value to return".to_string() }),
        _ => Err(EvaluationError::MalformedExpression {
            details: format!("{} values are not joined by an operator", operands.len()),
        }),
    }
}
