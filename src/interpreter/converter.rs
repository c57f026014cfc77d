use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        lexer::{Token, TokenKind},
        operator::lookup,
    },
};

/// Converts an infix token sequence into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm. Literals go straight to the output
/// queue; operators wait on the operator stack until an operator that binds
/// less tightly arrives. Parentheses are consumed and never appear in the
/// output.
///
/// For equal precedence a left-associative operator pops the stack top, while
/// `^` (right-associative) does not, so `2 ^ 3 ^ 2` becomes `2 3 2 ^ ^`.
///
/// # Parameters
/// - `tokens`: The infix tokens, in source order.
///
/// # Returns
/// The same literals and operators in postfix order.
///
/// # Errors
/// - `UnmatchedCloseParen` if a `)` has no `(` on the stack.
/// - `UnmatchedOpenParen` if a `(` is still open at the end of input.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     converter::convert,
///     lexer::{join, tokenize},
/// };
///
/// let postfix = convert(&tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(join(&postfix), "2 3 + 4 *");
/// ```
pub fn convert(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    let mut operator_stack: Vec<&Token> = Vec::new();
    let mut output_queue: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Literal => output_queue.push(token.clone()),
            TokenKind::ParenOpen => operator_stack.push(token),
            TokenKind::ParenClose => loop {
                match operator_stack.pop() {
                    Some(top) if top.kind() == TokenKind::ParenOpen => break,
                    Some(top) => output_queue.push(top.clone()),
                    None => {
                        return Err(EvaluationError::UnmatchedCloseParen { position:
                                                                              token.position() });
                    },
                }
            },
            kind => {
                let incoming = lookup(kind).ok_or_else(|| {
                                               EvaluationError::MalformedExpression {
                                                   details: format!("'{token}' is not an operator"),
                                               }
                                           })?;

                while let Some(top) = operator_stack.last()
                      && let Some(top_info) = lookup(top.kind())
                      && incoming.yields_to(top_info)
                {
                    log::trace!("'{token}' pops '{top}'");
                    output_queue.push((*top).clone());
                    operator_stack.pop();
                }
                operator_stack.push(token);
            },
        }
    }

    while let Some(top) = operator_stack.pop() {
        if top.kind() == TokenKind::ParenOpen {
            return Err(EvaluationError::UnmatchedOpenParen { position: top.position() });
        }
        output_queue.push(top.clone());
    }

    Ok(output_queue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::{join, tokenize};

    fn postfix(input: &str) -> String {
        join(&convert(&tokenize(input).unwrap()).unwrap())
    }

    fn convert_err(input: &str) -> EvaluationError {
        convert(&tokenize(input).unwrap()).unwrap_err()
    }

    #[test]
    fn precedence_orders_operators() {
        assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
        assert_eq!(postfix("1 * 2 + 3"), "1 2 * 3 +");
        assert_eq!(postfix("2 * 3 ^ 2"), "2 3 2 ^ *");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(1 + 2) * 3"), "1 2 + 3 *");
        assert_eq!(postfix("(3 - 1) * 2"), "3 1 - 2 *");
        assert_eq!(postfix("((4))"), "4");
    }

    #[test]
    fn left_associative_operators_chain_left_to_right() {
        assert_eq!(postfix("10 - 3 - 2"), "10 3 - 2 -");
        assert_eq!(postfix("1 + 2 * 3 * 4"), "1 2 3 * 4 * +");
        assert_eq!(postfix("8 / 4 * 2"), "8 4 / 2 *");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(postfix("2 ^ 3 ^ 4"), "2 3 4 ^ ^");
        assert_eq!(postfix("(2 ^ 3) ^ 4"), "2 3 ^ 4 ^");
    }

    #[test]
    fn output_keeps_source_tokens() {
        let output = convert(&tokenize("7 - 5").unwrap()).unwrap();

        assert_eq!(output,
                   [Token::new(TokenKind::Literal, "7", 0),
                    Token::new(TokenKind::Literal, "5", 4),
                    Token::new(TokenKind::Sub, "-", 2)]);
    }

    #[test]
    fn postfix_length_matches_token_count_without_parentheses() {
        for input in ["1", "1 + 2", "1 - 2 * 3 ^ 4 / 5", "2 ^ 3 ^ 2 - 1", "+", "1 2 *"] {
            let tokens = tokenize(input).unwrap();
            assert_eq!(convert(&tokens).unwrap().len(), tokens.len(), "{input}");
        }
    }

    #[test]
    fn unmatched_parentheses_are_reported() {
        assert_eq!(convert_err("1 + 2)"), EvaluationError::UnmatchedCloseParen { position: 5 });
        assert_eq!(convert_err(")"), EvaluationError::UnmatchedCloseParen { position: 0 });
        assert_eq!(convert_err("(1 + 2"), EvaluationError::UnmatchedOpenParen { position: 0 });
        assert_eq!(convert_err("((1) + (2"), EvaluationError::UnmatchedOpenParen { position: 7 });
    }
}
