//! # shunt
//!
//! shunt is an arithmetic expression engine written in Rust.
//! It tokenizes infix expressions built from numbers, `+ - * / ^` and
//! parentheses, reorders them into postfix with the shunting-yard algorithm,
//! and evaluates the postfix sequence on an operand stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::{
        converter::convert,
        evaluator::evaluate,
        lexer::{Token, join, tokenize},
        value::Number,
    },
};

/// Expression trees.
///
/// Folds a postfix sequence into a binary tree so the grouping chosen by the
/// converter can be displayed. Evaluation does not need it.
pub mod ast;
/// Provides the error type for every pipeline stage.
///
/// This module defines the errors that can be raised during tokenizing,
/// converting or evaluating an expression, together with the `EvalResult`
/// alias used throughout the crate.
///
/// # Responsibilities
/// - Enumerates every failure mode of the engine.
/// - Attaches source positions and details for user feedback.
/// - Implements `Display` and `std::error::Error`.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, conversion to postfix, evaluation and
/// the numeric value type.
///
/// # Responsibilities
/// - Coordinates the lexer, the converter and the evaluator.
/// - Holds the operator table they share.
pub mod interpreter;

/// Tokenizes an expression and converts it to postfix order.
///
/// # Errors
/// Returns `EvaluationError::EmptyExpression` if the expression holds no
/// tokens, and otherwise any error raised by the lexer or the converter.
///
/// # Example
/// ```
/// use shunt::{interpreter::lexer::join, to_postfix};
///
/// let postfix = to_postfix("2 + 3 * 4").unwrap();
/// assert_eq!(join(&postfix), "2 3 4 * +");
/// ```
pub fn to_postfix(expression: &str) -> EvalResult<Vec<Token>> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }
    log::debug!("tokens: {}", join(&tokens));

    let postfix = convert(&tokens)?;
    log::debug!("postfix: {}", join(&postfix));

    Ok(postfix)
}

/// Computes the value of an infix expression.
///
/// Each call is independent: all stacks are local to the call, and the only
/// shared data is the read-only operator table.
///
/// # Errors
/// Returns the first error raised by any stage: `EmptyExpression`,
/// `InvalidCharacter`, `UnmatchedCloseParen`, `UnmatchedOpenParen`,
/// `InvalidLiteral`, `DivisionByZero` or `MalformedExpression`.
///
/// # Examples
/// ```
/// use shunt::{compute, error::EvaluationError, interpreter::value::Number};
///
/// assert_eq!(compute("(2 + 3) * 4"), Ok(Number::Integer(20)));
/// assert_eq!(compute("7 / 2"), Ok(Number::Real(3.5)));
///
/// // Errors are returned, never printed.
/// assert_eq!(compute("5 / 0"), Err(EvaluationError::DivisionByZero { position: 2 }));
/// assert_eq!(compute(""), Err(EvaluationError::EmptyExpression));
/// ```
pub fn compute(expression: &str) -> Result<Number, EvaluationError> {
    let postfix = to_postfix(expression)?;
    let result = evaluate(&postfix)?;
    log::debug!("{expression} = {result}");

    Ok(result)
}
