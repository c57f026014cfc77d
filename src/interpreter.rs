/// The lexer module tokenizes source expressions.
///
/// The lexer reads the raw expression text and produces a flat sequence of
/// tokens: operand literals, the five operators and parentheses. It is the
/// first stage of the pipeline.
///
/// # Responsibilities
/// - Splits the input on whitespace and operator symbols.
/// - Records the byte offset of every token for error reporting.
/// - Reports characters that match no token rule.
pub mod lexer;
/// Operator metadata.
///
/// A read-only table of precedence, associativity and arity for every binary
/// operator, shared by the converter and the evaluator.
pub mod operator;
/// The converter module reorders infix tokens into postfix order.
///
/// # Responsibilities
/// - Implements the shunting-yard algorithm.
/// - Applies precedence and associativity from the operator table.
/// - Matches parentheses and reports unbalanced ones.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Parses literals into numbers.
/// - Applies operators with an operand stack.
/// - Reports division by zero and malformed sequences.
pub mod evaluator;
/// The value module defines the numeric type produced by evaluation.
///
/// Numbers are either exact 64 bit integers or double precision reals, with
/// promotion from the former to the latter when needed.
pub mod value;
