/// Evaluation errors.
///
/// Defines every failure that can occur while tokenizing, converting or
/// evaluating an expression. Each variant carries the byte offset in the source
/// expression where the fault was detected, when there is one.
pub mod evaluation_error;

pub use evaluation_error::{EvalResult, EvaluationError};
