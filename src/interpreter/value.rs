use crate::{
    error::{EvalResult, EvaluationError},
    interpreter::lexer::Token,
};

/// A numeric value produced by evaluation.
///
/// Integer arithmetic is exact as long as it fits in an `i64`; anything else
/// (fractions, overflow, negative powers) is carried as a real number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Parses a literal token into a number.
    ///
    /// Integers are tried first, then finite reals. Spellings such as `inf` or
    /// `NaN` are rejected even though `f64` would accept them.
    ///
    /// # Errors
    /// Returns `EvaluationError::InvalidLiteral` if the text is not a number.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{
    ///     lexer::{Token, TokenKind},
    ///     value::Number,
    /// };
    ///
    /// let token = Token::new(TokenKind::Literal, "2.5", 0);
    /// assert_eq!(Number::parse(&token).unwrap(), Number::Real(2.5));
    ///
    /// let token = Token::new(TokenKind::Literal, "12abc", 0);
    /// assert!(Number::parse(&token).is_err());
    /// ```
    pub fn parse(token: &Token) -> EvalResult<Self> {
        let text = token.text();

        if let Ok(n) = text.parse::<i64>() {
            return Ok(Self::Integer(n));
        }

        match text.parse::<f64>() {
            Ok(r) if r.is_finite() => Ok(Self::Real(r)),
            _ => Err(EvaluationError::InvalidLiteral { literal:  text.to_string(),
                                                       position: token.position(), }),
        }
    }

    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision in the conversion.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is integer `0` or real `±0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::TokenKind;

    fn parse(text: &str) -> EvalResult<Number> {
        Number::parse(&Token::new(TokenKind::Literal, text, 3))
    }

    #[test]
    fn integers_are_preferred() {
        assert_eq!(parse("42").unwrap(), Number::Integer(42));
        assert_eq!(parse("007").unwrap(), Number::Integer(7));
    }

    #[test]
    fn reals_cover_decimal_forms() {
        assert_eq!(parse("3.5").unwrap(), Number::Real(3.5));
        assert_eq!(parse(".5").unwrap(), Number::Real(0.5));
        assert_eq!(parse("1e3").unwrap(), Number::Real(1000.0));
        assert_eq!(parse("99999999999999999999").unwrap(), Number::Real(1e20));
    }

    #[test]
    fn non_numbers_are_invalid_literals() {
        for text in ["abc", "1.2.3", "inf", "NaN", "1e"] {
            assert_eq!(parse(text).unwrap_err(),
                       EvaluationError::InvalidLiteral { literal:  text.to_string(),
                                                         position: 3, });
        }
    }

    #[test]
    fn zero_detection_covers_both_signs() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(0.0).is_zero());
        assert!(Number::Real(-0.0).is_zero());
        assert!(!Number::Real(1e-300).is_zero());
    }

    #[test]
    fn display_is_plain() {
        assert_eq!(Number::Integer(-12).to_string(), "-12");
        assert_eq!(Number::Real(3.5).to_string(), "3.5");
        assert_eq!(Number::Real(4.0).to_string(), "4");
    }
}
