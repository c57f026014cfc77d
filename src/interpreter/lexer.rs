use logos::Logos;

use crate::error::{EvalResult, EvaluationError};

/// The kind of a lexical token.
///
/// Every kind except `Literal` corresponds to exactly one single-character
/// symbol. Literals are maximal runs of characters that are neither symbols nor
/// whitespace; whether they form a valid number is decided by the evaluator.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    /// Operand literal tokens, such as `42`, `3.5` or `.5`.
    #[regex(r"[^()+\-*/\^ \t\n]+")]
    Literal,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `^`
    #[token("^")]
    Pow,
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
}

impl TokenKind {
    /// Returns the symbol this kind is spelled with, or `None` for literals.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Literal => None,
            Self::Add => Some('+'),
            Self::Sub => Some('-'),
            Self::Mul => Some('*'),
            Self::Div => Some('/'),
            Self::Pow => Some('^'),
            Self::ParenOpen => Some('('),
            Self::ParenClose => Some(')'),
        }
    }

    /// Returns `true` for the binary operators `+ - * / ^`.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow)
    }

    /// Returns `true` for `(` and `)`.
    #[must_use]
    pub const fn is_paren(self) -> bool {
        matches!(self, Self::ParenOpen | Self::ParenClose)
    }
}

/// A token produced by the lexer.
///
/// Tokens are immutable once created. `text` is the literal's source substring
/// or the operator's symbol, `position` the byte offset of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:     TokenKind,
    text:     String,
    position: usize,
}

impl Token {
    /// Creates a token of the given kind.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text of this token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of this token in the source expression.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Splits an expression into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. A pending literal is
/// always emitted before the symbol that terminates it, so the output keeps
/// source order.
///
/// # Errors
/// Returns `EvaluationError::InvalidCharacter` if a character matches no
/// token rule.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("12 * (3+4)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Literal,
///             TokenKind::Mul,
///             TokenKind::ParenOpen,
///             TokenKind::Literal,
///             TokenKind::Add,
///             TokenKind::Literal,
///             TokenKind::ParenClose]);
/// assert_eq!(tokens[0].text(), "12");
/// ```
pub fn tokenize(input: &str) -> EvalResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        let Ok(kind) = kind else {
            let character = lexer.slice().chars().next().unwrap_or_default();
            return Err(EvaluationError::InvalidCharacter { character, position });
        };
        tokens.push(Token::new(kind, lexer.slice(), position));
    }

    log::trace!("tokenized {} tokens from {input:?}", tokens.len());
    Ok(tokens)
}

/// Renders a token sequence as space separated text, e.g. `2 3 4 * +`.
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).unwrap().iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn whitespace_separates_without_truncating() {
        assert_eq!(texts("1 + 2"), ["1", "+", "2"]);
        assert_eq!(texts(" 1\t+\n  2 "), ["1", "+", "2"]);
        assert_eq!(texts("12 34"), ["12", "34"]);
    }

    #[test]
    fn literals_are_maximal_runs() {
        assert_eq!(texts("3.25*x1"), ["3.25", "*", "x1"]);
        assert_eq!(texts("1e-3"), ["1e", "-", "3"]);
        assert_eq!(texts("π^2"), ["π", "^", "2"]);
    }

    #[test]
    fn symbols_map_to_kinds() {
        let tokens = tokenize("()+-*/^").unwrap();
        let kinds: Vec<_> = tokens.iter().map(Token::kind).collect();

        assert_eq!(kinds,
                   [TokenKind::ParenOpen,
                    TokenKind::ParenClose,
                    TokenKind::Add,
                    TokenKind::Sub,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Pow]);
        for token in &tokens {
            assert_eq!(token.kind().symbol().map(String::from).as_deref(), Some(token.text()));
        }
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  10 /(2)").unwrap();
        let positions: Vec<_> = tokens.iter().map(Token::position).collect();

        assert_eq!(positions, [2, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n").unwrap().is_empty());
    }

    #[test]
    fn join_renders_texts() {
        assert_eq!(join(&tokenize("(1+ 22)").unwrap()), "( 1 + 22 )");
    }
}
