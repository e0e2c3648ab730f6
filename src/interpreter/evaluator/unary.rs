use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::Token,
    },
};

/// The only keyword with a meaning.
pub const SIMPLIFY: &str = "simplify";

impl Context {
    /// Applies a keyword to the already evaluated operand.
    ///
    /// `simplify` returns its operand unchanged; it is a wrapper carried over
    /// from the solver notation, not an optimizer.
    ///
    /// # Errors
    /// Returns `UnsupportedOperator` for any other keyword.
    ///
    /// # Example
    /// ```
    /// use smtcalc::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::{Token, TokenKind},
    /// };
    ///
    /// let simplify = Token::new(TokenKind::Keyword, "simplify", 1);
    /// assert_eq!(Context::eval_keyword(&simplify, -5).unwrap(), -5);
    ///
    /// let assert = Token::new(TokenKind::Keyword, "assert", 1);
    /// assert!(Context::eval_keyword(&assert, 1).is_err());
    /// ```
    pub fn eval_keyword(token: &Token<'_>, operand: i64) -> EvalResult<i64> {
        match token.text {
            SIMPLIFY => Ok(operand),
            other => Err(RuntimeError::UnsupportedOperator { operator: other.to_string(),
                                                             offset:   token.offset, }),
        }
    }
}
