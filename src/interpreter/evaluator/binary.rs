use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, OverflowMode},
        lexer::Token,
    },
};

impl Context {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// `left` is the first operand, so `(- a b)` computes `a - b`. Overflow is
    /// handled according to the context's [`OverflowMode`].
    ///
    /// # Errors
    /// - `UnsupportedOperator` if the token is not `+`, `-` or `*`.
    /// - `Overflow` in checked mode when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use smtcalc::interpreter::{
    ///     evaluator::core::{Context, OverflowMode},
    ///     lexer::{Token, TokenKind},
    /// };
    ///
    /// let minus = Token::new(TokenKind::Operator, "-", 1);
    /// assert_eq!(Context::new().eval_binary_op(&minus, 5, 3).unwrap(), 2);
    ///
    /// let times = Token::new(TokenKind::Operator, "*", 1);
    /// assert_eq!(Context::new().eval_binary_op(&times, i64::MAX, 2).unwrap(), -2);
    /// assert!(Context::with_overflow(OverflowMode::Checked).eval_binary_op(&times, i64::MAX, 2)
    ///                                                      .is_err());
    /// ```
    pub fn eval_binary_op(&self, token: &Token<'_>, left: i64, right: i64) -> EvalResult<i64> {
        let (wrapped, overflowed) = match token.text {
            "+" => left.overflowing_add(right),
            "-" => left.overflowing_sub(right),
            "*" => left.overflowing_mul(right),
            other => {
                return Err(RuntimeError::UnsupportedOperator { operator: other.to_string(),
                                                               offset:   token.offset, });
            },
        };

        if overflowed && self.overflow == OverflowMode::Checked {
            return Err(RuntimeError::Overflow { offset: token.offset });
        }

        Ok(wrapped)
    }
}
