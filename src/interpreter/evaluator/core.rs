use crate::{ast::SyntaxNode, error::RuntimeError, util::num::parse_literal};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How arithmetic reacts when a result does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// Two's-complement wraparound, like native machine integers.
    #[default]
    Wrapping,
    /// Abort the formula with [`RuntimeError::Overflow`].
    Checked,
}

/// Stores the evaluation settings.
///
/// A `Context` holds no per-formula state, so one instance can be shared by
/// every line of an input, even across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    /// Overflow policy for `+`, `-` and `*`.
    pub overflow: OverflowMode,
}

impl Context {
    /// Creates a context with wrapping arithmetic.
    #[must_use]
    pub const fn new() -> Self {
        Self { overflow: OverflowMode::Wrapping }
    }

    /// Creates a context with the given overflow policy.
    #[must_use]
    pub const fn with_overflow(overflow: OverflowMode) -> Self {
        Self { overflow }
    }

    /// Evaluates a syntax tree and returns the integer it denotes.
    ///
    /// The traversal is depth-first and post-order: both operands of a binary
    /// node are evaluated left to right before the operator is applied.
    ///
    /// # Parameters
    /// - `node`: Root of the tree to evaluate.
    ///
    /// # Returns
    /// The value of the tree.
    ///
    /// # Errors
    /// - `InvalidLiteral` if a number token is not a valid `i64`.
    /// - `UnsupportedOperator` for keywords other than `simplify` or operators
    ///   other than `+`, `-` and `*`.
    /// - `Overflow` if the context uses [`OverflowMode::Checked`] and a result
    ///   does not fit.
    ///
    /// # Example
    /// ```
    /// use smtcalc::interpreter::{evaluator::core::Context, lexer::tokenize, parser::parse};
    ///
    /// let line = "(simplify (- (* 2 3) 10))";
    /// let tree = parse(&tokenize(line), line.len()).unwrap();
    /// assert_eq!(Context::new().eval(&tree).unwrap(), -4);
    /// ```
    pub fn eval(&self, node: &SyntaxNode<'_>) -> EvalResult<i64> {
        match node {
            SyntaxNode::Number { token } => parse_literal(token.text, token.offset),
            SyntaxNode::Unary { token, operand } => {
                let value = self.eval(operand)?;
                Self::eval_keyword(token, value)
            },
            SyntaxNode::Binary { token, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary_op(token, left, right)
            },
        }
    }
}
