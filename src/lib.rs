//! # smtcalc
//!
//! smtcalc evaluates the integer-arithmetic subset of SMT-LIB written in its
//! Lisp-style prefix notation, such as `(simplify (+ 1 (* 2 3)))`, and prints
//! results the way SMT solvers do. A random formula generator is included for
//! self-testing.

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
    error::SolveError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::parse},
};

/// Defines the syntax tree of a formula.
///
/// This module declares the `SyntaxNode` enum: numeric leaves, keyword
/// applications with one operand and operator applications with two. The tree
/// is built by the parser and read by the evaluator.
pub mod ast;
/// Provides error types for parsing, evaluation and generation.
///
/// Every error carries the byte offset of the token that caused it, where
/// there is one.
///
/// # Responsibilities
/// - Defines error enums for each failure mode (parser, evaluator, generator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing, parsing, evaluating, formatting and generating.
///
/// # Responsibilities
/// - Exposes every phase of the pipeline as its own module.
/// - Keeps phases independent so each can be tested on its own.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// The outcome of one non-blank line of a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// One-based line number within the source.
    pub line:   usize,
    /// The value of the formula, or why it could not be computed.
    pub result: Result<i64, SolveError>,
}

/// Tokenizes, parses and evaluates one formula.
///
/// # Returns
/// - `Ok(Some(value))` if the line holds a formula.
/// - `Ok(None)` if the line holds no tokens at all (blank, or only characters
///   the lexer drops).
///
/// # Errors
/// Returns a `SolveError` if the tokens do not form a complete tree or the
/// tree cannot be evaluated.
///
/// # Examples
/// ```
/// use smtcalc::{interpreter::evaluator::core::Context, solve_line};
///
/// let context = Context::new();
/// assert_eq!(solve_line("(simplify (+ 1 (* 2 3)))", &context).unwrap(), Some(7));
/// assert_eq!(solve_line("(simplify -5)", &context).unwrap(), Some(-5));
/// assert_eq!(solve_line("   ", &context).unwrap(), None);
/// assert!(solve_line("(simplify (+ 1))", &context).is_err());
/// ```
pub fn solve_line(line: &str, context: &Context) -> Result<Option<i64>, SolveError> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }

    let tree = parse(&tokens, line.len())?;
    let value = context.eval(&tree)?;
    tracing::debug!(tokens = tokens.len(), nodes = tree.size(), value, "solved formula");

    Ok(Some(value))
}

/// Solves every line of `source` independently.
///
/// Blank lines produce no outcome. A failure on one line is recorded in its
/// outcome and does not affect any other line.
///
/// # Examples
/// ```
/// use smtcalc::{interpreter::evaluator::core::Context, solve_source};
///
/// let source = "(simplify (- 5 3))\n\n(simplify (foo 1))\n(simplify (* 4 5))\n";
/// let outcomes = solve_source(source, &Context::new());
///
/// assert_eq!(outcomes.len(), 3);
/// assert_eq!(outcomes[0].result, Ok(2));
/// assert_eq!(outcomes[1].line, 3);
/// assert!(outcomes[1].result.is_err());
/// assert_eq!(outcomes[2].result, Ok(20));
/// ```
#[must_use]
pub fn solve_source(source: &str, context: &Context) -> Vec<LineOutcome> {
    source.lines()
          .enumerate()
          .filter_map(|(index, line)| {
              let result = solve_line(line, context).transpose()?;
              Some(LineOutcome { line: index + 1,
                                 result })
          })
          .collect()
}
