/// The evaluator module walks syntax trees and computes results.
///
/// The evaluator traverses the tree depth-first, applies the arithmetic
/// operators and the `simplify` keyword, and reports runtime errors such as
/// unsupported operators or malformed literals.
///
/// # Responsibilities
/// - Evaluates every node kind of the syntax tree.
/// - Applies the configured overflow policy.
/// - Reports runtime errors with the offset of the offending token.
pub mod evaluator;
/// The generator module produces random formulas for self-testing.
///
/// The generator is independent of the other phases: it writes text that the
/// lexer, parser and evaluator accept, drawing operators and literals from a
/// single owned random source.
pub mod generator;
/// The lexer module tokenizes one line of input.
///
/// The lexer reads the raw text of a formula and produces parentheses,
/// operators, keywords and numeric literals. It resolves whether `-` is the
/// subtraction operator or the sign of a literal by looking at the preceding
/// character.
///
/// # Responsibilities
/// - Converts a line into tokens carrying kind, text and offset.
/// - Skips whitespace and drops unrecognised characters silently.
pub mod lexer;
/// The output module renders results in solver notation.
pub mod output;
/// The parser module builds the syntax tree from tokens.
///
/// The parser walks the token sequence with one forward cursor. Parentheses
/// are transparent, so operator arity alone decides the shape of the tree.
///
/// # Responsibilities
/// - Converts tokens into a binary-shaped tree.
/// - Reports operands missing at the end of the token sequence.
pub mod parser;
