/// Parsing errors.
///
/// Defines the error types that can occur while building the syntax tree from
/// a token sequence. Lexical anomalies never surface here; the tokenizer drops
/// unknown characters instead.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating a syntax tree: unsupported
/// operators, malformed numeric literals and (in checked mode) overflow.
pub mod runtime_error;
/// Per-line errors.
///
/// Wraps parse and runtime errors so a whole formula can be solved with a
/// single `?`.
pub mod solve_error;
/// Generator configuration errors.
pub mod generator_error;

pub use generator_error::GeneratorError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use solve_error::SolveError;
