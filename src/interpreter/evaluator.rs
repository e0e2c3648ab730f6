/// Core evaluation logic and context management.
///
/// Contains the evaluation entry point, the runtime context with its overflow
/// policy, and literal evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `-` and `*` under the configured overflow policy.
pub mod binary;

/// Keyword evaluation.
///
/// Implements the unary keywords; currently only the `simplify` pass-through.
pub mod unary;
