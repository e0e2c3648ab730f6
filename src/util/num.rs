use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Parses the text of a numeric literal as an `i64`.
///
/// The text may carry a leading `-`. Values outside the `i64` range are
/// rejected rather than truncated.
///
/// ## Errors
/// Returns `RuntimeError::InvalidLiteral` if the text is not a decimal
/// integer that fits in an `i64`.
///
/// ## Parameters
/// - `text`: The literal as written.
/// - `offset`: Byte offset of the literal, for error reporting.
///
/// ## Example
/// ```
/// use smtcalc::{error::RuntimeError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("-42", 0).unwrap(), -42);
/// assert_eq!(parse_literal("-9223372036854775808", 0).unwrap(), i64::MIN);
///
/// let err = parse_literal("9223372036854775808", 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidLiteral { offset: 3, .. }));
/// assert!(parse_literal("-", 0).is_err());
/// ```
pub fn parse_literal(text: &str, offset: usize) -> EvalResult<i64> {
    text.parse().map_err(|_| {
                     RuntimeError::InvalidLiteral { literal: text.to_string(),
                                                    offset }
                 })
}

/// Returns the magnitude of a value as a `u64`.
///
/// Unlike `i64::abs`, this is defined for `i64::MIN`.
///
/// ## Example
/// ```
/// use smtcalc::util::num::magnitude;
///
/// assert_eq!(magnitude(-7), 7);
/// assert_eq!(magnitude(i64::MIN), 9_223_372_036_854_775_808);
/// ```
#[must_use]
pub const fn magnitude(value: i64) -> u64 {
    value.unsigned_abs()
}
