use std::fmt;

use crate::util::num::magnitude;

/// An evaluation result rendered the way SMT solvers print integers.
///
/// Non-negative values are printed in decimal. Negative values are printed as
/// the negation of their magnitude, `(- 7)`, rather than as `-7`.
///
/// # Example
/// ```
/// use smtcalc::interpreter::output::Numeral;
///
/// assert_eq!(Numeral(7).to_string(), "7");
/// assert_eq!(Numeral(-7).to_string(), "(- 7)");
/// assert_eq!(Numeral(i64::MIN).to_string(), "(- 9223372036854775808)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(pub i64);

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "(- {})", magnitude(self.0))
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Renders a result in solver notation.
#[must_use]
pub fn format_result(value: i64) -> String {
    Numeral(value).to_string()
}
