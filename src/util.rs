/// Numeric conversion helpers.
///
/// This module turns literal text into machine integers without silent
/// truncation and renders magnitudes of negative values without overflowing.
pub mod num;
