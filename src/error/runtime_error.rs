#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An operator or keyword outside `+`, `-`, `*` and `simplify`.
    UnsupportedOperator {
        /// The operator text as written.
        operator: String,
        /// Byte offset of the operator within the line.
        offset:   usize,
    },
    /// A numeric literal could not be parsed as a 64-bit signed integer.
    InvalidLiteral {
        /// The literal text as written.
        literal: String,
        /// Byte offset of the literal within the line.
        offset:  usize,
    },
    /// Arithmetic overflowed while overflow checking was enabled.
    Overflow {
        /// Byte offset of the operator whose result overflowed.
        offset: usize,
    },
}

impl RuntimeError {
    /// Byte offset within the line where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnsupportedOperator { offset, .. }
            | Self::InvalidLiteral { offset, .. }
            | Self::Overflow { offset } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperator { operator, offset } => {
                write!(f, "Unsupported operator '{operator}' at column {}.", offset + 1)
            },
            Self::InvalidLiteral { literal, offset } => {
                write!(f, "Invalid integer literal '{literal}' at column {}.", offset + 1)
            },
            Self::Overflow { offset } => write!(f,
                                                "Integer overflow while computing the operation at column {}.",
                                                offset + 1),
        }
    }
}

impl std::error::Error for RuntimeError {}
