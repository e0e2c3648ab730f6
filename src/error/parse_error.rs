#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the syntax tree.
pub enum ParseError {
    /// Found a token that cannot start a node.
    UnexpectedToken {
        /// The text of the token encountered.
        token:  String,
        /// Byte offset of the token within the line.
        offset: usize,
    },
    /// The token sequence ended while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset just past the last character of the line.
        offset: usize,
    },
    /// Applications nest deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Byte offset of the first application past the limit.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset within the line where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::NestingTooDeep { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Unexpected token '{token}' at column {}.", offset + 1)
            },
            Self::UnexpectedEndOfInput { offset } => write!(f,
                                                            "Unexpected end of input at column {}: an operand is missing.",
                                                            offset + 1),
            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Nesting deeper than {limit} levels at column {}.",
                                                             offset + 1),
        }
    }
}

impl std::error::Error for ParseError {}
