use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure that aborts the processing of a single formula.
pub enum SolveError {
    /// The token sequence did not form a complete tree.
    Parse(ParseError),
    /// The tree could not be evaluated.
    Runtime(RuntimeError),
}

impl SolveError {
    /// Byte offset within the line where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Parse(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for SolveError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
