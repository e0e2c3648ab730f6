#[derive(Debug, Clone, PartialEq)]
/// Represents an invalid generator configuration.
pub enum GeneratorError {
    /// The literal range contains no values.
    EmptyLiteralRange {
        /// Configured lower bound.
        min: i64,
        /// Configured upper bound.
        max: i64,
    },
    /// The nesting probability is not in `[0, 1]`.
    InvalidNestingProbability {
        /// The configured probability.
        probability: f64,
    },
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLiteralRange { min, max } => {
                write!(f, "Literal range {min}..={max} is empty.")
            },
            Self::InvalidNestingProbability { probability } => write!(f,
                                                                      "Nesting probability {probability} must lie between 0 and 1."),
        }
    }
}

impl std::error::Error for GeneratorError {}
