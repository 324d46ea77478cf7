use thiserror::Error;

/// Canonical result for every cursor and terminal operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor or operator argument failed a shape/range check.
    #[error("Invalid parameter: {0}")]
    InvalidArgument(String),

    #[error("Parameter value out of range: {0}")]
    OutOfRange(String),

    /// `current()` was read without a preceding successful `advance()`,
    /// or after the cursor reached its end.
    #[error("Tried to read the current element on an invalid cursor position")]
    InvalidPosition,

    #[error("Sequence contains no elements")]
    EmptySequence,

    #[error("No item matched the predicate or sequence was empty")]
    NoMatch,

    #[error("Multiple items in the sequence matched the predicate.")]
    MultipleMatches,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(parameter: impl Into<String>) -> Self {
        Error::InvalidArgument(parameter.into())
    }

    pub fn out_of_range(parameter: impl Into<String>) -> Self {
        Error::OutOfRange(parameter.into())
    }
}
