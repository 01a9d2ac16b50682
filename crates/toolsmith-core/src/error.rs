//! Error types for toolsmith-core.

use thiserror::Error;

/// Result type alias for toolsmith-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the conversion and filesystem helpers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The value does not fit the target type.
    #[error("Value {value} is out of range for {target}")]
    Overflow {
        /// Rendered source value
        value: String,
        /// Target type name
        target: &'static str,
    },

    /// Text could not be parsed as the target type.
    #[error("Cannot parse {input:?} as {target}")]
    Format {
        /// Offending text
        input: String,
        /// Target type name
        target: &'static str,
    },

    /// No conversion exists between the two kinds of value.
    #[error("Cannot convert {from} to {target}")]
    InvalidCast {
        /// Source value kind
        from: &'static str,
        /// Target type name
        target: &'static str,
    },

    /// Text did not name any variant of an enum.
    #[error(
        "conversion failed because the input did not match any enum value of the given type"
    )]
    NoMatchingVariant {
        /// Offending text
        input: String,
        /// Enum type name
        type_name: &'static str,
    },

    /// An argument failed a precondition.
    #[error("{0}")]
    InvalidArgument(String),

    /// I/O error (directory creation)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an overflow error.
    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        Error::Overflow {
            value: value.to_string(),
            target,
        }
    }

    /// Creates a format error.
    pub fn format<S: Into<String>>(input: S, target: &'static str) -> Self {
        Error::Format {
            input: input.into(),
            target,
        }
    }

    /// Creates an invalid-cast error.
    pub fn invalid_cast(from: &'static str, target: &'static str) -> Self {
        Error::InvalidCast { from, target }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Returns whether this error came from a value conversion.
    pub fn is_conversion(&self) -> bool {
        match self {
            Error::Overflow { .. } => true,
            Error::Format { .. } => true,
            Error::InvalidCast { .. } => true,
            Error::NoMatchingVariant { .. } => true,
            Error::InvalidArgument(_) => false,
            Error::Io(_) => false,
            Error::Serialization(_) => false,
        }
    }
}
