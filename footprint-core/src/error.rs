use thiserror::Error;

/// Coarse classification of a [`FootprintError`].
///
/// Callers that only need to branch on the failure class (and not the message)
/// match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input metadata cannot be sized (unknown type, dynamic or zero dimension).
    InvalidArgument,
    /// The size does not fit in `usize`.
    Overflow,
}

/// Error type for footprint computations.
#[derive(Error, Debug, PartialEq, Eq, Clone)] // PartialEq for easier testing
pub enum FootprintError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Arithmetic overflow during {operation}")]
    Overflow { operation: String },
}

impl FootprintError {
    /// Returns the kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FootprintError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FootprintError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Returns the human-readable message, without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            FootprintError::InvalidArgument(message) => message,
            FootprintError::Overflow { operation } => operation,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        FootprintError::InvalidArgument(message.into())
    }

    pub(crate) fn overflow(operation: impl Into<String>) -> Self {
        FootprintError::Overflow {
            operation: operation.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FootprintError>;
