//! Error types for text diff bindings.

use std::fmt;

/// Result type alias for binding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A text model operation the binding may call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read the model's current text.
    GetText,
    /// Insert text at a position.
    InsertText,
    /// Remove a span starting at a position.
    RemoveText,
}

impl Operation {
    /// Name of the trait method backing this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GetText => "get_text",
            Self::InsertText => "insert_text",
            Self::RemoveText => "remove_text",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for binding operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text model was asked to perform an operation it does not provide.
    MissingOperation(Operation),
}

impl Error {
    /// Shorthand for [`Error::MissingOperation`].
    #[must_use]
    pub fn missing(operation: Operation) -> Self {
        Self::MissingOperation(operation)
    }

    /// The operation this error is about.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::MissingOperation(op) => *op,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperation(op) => {
                write!(f, "text model does not implement `{op}()`")
            }
        }
    }
}

impl std::error::Error for Error {}
