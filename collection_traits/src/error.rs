use miette::Diagnostic;
use thiserror::Error;

/// Mutating operations a collection may refuse
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Add,
    Remove,
    Clear,
    CursorRemove,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CollectionError {
    /// The collection does not support this category of mutation at all
    #[error("operation `{0}` is not supported by this collection")]
    Unsupported(Operation),
    #[error("value is not of the element type `{expected}`")]
    TypeMismatch { expected: &'static str },
    #[error("absent values are not permitted in this collection")]
    NullRejected,
    #[error("illegal value: {0}")]
    IllegalValue(String),
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// Element at `index` could not be stored into a buffer of `buffer` elements
    #[error("element at index {index} cannot be stored in a buffer of `{buffer}`")]
    ArrayStoreMismatch { buffer: &'static str, index: usize },
}

impl CollectionError {
    pub fn unsupported(operation: Operation) -> Self {
        Self::Unsupported(operation)
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
