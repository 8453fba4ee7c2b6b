//! Error types for typing-core.

use std::fmt;

use thiserror::Error;

/// Result type alias using TypingError.
pub type Result<T> = std::result::Result<T, TypingError>;

/// Axis of a bounds-checked lookup into a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Word,
    Player,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => f.write_str("word"),
            Self::Player => f.write_str("player"),
        }
    }
}

/// Precondition violations reported by scoring, autocorrect and match operations.
#[derive(Debug, Error, PartialEq)]
pub enum TypingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("{axis} index {index} out of range (len {len})")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
}
