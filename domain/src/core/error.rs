//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The index to follow through a shuffle does not name an element.
    ///
    /// This is a caller bug, not a recoverable runtime condition.
    #[error("Tracked index {index} is out of range for {len} item(s)")]
    TrackedIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },

    #[error("Invalid exam {id}: {reason}")]
    InvalidExam { id: String, reason: String },

    #[error("Selection {selected} is out of range for question {question_id} ({choices} choices)")]
    SelectionOutOfRange {
        question_id: String,
        selected: usize,
        choices: usize,
    },

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),
}

impl DomainError {
    pub(crate) fn invalid_question(id: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidQuestion {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by a bad index from the caller
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            DomainError::TrackedIndexOutOfRange { .. } | DomainError::SelectionOutOfRange { .. }
        )
    }
}
