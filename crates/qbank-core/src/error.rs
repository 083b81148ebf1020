//! Record edit error types.
//!
//! Lookups and edits against a missing id are not errors; they return `None`
//! or an unchanged copy. The only failures are bad option positions.

use thiserror::Error;

/// Errors that can occur when editing question records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// A replace targeted an option slot past the end of the list.
    #[error("option index {index} out of bounds for question {question_id} ({len} options)")]
    OptionIndexOutOfBounds {
        question_id: u32,
        index: usize,
        len: usize,
    },

    /// A legacy integer index that is neither `-1` nor a valid position.
    #[error("invalid option index {0}, expected -1 (append) or a position >= 0")]
    InvalidOptionIndex(i64),
}

impl QuestionError {
    /// Returns the question id the error refers to, if any.
    pub fn question_id(&self) -> Option<u32> {
        match self {
            QuestionError::OptionIndexOutOfBounds { question_id, .. } => Some(*question_id),
            QuestionError::InvalidOptionIndex(_) => None,
        }
    }
}
