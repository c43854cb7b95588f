//! Error types for the quiz core

use crate::question::Book;
use thiserror::Error;

/// Main error type for the quiz core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No question data for book: {0}")]
    NoDataForBook(Book),

    #[error("Malformed record at position {position}: {reason}")]
    MalformedRecord { position: usize, reason: String },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("No questions available for the current selection")]
    NoQuestionsAvailable,

    #[error("Answer index {index} out of range for {options} options")]
    AnswerOutOfRange { index: usize, options: usize },

    #[error("Unknown book: {0}")]
    UnknownBook(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Deserialization(err.to_string())
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::Io(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<QuizError> for pyo3::PyErr {
    fn from(err: QuizError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        let msg = err.to_string();
        match err {
            QuizError::NoDataForBook(_)
            | QuizError::UnknownBook(_)
            | QuizError::UnknownDifficulty(_) => PyKeyError::new_err(msg),
            QuizError::MalformedRecord { .. }
            | QuizError::InvalidQuestion(_)
            | QuizError::Deserialization(_)
            | QuizError::AnswerOutOfRange { .. }
            | QuizError::InvalidConfig(_) => PyValueError::new_err(msg),
            QuizError::Io(_)
            | QuizError::InvalidTransition { .. }
            | QuizError::NoQuestionsAvailable => PyRuntimeError::new_err(msg),
        }
    }
}

/// Result type alias for the quiz core
pub type Result<T> = std::result::Result<T, QuizError>;
