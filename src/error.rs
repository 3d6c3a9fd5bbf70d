use crate::types::{Axis, Letter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum J16tError {
    #[error("Letter '{letter}' is not valid for question {index} (axis {axis})")]
    InvalidAxisLetter {
        index: usize,
        letter: Letter,
        axis: Axis,
    },

    #[error("Ledger incomplete: {answered} of {total} questions answered")]
    IncompleteLedger { answered: usize, total: usize },

    #[error("Question index {index} out of range (ledger holds {len})")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("Answer count mismatch: expected {expected}, got {actual}")]
    LedgerLengthMismatch { expected: usize, actual: usize },

    #[error("Cannot {action} while in stage '{from}'")]
    InvalidTransition { from: &'static str, action: &'static str },

    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Content Validation Error: {0}")]
    Validation(String),
}

pub type J16tResult<T> = Result<T, J16tError>;
