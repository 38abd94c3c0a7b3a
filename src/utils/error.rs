use crate::domain::model::CheckCase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Expected {case}, but got {actual}")]
    AssertionMismatch { case: CheckCase, actual: i64 },

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalcError {
    /// Line shown on stderr when a run fails.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::AssertionMismatch { .. } => format!("Test failed: {}", self),
            CalcError::DivisionByZero => self.to_string(),
            CalcError::IoError(e) => format!("Could not write test report: {}", e),
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
