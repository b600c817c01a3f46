//! Error types for the FinLife core engine

use thiserror::Error;

/// Main error type for the FinLife core engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinLifeError {
    #[error("Invalid transition: {operation} is not allowed while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("Unknown option '{option_id}' for decision '{decision_id}'")]
    UnknownOption {
        option_id: String,
        decision_id: String,
    },

    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for FinLifeError {
    fn from(err: serde_json::Error) -> Self {
        FinLifeError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<FinLifeError> for pyo3::PyErr {
    fn from(err: FinLifeError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        match err {
            FinLifeError::InvalidTransition { .. } => PyRuntimeError::new_err(err.to_string()),
            FinLifeError::UnknownOption { .. } => PyKeyError::new_err(err.to_string()),
            FinLifeError::InvalidCondition(_)
            | FinLifeError::InvalidCatalog(_)
            | FinLifeError::DeserializationError(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the FinLife core engine
pub type Result<T> = std::result::Result<T, FinLifeError>;
