//! Error types for Ensenar operations.
//!
//! Provides structured error context for library consumers.

use std::fmt;

/// Main error type for Ensenar operations.
///
/// Provides detailed context about failures including malformed input,
/// invalid hyperparameters, empty datasets, and missing models.
///
/// # Examples
///
/// ```
/// use ensenar::error::EnsenarError;
///
/// let err = EnsenarError::InvalidLabel { value: 2 };
/// assert!(err.to_string().contains("Invalid label"));
/// ```
#[derive(Debug)]
pub enum EnsenarError {
    /// Malformed input (length mismatch, non-finite coordinate, etc.).
    Validation {
        /// Validation failure message
        message: String,
    },

    /// Label outside the binary set {0, 1}.
    InvalidLabel {
        /// Label value found
        value: usize,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Operation requires at least one data point.
    EmptyDataset {
        /// Operation that was attempted
        operation: String,
    },

    /// Prediction or boundary requested before a successful training run.
    NoModel,
}

impl fmt::Display for EnsenarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnsenarError::Validation { message } => {
                write!(f, "Validation failed: {message}")
            }
            EnsenarError::InvalidLabel { value } => {
                write!(f, "Invalid label: {value}, expected 0 or 1")
            }
            EnsenarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            EnsenarError::EmptyDataset { operation } => {
                write!(f, "Empty dataset: {operation} requires at least one point")
            }
            EnsenarError::NoModel => {
                write!(f, "No trained model available")
            }
        }
    }
}

impl std::error::Error for EnsenarError {}

impl From<&str> for EnsenarError {
    fn from(msg: &str) -> Self {
        EnsenarError::Validation {
            message: msg.to_string(),
        }
    }
}

impl From<String> for EnsenarError {
    fn from(message: String) -> Self {
        EnsenarError::Validation { message }
    }
}

impl EnsenarError {
    /// Create an invalid hyperparameter error with descriptive context.
    #[must_use]
    pub fn invalid_hyperparameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty dataset error naming the attempted operation.
    #[must_use]
    pub fn empty_dataset(operation: &str) -> Self {
        Self::EmptyDataset {
            operation: operation.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EnsenarError>;
