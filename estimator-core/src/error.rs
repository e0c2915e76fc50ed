//! Error types for estimates and report loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for estimate processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Snapshot file not found (-1)
    FileNotFound = -1,
    /// Snapshot could not be decoded (-3)
    ParseError = -3,
    /// Missing or non-positive request input (E100)
    Validation = 100,
    /// Artwork does not fit the material (E101)
    Fit = 101,
    /// Material not found in catalog (E200)
    Lookup = 200,
}

/// Main error type for the estimator.
///
/// `Validation`, `Fit` and `Lookup` are soft failures: estimators carry them
/// as warnings next to a zeroed breakdown instead of returning them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EstimateError {
    #[error("Invalid request: {message}")]
    Validation { message: String },

    #[error("Artwork {art_width} x {art_height} does not fit material '{material}' ({width} x {length})")]
    Fit {
        material: String,
        art_width: f64,
        art_height: f64,
        width: f64,
        length: f64,
    },

    #[error("Material not found: '{name}'")]
    Lookup { name: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl EstimateError {
    /// Build a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        EstimateError::Validation {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EstimateError::Validation { .. } => ErrorCode::Validation,
            EstimateError::Fit { .. } => ErrorCode::Fit,
            EstimateError::Lookup { .. } => ErrorCode::Lookup,
            EstimateError::FileNotFound { .. } => ErrorCode::FileNotFound,
            EstimateError::InvalidSnapshot { .. } => ErrorCode::ParseError,
            EstimateError::Json(_) => ErrorCode::ParseError,
            EstimateError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether an estimator reports this as a warning rather than an error.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            EstimateError::Validation { .. } | EstimateError::Fit { .. } | EstimateError::Lookup { .. }
        )
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::Json(err.to_string())
    }
}

impl From<std::io::Error> for EstimateError {
    fn from(err: std::io::Error) -> Self {
        EstimateError::Io(err.to_string())
    }
}

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EstimateError::validation("x").code_value(), 100);
        assert_eq!(
            EstimateError::Lookup {
                name: "Vinyl".into()
            }
            .code(),
            ErrorCode::Lookup
        );
        assert_eq!(EstimateError::Json("bad".into()).code_value(), -3);
    }

    #[test]
    fn test_is_soft() {
        assert!(EstimateError::validation("quantity").is_soft());
        assert!(!EstimateError::Io("denied".into()).is_soft());
    }

    #[test]
    fn test_fit_message() {
        let err = EstimateError::Fit {
            material: "Banner 60in".into(),
            art_width: 70.25,
            art_height: 70.25,
            width: 60.0,
            length: 150.0,
        };
        assert!(err.to_string().contains("does not fit material 'Banner 60in'"));
    }
}
