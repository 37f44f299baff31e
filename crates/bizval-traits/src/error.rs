//! Error types for the bizval engine.
//!
//! The engine prefers silent, documented defaulting over errors. The variants
//! here cover the few hard failures: a required intake field that is missing
//! or cannot be coerced to a number, a malformed configuration, and the I/O
//! and JSON failures of callers that load intakes from disk.

use thiserror::Error;

/// The main error type for bizval operations.
#[derive(Debug, Error)]
pub enum BizvalError {
    /// A required intake field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A required intake field held a value that is not a number.
    #[error("Invalid value for field '{field}': {value}")]
    InvalidField {
        /// Canonical name of the offending field.
        field: String,
        /// The submitted value, rendered for display.
        value: String,
    },

    /// Engine configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error decoding or encoding JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading an intake or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl BizvalError {
    /// Returns true when the error is a validation failure of submitted data.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidField { .. })
    }
}

impl From<String> for BizvalError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for BizvalError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for bizval operations.
pub type Result<T> = std::result::Result<T, BizvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BizvalError::MissingField("revenue".to_string());
        assert_eq!(err.to_string(), "Missing required field: revenue");

        let err = BizvalError::InvalidField {
            field: "netProfit".to_string(),
            value: "\"lots\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'netProfit': \"lots\""
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(BizvalError::MissingField("revenue".into()).is_validation());
        assert!(
            BizvalError::InvalidField {
                field: "revenue".into(),
                value: "abc".into()
            }
            .is_validation()
        );
        assert!(!BizvalError::InvalidConfig("bad".into()).is_validation());
        assert!(!BizvalError::from("other").is_validation());
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: BizvalError = parse_err.into();
        assert!(matches!(err, BizvalError::Json(_)));
    }
}
