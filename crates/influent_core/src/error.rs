//! Error types for range profiles.

use thiserror::Error;

/// Errors raised when a field range or profile is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A bound is NaN or infinite
    #[error("Non-finite bound for field {field}: [{low}, {high}]")]
    NonFiniteBound {
        /// Field name
        field: &'static str,
        /// Lower bound as given
        low: f64,
        /// Upper bound as given
        high: f64,
    },

    /// The lower bound exceeds the upper bound
    #[error("Inverted range for field {field}: low {low} > high {high}")]
    InvertedRange {
        /// Field name
        field: &'static str,
        /// Lower bound as given
        low: f64,
        /// Upper bound as given
        high: f64,
    },

    /// No field carries the requested name
    #[error("Unknown influent field: {0}")]
    UnknownField(String),
}

/// Error raised when a requested batch size is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Batch size must be an integer, got {0:?}")]
pub struct ParseBatchSizeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProfileError::InvertedRange {
            field: "pH",
            low: 9.0,
            high: 6.0,
        };
        assert_eq!(err.to_string(), "Inverted range for field pH: low 9 > high 6");

        let err = ProfileError::UnknownField("salinity".to_string());
        assert!(err.to_string().contains("salinity"));

        let err = ParseBatchSizeError("ten".to_string());
        assert_eq!(err.to_string(), "Batch size must be an integer, got \"ten\"");
    }
}
