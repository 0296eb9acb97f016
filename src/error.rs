//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! running a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every failure is a deterministic configuration or input-domain violation
/// detected before any calculation proceeds, so nothing is ever partially
/// computed.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "gross_salary".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid field 'gross_salary': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration was parsed but breaks one of its invariants.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// An input value is malformed or out of its domain.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The name of the offending input field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date range whose start falls after its end.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },
}

impl EngineError {
    /// Builds a [`EngineError::Validation`] for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error was caused by caller input rather than configuration.
    ///
    /// An [`EngineError::InvalidRange`] is a specialised validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::Validation { .. } | EngineError::InvalidRange { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "brackets are not contiguous".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration: brackets are not contiguous"
        );
    }

    #[test]
    fn test_validation_helper_builds_variant() {
        let error = EngineError::validation("dependents_count", "cannot be negative");
        assert_eq!(
            error,
            EngineError::Validation {
                field: "dependents_count".to_string(),
                message: "cannot be negative".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_range_displays_dates() {
        let error = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2024-07-01 is after 2024-06-30"
        );
    }

    #[test]
    fn test_invalid_range_is_a_validation_error() {
        let error = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        };
        assert!(error.is_validation());
        assert!(EngineError::validation("x", "y").is_validation());
    }

    #[test]
    fn test_config_errors_are_not_validation_errors() {
        let error = EngineError::ConfigNotFound {
            path: "/test".to_string(),
        };
        assert!(!error.is_validation());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_validation() -> EngineResult<()> {
            Err(EngineError::validation("better_salary", "must be greater than zero"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_validation()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
