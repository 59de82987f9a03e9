//! Error types for the salon payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The payroll arithmetic itself is pure and infallible over validated
//! inputs; errors arise at configuration loading and request validation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use salon_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
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

    /// No employee with the given identifier exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: String,
    },

    /// The requested year/month combination is out of range.
    #[error("Invalid period: {message}")]
    InvalidPeriod {
        /// A description of what made the period invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
