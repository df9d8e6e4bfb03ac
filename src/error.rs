//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure modes at the engine's boundaries: configuration loading,
//! event recording, employee lookup, and export. The report computation
//! itself is infallible.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
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

    /// No employee with the given identifier is known.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A clock event could not be recorded.
    #[error("Invalid clock event: {message}")]
    InvalidEvent {
        /// A description of what made the event invalid.
        message: String,
    },

    /// Reports could not be written in the export format.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::ExportError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
