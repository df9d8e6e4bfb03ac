//! Response types for the payroll engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("No employee with id '{}' is configured", id),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&id),
            },
            EngineError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee pay configuration contains invalid information",
                ),
            },
            EngineError::InvalidEvent { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!("Invalid clock event: {}", message)),
            },
            EngineError::ExportError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            },
        }
    }
}
