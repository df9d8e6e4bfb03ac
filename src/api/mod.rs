//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for computing daily reports,
//! managing employees, recording and listing clock events, updating pay
//! configuration, and exporting.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClockRequest, PayUpdateRequest, ReportsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
