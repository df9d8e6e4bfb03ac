//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::cmp::Reverse;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_reports;
use crate::error::EngineError;
use crate::export::{to_export_rows, write_csv};
use crate::models::{ClockEvent, DailyReport, Employee, ReportBatch};

use super::request::{ClockRequest, PayUpdateRequest, ReportsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports", post(compute_reports_handler))
        .route("/events", get(list_events_handler))
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route("/employees/:id/events", get(employee_events_handler))
        .route("/employees/:id/reports", get(employee_reports_handler))
        .route("/employees/:id/clock", post(clock_handler))
        .route("/employees/:id/pay", put(update_pay_handler))
        .route("/employees/:id/export", get(export_handler))
        .with_state(state)
}

/// Handler for POST /reports.
///
/// Computes daily reports for the events in the request body. The events
/// carry their own rate snapshots; no stored state is read.
async fn compute_reports_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let batch = build_batch(state.compute_reports(&request.events));
    info!(
        correlation_id = %correlation_id,
        events_count = request.events.len(),
        reports_count = batch.reports.len(),
        total_estimated_pay = %batch.summary.total_estimated_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Report computation completed successfully"
    );

    json_response(StatusCode::OK, &batch)
}

/// Handler for GET /employees/:id/reports.
///
/// Computes daily reports from the stored events of one employee.
async fn employee_reports_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee report request"
    );

    if let Err(err) = state.directory().get(&employee_id) {
        return engine_error_response(err, correlation_id);
    }

    let events = state.events().list_events_for(&employee_id);
    let batch = build_batch(state.compute_reports(&events));
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        events_count = events.len(),
        reports_count = batch.reports.len(),
        "Employee reports computed"
    );

    json_response(StatusCode::OK, &batch)
}

/// Handler for GET /events.
///
/// Lists every stored clock event, newest first.
async fn list_events_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing event listing request");

    let events = newest_first(state.events().list_events());
    info!(
        correlation_id = %correlation_id,
        events_count = events.len(),
        "Events listed"
    );

    json_response(StatusCode::OK, &events)
}

/// Handler for GET /employees.
///
/// Lists the employee directory ordered by id.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee listing request");

    let employees = state.directory().list();
    info!(
        correlation_id = %correlation_id,
        employees_count = employees.len(),
        "Employees listed"
    );

    json_response(StatusCode::OK, &employees)
}

/// Handler for POST /employees.
///
/// Creates an employee, or replaces the record with the same id.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Employee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee create request");

    let employee = match payload {
        Ok(Json(employee)) => employee,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match state.directory().upsert(employee.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                salary_mode = ?employee.salary_mode,
                "Employee saved"
            );
            json_response(StatusCode::CREATED, &employee)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/:id/events.
///
/// Lists one employee's stored clock events, newest first.
async fn employee_events_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing employee event listing request"
    );

    if let Err(err) = state.directory().get(&employee_id) {
        return engine_error_response(err, correlation_id);
    }

    let events = newest_first(state.events().list_events_for(&employee_id));
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        events_count = events.len(),
        "Employee events listed"
    );

    json_response(StatusCode::OK, &events)
}

/// Handler for POST /employees/:id/clock.
///
/// Records a clock event carrying a snapshot of the employee's current pay
/// configuration.
async fn clock_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<ClockRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing clock request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee = match state.directory().get(&employee_id) {
        Ok(employee) => employee,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let timestamp = request
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp_millis());

    match ClockEvent::record(&employee, request.direction, timestamp, request.location) {
        Ok(event) => {
            state.events().append(event.clone());
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                event_id = %event.id,
                direction = ?event.direction,
                timestamp = event.timestamp,
                "Clock event recorded"
            );
            json_response(StatusCode::CREATED, &event)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for PUT /employees/:id/pay.
///
/// Replaces the employee's current pay configuration. Events recorded
/// earlier keep their snapshots.
async fn update_pay_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<PayUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing pay update request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match state.directory().update_pay(
        &employee_id,
        request.salary_mode,
        request.hourly_rate,
        request.monthly_salary,
    ) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                salary_mode = ?employee.salary_mode,
                hourly_rate = %employee.hourly_rate,
                monthly_salary = %employee.monthly_salary,
                "Pay configuration updated"
            );
            json_response(StatusCode::OK, &employee)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/:id/export.
///
/// Returns the employee's daily reports as CSV.
async fn export_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing export request"
    );

    if let Err(err) = state.directory().get(&employee_id) {
        return engine_error_response(err, correlation_id);
    }

    let events = state.events().list_events_for(&employee_id);
    let rows = to_export_rows(&state.compute_reports(&events));

    let mut buffer = Vec::new();
    if let Err(err) = write_csv(&rows, &mut buffer) {
        return engine_error_response(err, correlation_id);
    }

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        rows_count = rows.len(),
        "Export completed"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export_filename(&employee_id)),
            ),
        ],
        buffer,
    )
        .into_response()
}

/// Builds the download name for an employee's CSV export.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_`, so the name is always a
/// valid quoted header parameter.
fn export_filename(employee_id: &str) -> String {
    let stem: String = employee_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}-payroll.csv", stem)
}

/// Sorts events by timestamp, newest first. Equal timestamps keep store order.
fn newest_first(mut events: Vec<ClockEvent>) -> Vec<ClockEvent> {
    events.sort_by_key(|event| Reverse(event.timestamp));
    events
}

/// Wraps reports in a [`ReportBatch`] with a fresh id and summary.
fn build_batch(reports: Vec<DailyReport>) -> ReportBatch {
    let summary = summarize_reports(&reports);
    ReportBatch {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        reports,
        summary,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
