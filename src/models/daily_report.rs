//! Daily report models.
//!
//! This module contains the [`DailyReport`] produced per employee per
//! calendar date, the [`PayrollSummary`] aggregate over a list of reports, and
//! the [`ReportBatch`] envelope returned to API callers.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WorkSession;

/// The tiered, pay-estimated summary for one employee on one date.
///
/// Invariant: `regular_minutes + ot134_minutes + ot167_minutes == total_minutes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// The employee the report is for.
    pub employee_id: String,
    /// Local calendar date of the sessions' clock-in instants.
    pub date: NaiveDate,
    /// The day's sessions in chronological order.
    pub sessions: Vec<WorkSession>,
    /// Sum of all session durations.
    pub total_minutes: i64,
    /// Minutes paid at the regular rate (at most 480).
    pub regular_minutes: i64,
    /// Minutes paid at 1.34x (at most 120).
    pub ot134_minutes: i64,
    /// Minutes paid at 1.67x.
    pub ot167_minutes: i64,
    /// Hourly rate derived from the first session's snapshot.
    pub base_hourly_rate: Decimal,
    /// Estimated pay for the day, rounded to whole currency units.
    pub estimated_pay: Decimal,
}

/// Totals across a list of daily reports.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary::default();
/// assert_eq!(summary.days_worked, 0);
/// assert_eq!(summary.total_estimated_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Number of daily reports (days with attendance).
    pub days_worked: usize,
    /// Sum of `total_minutes`.
    pub total_minutes: i64,
    /// Sum of `estimated_pay`.
    pub total_estimated_pay: Decimal,
}

/// The envelope returned for a report computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBatch {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// Reports, most recent date first.
    pub reports: Vec<DailyReport>,
    /// Totals over `reports`.
    pub summary: PayrollSummary,
}
