//! Flat export of daily reports.
//!
//! Each [`DailyReport`] becomes one [`ExportRow`]: a spreadsheet-friendly
//! record with minutes converted to hours. [`write_csv`] writes rows with a
//! header line to any [`Write`] sink.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::DailyReport;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Column names written by [`write_csv`], in field order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "employee_id",
    "date",
    "total_hours",
    "regular_hours",
    "ot134_hours",
    "ot167_hours",
    "base_hourly_rate",
    "estimated_pay",
];

/// One employee-day in exported form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// The employee the row is for.
    pub employee_id: String,
    /// Calendar date, written as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Regular-rate hours.
    pub regular_hours: Decimal,
    /// Hours at 1.34x.
    pub ot134_hours: Decimal,
    /// Hours at 1.67x.
    pub ot167_hours: Decimal,
    /// Base hourly rate used for the day.
    pub base_hourly_rate: Decimal,
    /// Estimated pay for the day.
    pub estimated_pay: Decimal,
}

impl From<&DailyReport> for ExportRow {
    fn from(report: &DailyReport) -> Self {
        Self {
            employee_id: report.employee_id.clone(),
            date: report.date,
            total_hours: minutes_to_hours(report.total_minutes),
            regular_hours: minutes_to_hours(report.regular_minutes),
            ot134_hours: minutes_to_hours(report.ot134_minutes),
            ot167_hours: minutes_to_hours(report.ot167_minutes),
            base_hourly_rate: report.base_hourly_rate,
            estimated_pay: report.estimated_pay,
        }
    }
}

/// Converts minutes to hours with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::export::minutes_to_hours;
///
/// assert_eq!(minutes_to_hours(510).to_string(), "8.50");
/// assert_eq!(minutes_to_hours(40).to_string(), "0.67");
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    let mut hours = (Decimal::from(minutes) / MINUTES_PER_HOUR)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(2);
    hours
}

/// Flattens reports into export rows, preserving order.
pub fn to_export_rows(reports: &[DailyReport]) -> Vec<ExportRow> {
    reports.iter().map(ExportRow::from).collect()
}

/// Writes `rows` as CSV with a header line.
///
/// The header is written even when `rows` is empty.
///
/// # Errors
///
/// Returns `EngineError::ExportError` if writing to `writer` fails.
pub fn write_csv<W: Write>(rows: &[ExportRow], writer: W) -> EngineResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
