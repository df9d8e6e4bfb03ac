//! Aggregate totals over daily reports.

use rust_decimal::Decimal;

use crate::models::{DailyReport, PayrollSummary};

/// Sums a list of daily reports.
///
/// Each report counts as one day worked.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_reports;
///
/// let summary = summarize_reports(&[]);
/// assert_eq!(summary.days_worked, 0);
/// ```
pub fn summarize_reports(reports: &[DailyReport]) -> PayrollSummary {
    reports.iter().fold(
        PayrollSummary {
            days_worked: 0,
            total_minutes: 0,
            total_estimated_pay: Decimal::ZERO,
        },
        |mut summary, report| {
            summary.days_worked += 1;
            summary.total_minutes = summary.total_minutes.saturating_add(report.total_minutes);
            summary.total_estimated_pay = summary
                .total_estimated_pay
                .saturating_add(report.estimated_pay);
            summary
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn report(employee_id: &str, day: u32, total_minutes: i64, pay: &str) -> DailyReport {
        DailyReport {
            employee_id: employee_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            sessions: vec![],
            total_minutes,
            regular_minutes: total_minutes.min(480),
            ot134_minutes: 0,
            ot167_minutes: 0,
            base_hourly_rate: dec("200"),
            estimated_pay: dec(pay),
        }
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(summarize_reports(&[]), PayrollSummary::default());
    }

    #[test]
    fn test_summary_totals() {
        let reports = vec![
            report("emp_001", 15, 510, "1734"),
            report("emp_001", 14, 480, "1600"),
            report("emp_002", 14, 0, "0"),
        ];

        let summary = summarize_reports(&reports);
        assert_eq!(summary.days_worked, 3);
        assert_eq!(summary.total_minutes, 990);
        assert_eq!(summary.total_estimated_pay, dec("3334"));
    }
}
