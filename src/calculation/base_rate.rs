//! Base hourly rate derivation.
//!
//! This module turns a [`RateSnapshot`] into the hourly figure that daily pay
//! is estimated from. Monthly salaries use a flat 30-day, 8-hour approximation.

use rust_decimal::Decimal;

use crate::models::{RateSnapshot, SalaryMode};

use super::round_half_up;

/// Days per month in the monthly-to-hourly approximation.
pub const MONTHLY_SALARY_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hours per day in the monthly-to-hourly approximation.
pub const DAILY_REGULAR_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns the hourly rate implied by a rate snapshot.
///
/// - Hourly snapshots use `hourly_rate` unchanged.
/// - Monthly snapshots use `round(monthly_salary / 30 / 8)`, rounded to a
///   whole currency unit with halves going up.
///
/// The snapshot is not validated; negative inputs produce negative rates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::base_hourly_rate;
/// use payroll_engine::models::RateSnapshot;
/// use rust_decimal::Decimal;
///
/// let monthly = RateSnapshot::monthly(Decimal::from(30000));
/// assert_eq!(base_hourly_rate(&monthly), Decimal::from(125));
///
/// let hourly = RateSnapshot::hourly(Decimal::new(1835, 1));
/// assert_eq!(base_hourly_rate(&hourly), Decimal::new(1835, 1));
/// ```
pub fn base_hourly_rate(rate: &RateSnapshot) -> Decimal {
    match rate.salary_mode {
        SalaryMode::Hourly => rate.hourly_rate,
        SalaryMode::Monthly => {
            round_half_up(rate.monthly_salary / MONTHLY_SALARY_DAYS / DAILY_REGULAR_HOURS)
        }
    }
}
