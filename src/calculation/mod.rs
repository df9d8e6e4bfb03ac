//! Calculation logic for the payroll engine.
//!
//! This module turns raw clock events into daily reports: pairing events
//! into sessions, bucketing sessions by local date, splitting each day's
//! minutes into overtime tiers, deriving the base hourly rate from the rate
//! snapshot, and estimating pay.

mod base_rate;
mod daily_pay;
mod daily_reports;
mod day_bucketing;
mod event_pairing;
mod overtime_tiers;
mod summary;

pub use base_rate::{DAILY_REGULAR_HOURS, MONTHLY_SALARY_DAYS, base_hourly_rate};
pub use daily_pay::{estimate_daily_pay, round_half_up};
pub use daily_reports::{compute_daily_reports, compute_daily_reports_in};
pub use day_bucketing::{group_by_local_date, local_date};
pub use event_pairing::{MILLIS_PER_MINUTE, pair_events, partition_by_employee};
pub use overtime_tiers::{
    OvertimeTiers, REGULAR_DAILY_LIMIT_MINUTES, TIER_1_LIMIT_MINUTES, TIER_1_MULTIPLIER,
    TIER_2_MULTIPLIER, split_overtime_tiers,
};
pub use summary::summarize_reports;
