//! Daily pay estimation.

use rust_decimal::Decimal;

use super::OvertimeTiers;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds to a whole unit, with halves going towards positive infinity
/// (`floor(x + 0.5)`).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(18525, 1)), Decimal::from(1853));
/// assert_eq!(round_half_up(Decimal::new(-25, 1)), Decimal::from(-2));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(HALF).floor()
}

/// Estimates pay for a day's tiered minutes at `base_hourly_rate`.
///
/// Equivalent to
/// `round(regular·r + tier1·r·1.34 + tier2·r·1.67)` with `r = base / 60`,
/// evaluated as `base · weighted_minutes / 60` so the per-minute rate is
/// never materialised as a truncated fraction.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{estimate_daily_pay, split_overtime_tiers};
/// use rust_decimal::Decimal;
///
/// // 09:00-17:30 at 200/h: 480 regular + 30 tier-1 minutes.
/// let pay = estimate_daily_pay(&split_overtime_tiers(510), Decimal::from(200));
/// assert_eq!(pay, Decimal::from(1734));
/// ```
pub fn estimate_daily_pay(tiers: &OvertimeTiers, base_hourly_rate: Decimal) -> Decimal {
    let raw = base_hourly_rate.saturating_mul(tiers.weighted_minutes()) / MINUTES_PER_HOUR;
    round_half_up(raw)
}
