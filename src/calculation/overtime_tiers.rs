//! Daily overtime tiering.
//!
//! A day's worked minutes are split into three buckets:
//!
//! | Bucket  | Minutes            | Multiplier |
//! |---------|--------------------|------------|
//! | Regular | first 480 (8h)     | 1.00       |
//! | Tier 1  | next 120 (2h)      | 1.34       |
//! | Tier 2  | everything beyond  | 1.67       |
//!
//! The limits and multipliers are fixed policy.

use rust_decimal::Decimal;

/// Minutes per day paid at the regular rate.
pub const REGULAR_DAILY_LIMIT_MINUTES: i64 = 8 * 60;

/// Minutes of tier-1 overtime before tier 2 applies.
pub const TIER_1_LIMIT_MINUTES: i64 = 2 * 60;

/// Multiplier for the first two overtime hours (1.34).
pub const TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(134, 0, 0, false, 2);

/// Multiplier for overtime beyond the first two hours (1.67).
pub const TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(167, 0, 0, false, 2);

/// A day's minutes split into regular and overtime buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OvertimeTiers {
    /// Minutes at the regular rate.
    pub regular_minutes: i64,
    /// Minutes at the tier-1 multiplier.
    pub tier_1_minutes: i64,
    /// Minutes at the tier-2 multiplier.
    pub tier_2_minutes: i64,
}

impl OvertimeTiers {
    /// Sum of all three buckets.
    pub fn total_minutes(&self) -> i64 {
        self.regular_minutes + self.tier_1_minutes + self.tier_2_minutes
    }

    /// Minutes weighted by their multipliers, i.e. the number of
    /// regular-rate minutes the day is worth.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::split_overtime_tiers;
    /// use rust_decimal::Decimal;
    ///
    /// // 480 + 30 × 1.34
    /// let tiers = split_overtime_tiers(510);
    /// assert_eq!(tiers.weighted_minutes(), Decimal::new(5202, 1));
    /// ```
    pub fn weighted_minutes(&self) -> Decimal {
        Decimal::from(self.regular_minutes)
            + Decimal::from(self.tier_1_minutes) * TIER_1_MULTIPLIER
            + Decimal::from(self.tier_2_minutes) * TIER_2_MULTIPLIER
    }
}

/// Splits a day's total minutes into regular, tier-1, and tier-2 buckets.
///
/// - `total ≤ 480`: everything is regular.
/// - `480 < total ≤ 600`: 480 regular, the rest tier 1.
/// - `total > 600`: 480 regular, 120 tier 1, the rest tier 2.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_overtime_tiers;
///
/// let tiers = split_overtime_tiers(660);
/// assert_eq!(tiers.regular_minutes, 480);
/// assert_eq!(tiers.tier_1_minutes, 120);
/// assert_eq!(tiers.tier_2_minutes, 60);
/// ```
pub fn split_overtime_tiers(total_minutes: i64) -> OvertimeTiers {
    if total_minutes <= REGULAR_DAILY_LIMIT_MINUTES {
        OvertimeTiers {
            regular_minutes: total_minutes,
            tier_1_minutes: 0,
            tier_2_minutes: 0,
        }
    } else if total_minutes <= REGULAR_DAILY_LIMIT_MINUTES + TIER_1_LIMIT_MINUTES {
        OvertimeTiers {
            regular_minutes: REGULAR_DAILY_LIMIT_MINUTES,
            tier_1_minutes: total_minutes - REGULAR_DAILY_LIMIT_MINUTES,
            tier_2_minutes: 0,
        }
    } else {
        OvertimeTiers {
            regular_minutes: REGULAR_DAILY_LIMIT_MINUTES,
            tier_1_minutes: TIER_1_LIMIT_MINUTES,
            tier_2_minutes: total_minutes - REGULAR_DAILY_LIMIT_MINUTES - TIER_1_LIMIT_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_minutes() {
        assert_eq!(split_overtime_tiers(0), OvertimeTiers::default());
    }

    #[test]
    fn test_under_regular_limit() {
        let tiers = split_overtime_tiers(360);
        assert_eq!(tiers.regular_minutes, 360);
        assert_eq!(tiers.tier_1_minutes, 0);
        assert_eq!(tiers.tier_2_minutes, 0);
    }

    #[test]
    fn test_exactly_regular_limit() {
        let tiers = split_overtime_tiers(480);
        assert_eq!(tiers.regular_minutes, 480);
        assert_eq!(tiers.tier_1_minutes, 0);
    }

    #[test]
    fn test_one_minute_over_regular_limit() {
        let tiers = split_overtime_tiers(481);
        assert_eq!(tiers.regular_minutes, 480);
        assert_eq!(tiers.tier_1_minutes, 1);
        assert_eq!(tiers.tier_2_minutes, 0);
    }

    #[test]
    fn test_exactly_tier_1_limit() {
        let tiers = split_overtime_tiers(600);
        assert_eq!(tiers.regular_minutes, 480);
        assert_eq!(tiers.tier_1_minutes, 120);
        assert_eq!(tiers.tier_2_minutes, 0);
    }

    #[test]
    fn test_into_tier_2() {
        let tiers = split_overtime_tiers(601);
        assert_eq!(tiers.tier_1_minutes, 120);
        assert_eq!(tiers.tier_2_minutes, 1);
    }

    #[test]
    fn test_long_day() {
        let tiers = split_overtime_tiers(16 * 60);
        assert_eq!(tiers.regular_minutes, 480);
        assert_eq!(tiers.tier_1_minutes, 120);
        assert_eq!(tiers.tier_2_minutes, 360);
        assert_eq!(tiers.total_minutes(), 960);
    }

    #[test]
    fn test_multiplier_constants() {
        assert_eq!(TIER_1_MULTIPLIER, dec("1.34"));
        assert_eq!(TIER_2_MULTIPLIER, dec("1.67"));
        assert_eq!(REGULAR_DAILY_LIMIT_MINUTES, 480);
        assert_eq!(TIER_1_LIMIT_MINUTES, 120);
    }

    #[test]
    fn test_weighted_minutes_all_tiers() {
        // 480 + 120 × 1.34 + 60 × 1.67 = 480 + 160.8 + 100.2
        let tiers = split_overtime_tiers(660);
        assert_eq!(tiers.weighted_minutes(), dec("741.0"));
    }
}
