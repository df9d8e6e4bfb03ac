//! Daily report computation.
//!
//! The entry points here take an unordered event list for any number of
//! employees and produce one [`DailyReport`] per employee per local calendar
//! date. Nothing is read from current employee configuration: the base rate
//! of each day comes from the rate snapshot carried by its first session.

use std::cmp::Reverse;

use chrono::{Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ClockEvent, DailyReport, WorkSession};

use super::day_bucketing::group_by_local_date;
use super::event_pairing::{pair_event_refs, partition_by_employee};
use super::{base_hourly_rate, estimate_daily_pay, split_overtime_tiers};

/// Computes daily reports, bucketing sessions by the host's local time zone.
///
/// See [`compute_daily_reports_in`] for the full behaviour.
pub fn compute_daily_reports(events: &[ClockEvent]) -> Vec<DailyReport> {
    compute_daily_reports_in(events, &Local)
}

/// Computes daily reports, bucketing sessions by the calendar date of their
/// clock-in in `tz`.
///
/// Events are partitioned by employee before pairing, so a clock-in never
/// binds another employee's clock-out. Reports are ordered by date, most
/// recent first; reports sharing a date are ordered by employee id.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_daily_reports_in;
/// use payroll_engine::models::{ClockEvent, Direction, RateSnapshot};
/// use chrono::FixedOffset;
/// use rust_decimal::Decimal;
///
/// let nine_am = 1_768_438_800_000; // 2026-01-15 09:00 at +08:00
/// let event = |id: &str, timestamp: i64, direction: Direction| ClockEvent {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     timestamp,
///     direction,
///     location: None,
///     rate: RateSnapshot::hourly(Decimal::from(200)),
/// };
///
/// let events = vec![
///     event("in", nine_am, Direction::In),
///     event("out", nine_am + 510 * 60_000, Direction::Out),
/// ];
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
/// let reports = compute_daily_reports_in(&events, &tz);
///
/// assert_eq!(reports.len(), 1);
/// assert_eq!(reports[0].total_minutes, 510);
/// assert_eq!(reports[0].ot134_minutes, 30);
/// assert_eq!(reports[0].estimated_pay, Decimal::from(1734));
/// ```
pub fn compute_daily_reports_in<Tz: TimeZone>(events: &[ClockEvent], tz: &Tz) -> Vec<DailyReport> {
    let mut reports = Vec::new();

    for (employee_id, employee_events) in partition_by_employee(events) {
        let event_count = employee_events.len();
        let sessions = pair_event_refs(employee_events);
        debug!(
            employee_id = %employee_id,
            events = event_count,
            sessions = sessions.len(),
            "Paired clock events"
        );

        for (date, day_sessions) in group_by_local_date(sessions, tz) {
            reports.push(build_daily_report(employee_id, date, day_sessions));
        }
    }

    reports.sort_by(|a, b| {
        (Reverse(a.date), &a.employee_id).cmp(&(Reverse(b.date), &b.employee_id))
    });

    debug!(reports = reports.len(), "Computed daily reports");
    reports
}

/// Builds the report for one employee's sessions on one date.
///
/// `sessions` must be non-empty and in chronological order.
fn build_daily_report(employee_id: &str, date: NaiveDate, sessions: Vec<WorkSession>) -> DailyReport {
    let total_minutes = sessions
        .iter()
        .fold(0i64, |acc, session| acc.saturating_add(session.duration_minutes));
    let tiers = split_overtime_tiers(total_minutes);

    let base_rate = sessions
        .first()
        .map(|session| base_hourly_rate(&session.rate))
        .unwrap_or(Decimal::ZERO);
    let estimated_pay = estimate_daily_pay(&tiers, base_rate);

    DailyReport {
        employee_id: employee_id.to_string(),
        date,
        sessions,
        total_minutes,
        regular_minutes: tiers.regular_minutes,
        ot134_minutes: tiers.tier_1_minutes,
        ot167_minutes: tiers.tier_2_minutes,
        base_hourly_rate: base_rate,
        estimated_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::MILLIS_PER_MINUTE;
    use crate::models::{Direction, Employee, RateSnapshot};
    use chrono::FixedOffset;
    use proptest::prelude::*;
    use std::str::FromStr;

    /// 2026-01-15T09:00:00+08:00
    const NINE_AM: i64 = 1_768_438_800_000;
    const DAY: i64 = 24 * 60 * MILLIS_PER_MINUTE;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn taipei() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn minutes(n: i64) -> i64 {
        n * MILLIS_PER_MINUTE
    }

    fn event(
        id: &str,
        employee_id: &str,
        timestamp: i64,
        direction: Direction,
        rate: RateSnapshot,
    ) -> ClockEvent {
        ClockEvent {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            timestamp,
            direction,
            location: None,
            rate,
        }
    }

    fn shift(employee_id: &str, start: i64, length_minutes: i64, rate: RateSnapshot) -> Vec<ClockEvent> {
        vec![
            event(&format!("{employee_id}_in_{start}"), employee_id, start, Direction::In, rate),
            event(
                &format!("{employee_id}_out_{start}"),
                employee_id,
                start + minutes(length_minutes),
                Direction::Out,
                rate,
            ),
        ]
    }

    #[test]
    fn test_empty_input_yields_no_reports() {
        assert!(compute_daily_reports_in(&[], &taipei()).is_empty());
        assert!(compute_daily_reports(&[]).is_empty());
    }

    #[test]
    fn test_single_day_with_tier_1_overtime() {
        let events = shift("emp_001", NINE_AM, 510, RateSnapshot::hourly(dec("200")));
        let reports = compute_daily_reports_in(&events, &taipei());

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.employee_id, "emp_001");
        assert_eq!(report.date, date(2026, 1, 15));
        assert_eq!(report.sessions.len(), 1);
        assert_eq!(report.total_minutes, 510);
        assert_eq!(report.regular_minutes, 480);
        assert_eq!(report.ot134_minutes, 30);
        assert_eq!(report.ot167_minutes, 0);
        assert_eq!(report.base_hourly_rate, dec("200"));
        assert_eq!(report.estimated_pay, dec("1734"));
    }

    #[test]
    fn test_single_day_with_both_tiers() {
        let events = shift("emp_001", NINE_AM, 660, RateSnapshot::hourly(dec("150")));
        let reports = compute_daily_reports_in(&events, &taipei());

        let report = &reports[0];
        assert_eq!(report.regular_minutes, 480);
        assert_eq!(report.ot134_minutes, 120);
        assert_eq!(report.ot167_minutes, 60);
        assert_eq!(report.estimated_pay, dec("1853"));
    }

    #[test]
    fn test_lone_clock_in_gives_open_session() {
        let events = vec![event(
            "in",
            "emp_001",
            NINE_AM,
            Direction::In,
            RateSnapshot::hourly(dec("200")),
        )];
        let reports = compute_daily_reports_in(&events, &taipei());

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].sessions.len(), 1);
        assert!(reports[0].sessions[0].is_open());
        assert_eq!(reports[0].total_minutes, 0);
        assert_eq!(reports[0].estimated_pay, Decimal::ZERO);
    }

    #[test]
    fn test_orphan_clock_outs_produce_no_report() {
        let events = vec![event(
            "out",
            "emp_001",
            NINE_AM,
            Direction::Out,
            RateSnapshot::hourly(dec("200")),
        )];
        assert!(compute_daily_reports_in(&events, &taipei()).is_empty());
    }

    #[test]
    fn test_interleaved_employees_never_cross_pair() {
        let rate = RateSnapshot::hourly(dec("200"));
        let events = vec![
            event("a_in", "emp_a", NINE_AM, Direction::In, rate),
            event("b_in", "emp_b", NINE_AM + minutes(30), Direction::In, rate),
            event("a_out", "emp_a", NINE_AM + minutes(480), Direction::Out, rate),
            event("b_out", "emp_b", NINE_AM + minutes(510), Direction::Out, rate),
        ];

        let reports = compute_daily_reports_in(&events, &taipei());
        assert_eq!(reports.len(), 2);

        for report in &reports {
            for session in &report.sessions {
                assert_eq!(session.clock_in.employee_id, report.employee_id);
                let out = session.clock_out.as_ref().unwrap();
                assert_eq!(out.employee_id, report.employee_id);
            }
            assert_eq!(report.total_minutes, 480);
        }
    }

    #[test]
    fn test_monthly_salary_day() {
        let events = shift("emp_001", NINE_AM, 480, RateSnapshot::monthly(dec("30000")));
        let reports = compute_daily_reports_in(&events, &taipei());

        assert_eq!(reports[0].base_hourly_rate, dec("125"));
        assert_eq!(reports[0].estimated_pay, dec("1000"));
    }

    #[test]
    fn test_multiple_sessions_summed_per_day() {
        let rate = RateSnapshot::hourly(dec("200"));
        let mut events = shift("emp_001", NINE_AM, 240, rate);
        events.extend(shift("emp_001", NINE_AM + minutes(300), 300, rate));

        let reports = compute_daily_reports_in(&events, &taipei());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].sessions.len(), 2);
        assert_eq!(reports[0].total_minutes, 540);
        assert_eq!(reports[0].ot134_minutes, 60);
        assert!(reports[0].sessions[0].clock_in.timestamp < reports[0].sessions[1].clock_in.timestamp);
    }

    #[test]
    fn test_base_rate_from_first_session() {
        let mut events = shift("emp_001", NINE_AM, 60, RateSnapshot::hourly(dec("100")));
        events.extend(shift(
            "emp_001",
            NINE_AM + minutes(120),
            60,
            RateSnapshot::hourly(dec("300")),
        ));

        let reports = compute_daily_reports_in(&events, &taipei());
        assert_eq!(reports[0].base_hourly_rate, dec("100"));
        assert_eq!(reports[0].estimated_pay, dec("200"));
    }

    #[test]
    fn test_session_spanning_midnight_stays_on_clock_in_date() {
        // 22:00 local on the 15th for 4 hours
        let start = NINE_AM + minutes(13 * 60);
        let events = shift("emp_001", start, 240, RateSnapshot::hourly(dec("200")));

        let reports = compute_daily_reports_in(&events, &taipei());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].date, date(2026, 1, 15));
        assert_eq!(reports[0].total_minutes, 240);
    }

    #[test]
    fn test_reports_sorted_date_desc_then_employee() {
        let rate = RateSnapshot::hourly(dec("200"));
        let mut events = Vec::new();
        events.extend(shift("emp_b", NINE_AM, 60, rate));
        events.extend(shift("emp_a", NINE_AM, 60, rate));
        events.extend(shift("emp_a", NINE_AM + DAY, 60, rate));
        events.extend(shift("emp_c", NINE_AM - DAY, 60, rate));

        let reports = compute_daily_reports_in(&events, &taipei());
        let order: Vec<(NaiveDate, &str)> = reports
            .iter()
            .map(|r| (r.date, r.employee_id.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                (date(2026, 1, 16), "emp_a"),
                (date(2026, 1, 15), "emp_a"),
                (date(2026, 1, 15), "emp_b"),
                (date(2026, 1, 14), "emp_c"),
            ]
        );
    }

    #[test]
    fn test_bucketing_follows_time_zone() {
        // 2026-01-15T16:30Z is the 16th at +08:00 and the 15th in UTC
        let start = NINE_AM + minutes(15 * 60 + 30);
        let events = shift("emp_001", start, 60, RateSnapshot::hourly(dec("200")));

        assert_eq!(compute_daily_reports_in(&events, &taipei())[0].date, date(2026, 1, 16));
        assert_eq!(compute_daily_reports_in(&events, &chrono::Utc)[0].date, date(2026, 1, 15));
    }

    #[test]
    fn test_default_entry_point_buckets_in_local_zone() {
        // Close to midnight in many zones, so the date depends on the host zone
        let start = NINE_AM + minutes(15 * 60 + 30);
        let events = shift("emp_001", start, 90, RateSnapshot::hourly(dec("200")));

        let reports = compute_daily_reports(&events);
        let expected_date = Local.timestamp_millis_opt(start).unwrap().date_naive();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].date, expected_date);
        assert_eq!(reports[0].total_minutes, 90);
        assert_eq!(reports, compute_daily_reports_in(&events, &Local));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let events = shift("emp_001", NINE_AM, 510, RateSnapshot::hourly(dec("200")));
        let before = events.clone();
        let _ = compute_daily_reports_in(&events, &taipei());
        assert_eq!(events, before);
    }

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::In), Just(Direction::Out)]
    }

    fn arb_events() -> impl Strategy<Value = Vec<ClockEvent>> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["emp_a", "emp_b", "emp_c"]),
                0i64..(3 * 24 * 60),
                arb_direction(),
                1u32..500,
            ),
            0..40,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (employee_id, offset, direction, rate))| {
                    event(
                        &format!("ev_{i}"),
                        employee_id,
                        NINE_AM + minutes(offset),
                        direction,
                        RateSnapshot::hourly(Decimal::from(rate)),
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_reports_are_deterministic(events in arb_events()) {
            let first = compute_daily_reports_in(&events, &taipei());
            let second = compute_daily_reports_in(&events, &taipei());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_durations_are_non_negative(events in arb_events()) {
            for report in compute_daily_reports_in(&events, &taipei()) {
                for session in &report.sessions {
                    prop_assert!(session.duration_minutes >= 0);
                    if session.is_open() {
                        prop_assert_eq!(session.duration_minutes, 0);
                    }
                }
            }
        }

        #[test]
        fn prop_tiers_partition_total(events in arb_events()) {
            for report in compute_daily_reports_in(&events, &taipei()) {
                prop_assert_eq!(
                    report.regular_minutes + report.ot134_minutes + report.ot167_minutes,
                    report.total_minutes
                );
                prop_assert!(report.regular_minutes <= 480);
                prop_assert!(report.ot134_minutes <= 120);
                prop_assert!(report.ot167_minutes >= 0);
            }
        }

        #[test]
        fn prop_sessions_never_cross_employees(events in arb_events()) {
            for report in compute_daily_reports_in(&events, &taipei()) {
                for session in &report.sessions {
                    prop_assert_eq!(&session.clock_in.employee_id, &report.employee_id);
                    if let Some(out) = &session.clock_out {
                        prop_assert_eq!(&out.employee_id, &report.employee_id);
                        prop_assert!(out.timestamp >= session.clock_in.timestamp);
                    }
                }
            }
        }

        #[test]
        fn prop_pay_is_monotonic_in_minutes(
            rate in 0u32..1000,
            minutes_a in 0i64..2000,
            minutes_b in 0i64..2000,
        ) {
            let (low, high) = if minutes_a <= minutes_b { (minutes_a, minutes_b) } else { (minutes_b, minutes_a) };
            let rate = Decimal::from(rate);
            let pay_low = estimate_daily_pay(&split_overtime_tiers(low), rate);
            let pay_high = estimate_daily_pay(&split_overtime_tiers(high), rate);
            prop_assert!(pay_low <= pay_high);
        }

        #[test]
        fn prop_pay_change_does_not_rewrite_history(rate in 1u32..1000, later_rate in 1u32..1000) {
            let mut employee = Employee::hourly("emp_001", "Test", Decimal::from(rate));
            let events = vec![
                ClockEvent::record(&employee, Direction::In, NINE_AM, None).unwrap(),
                ClockEvent::record(&employee, Direction::Out, NINE_AM + minutes(510), None).unwrap(),
            ];
            let before = compute_daily_reports_in(&events, &taipei());

            employee.hourly_rate = Decimal::from(later_rate);
            let after = compute_daily_reports_in(&events, &taipei());

            prop_assert_eq!(&before, &after);
            prop_assert_eq!(after[0].base_hourly_rate, Decimal::from(rate));
        }
    }
}
