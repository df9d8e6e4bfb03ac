//! Calendar-date bucketing of work sessions.
//!
//! Sessions belong to the local calendar date of their clock-in instant. The
//! time zone is a parameter so callers can bucket by the viewer's zone
//! (`chrono::Local`) or by a fixed offset.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing::warn;

use crate::models::WorkSession;

/// Returns the calendar date of `timestamp` (epoch milliseconds) in `tz`.
///
/// Returns `None` if the timestamp is outside chrono's representable range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::local_date;
/// use chrono::{FixedOffset, NaiveDate, Utc};
///
/// // 2026-01-15T20:00:00Z
/// let timestamp = 1_768_507_200_000;
///
/// assert_eq!(local_date(timestamp, &Utc), NaiveDate::from_ymd_opt(2026, 1, 15));
///
/// let taipei = FixedOffset::east_opt(8 * 3600).unwrap();
/// assert_eq!(local_date(timestamp, &taipei), NaiveDate::from_ymd_opt(2026, 1, 16));
/// ```
pub fn local_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Groups sessions by the local date of their clock-in.
///
/// Session order within each date is preserved. Sessions whose clock-in
/// cannot be placed on a calendar are skipped and logged.
pub fn group_by_local_date<Tz: TimeZone>(
    sessions: Vec<WorkSession>,
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<WorkSession>> {
    let mut groups: BTreeMap<NaiveDate, Vec<WorkSession>> = BTreeMap::new();

    for session in sessions {
        match local_date(session.clock_in.timestamp, tz) {
            Some(date) => groups.entry(date).or_default().push(session),
            None => warn!(
                event_id = %session.clock_in.id,
                timestamp = session.clock_in.timestamp,
                "Skipping session with unrepresentable clock-in timestamp"
            ),
        }
    }

    groups
}
