//! Event pairing functionality.
//!
//! This module turns an unordered set of clock events into an ordered list of
//! [`WorkSession`]s. Each clock-in binds the nearest later clock-out that no
//! earlier clock-in has claimed; clock-outs nobody claims are dropped.

use std::collections::BTreeMap;

use crate::models::{ClockEvent, WorkSession};

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Pairs one employee's clock events into work sessions.
///
/// Events are sorted by timestamp (stable, so equal timestamps keep their
/// input order) and scanned once. A clock-in binds the nearest unclaimed
/// clock-out positioned after it in the sorted sequence; the resulting
/// session lasts `floor((out - in) / 60000)` minutes, never less than zero.
/// A clock-in with nothing left to bind becomes an open session of zero
/// minutes. Clock-outs that are never claimed produce no session.
///
/// The caller is expected to pass a single employee's events. Use
/// [`partition_by_employee`] first when the input is mixed;
/// [`compute_daily_reports`](super::compute_daily_reports) does this.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::pair_events;
/// use payroll_engine::models::{ClockEvent, Direction, RateSnapshot};
/// use rust_decimal::Decimal;
///
/// let event = |id: &str, timestamp: i64, direction: Direction| ClockEvent {
///     id: id.to_string(),
///     employee_id: "emp_001".to_string(),
///     timestamp,
///     direction,
///     location: None,
///     rate: RateSnapshot::hourly(Decimal::from(200)),
/// };
///
/// // Input order does not matter.
/// let sessions = pair_events(&[
///     event("out", 90 * 60_000, Direction::Out),
///     event("in", 0, Direction::In),
/// ]);
///
/// assert_eq!(sessions.len(), 1);
/// assert_eq!(sessions[0].duration_minutes, 90);
/// assert!(!sessions[0].is_open());
/// ```
pub fn pair_events(events: &[ClockEvent]) -> Vec<WorkSession> {
    pair_event_refs(events.iter().collect())
}

/// Pairs borrowed events; shared by [`pair_events`] and the report builder.
pub(crate) fn pair_event_refs(mut events: Vec<&ClockEvent>) -> Vec<WorkSession> {
    events.sort_by_key(|event| event.timestamp);

    let out_positions: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.is_out())
        .map(|(position, _)| position)
        .collect();

    // Everything in out_positions[..cursor] is either claimed or sits before
    // the clock-in being scanned, so it can never be claimed again.
    let mut cursor = 0;
    let mut sessions = Vec::new();

    for (position, clock_in) in events.iter().enumerate() {
        if !clock_in.is_in() {
            continue;
        }

        while cursor < out_positions.len() && out_positions[cursor] < position {
            cursor += 1;
        }

        let clock_out = out_positions.get(cursor).map(|&out| events[out]);

        let duration_minutes = match clock_out {
            Some(clock_out) => {
                cursor += 1;
                clock_out
                    .timestamp
                    .saturating_sub(clock_in.timestamp)
                    .div_euclid(MILLIS_PER_MINUTE)
                    .max(0)
            }
            None => 0,
        };

        sessions.push(WorkSession {
            clock_in: (*clock_in).clone(),
            clock_out: clock_out.cloned(),
            duration_minutes,
            rate: clock_in.rate,
        });
    }

    sessions
}

/// Splits a mixed event list by employee identifier.
///
/// Groups are keyed and ordered by employee id; within a group the events
/// keep their input order.
pub fn partition_by_employee(events: &[ClockEvent]) -> BTreeMap<&str, Vec<&ClockEvent>> {
    let mut groups: BTreeMap<&str, Vec<&ClockEvent>> = BTreeMap::new();
    for event in events {
        groups
            .entry(event.employee_id.as_str())
            .or_default()
            .push(event);
    }
    groups
}
