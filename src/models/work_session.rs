//! Work session model.
//!
//! A [`WorkSession`] pairs one clock-in with at most one later clock-out.

use serde::{Deserialize, Serialize};

use super::{ClockEvent, RateSnapshot};

/// A paired or open IN/OUT interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    /// The clock-in that opened the session.
    pub clock_in: ClockEvent,
    /// The clock-out that closed it, if one was found.
    #[serde(default)]
    pub clock_out: Option<ClockEvent>,
    /// Whole minutes between clock-in and clock-out; 0 while open.
    pub duration_minutes: i64,
    /// Rate snapshot copied from the clock-in event.
    pub rate: RateSnapshot,
}

impl WorkSession {
    /// Returns true if no clock-out has been paired with this session.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}
