//! Clock event model and the rate snapshot it carries.
//!
//! A [`ClockEvent`] is an immutable fact: an employee clocked in or out at an
//! instant. Each event embeds a [`RateSnapshot`] taken from the employee's
//! pay configuration at the moment the event was recorded, so reports built
//! from old events keep the pay that applied at the time.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Employee, SalaryMode};

/// Whether an event starts or ends a stretch of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Clock-in.
    In,
    /// Clock-out.
    Out,
}

/// Where the device was when the event was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Reported accuracy radius in metres.
    pub accuracy: f64,
}

/// Pay configuration frozen at event-creation time.
///
/// This is a plain value copied into each event; it never refers back to a
/// live employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    /// The pay mode in effect when the event was recorded.
    pub salary_mode: SalaryMode,
    /// The hourly rate in effect when the event was recorded.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// The monthly salary in effect when the event was recorded.
    #[serde(default)]
    pub monthly_salary: Decimal,
}

impl RateSnapshot {
    /// Snapshot for an hourly rate.
    pub fn hourly(hourly_rate: Decimal) -> Self {
        Self {
            salary_mode: SalaryMode::Hourly,
            hourly_rate,
            monthly_salary: Decimal::ZERO,
        }
    }

    /// Snapshot for a monthly salary.
    pub fn monthly(monthly_salary: Decimal) -> Self {
        Self {
            salary_mode: SalaryMode::Monthly,
            hourly_rate: Decimal::ZERO,
            monthly_salary,
        }
    }
}

/// A single timestamped clock-in or clock-out record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ClockEvent, Direction, RateSnapshot};
/// use rust_decimal::Decimal;
///
/// let event = ClockEvent {
///     id: "evt_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     timestamp: 1_768_438_800_000,
///     direction: Direction::In,
///     location: None,
///     rate: RateSnapshot::hourly(Decimal::from(200)),
/// };
/// assert!(event.is_in());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The employee who clocked.
    pub employee_id: String,
    /// When the event occurred, in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Clock-in or clock-out.
    pub direction: Direction,
    /// Optional device location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    /// Pay configuration captured when the event was recorded.
    pub rate: RateSnapshot,
}

impl ClockEvent {
    /// Records a new event for `employee`, freezing their current pay
    /// configuration into the event.
    ///
    /// This is the only place the employee's *current* configuration is
    /// consulted. Reports computed later use the snapshot exclusively.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEmployee`] if the employee record fails
    ///   [`Employee::validate`].
    /// - [`EngineError::InvalidEvent`] if `timestamp` is outside the range
    ///   representable as a calendar instant.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{ClockEvent, Direction, Employee};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::hourly("emp_001", "Mei", Decimal::from(200));
    /// let event = ClockEvent::record(&employee, Direction::In, 1_768_438_800_000, None)?;
    ///
    /// assert_eq!(event.employee_id, "emp_001");
    /// assert_eq!(event.rate.hourly_rate, Decimal::from(200));
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn record(
        employee: &Employee,
        direction: Direction,
        timestamp: i64,
        location: Option<GeoLocation>,
    ) -> EngineResult<Self> {
        employee.validate()?;

        if DateTime::<Utc>::from_timestamp_millis(timestamp).is_none() {
            return Err(EngineError::InvalidEvent {
                message: format!("timestamp {} is out of range", timestamp),
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            employee_id: employee.id.clone(),
            timestamp,
            direction,
            location,
            rate: employee.rate_snapshot(),
        })
    }

    /// Returns true for clock-in events.
    pub fn is_in(&self) -> bool {
        self.direction == Direction::In
    }

    /// Returns true for clock-out events.
    pub fn is_out(&self) -> bool {
        self.direction == Direction::Out
    }
}
