//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{compute_daily_reports, compute_daily_reports_in};
use crate::config::{ConfigLoader, ReportZone};
use crate::error::EngineResult;
use crate::models::{ClockEvent, DailyReport};
use crate::store::{EmployeeDirectory, EventStore, InMemoryEventStore};

/// Shared application state.
///
/// Holds the event store, the employee directory with current pay
/// configuration, and the zone reports are bucketed in.
#[derive(Clone)]
pub struct AppState {
    events: Arc<dyn EventStore>,
    directory: Arc<EmployeeDirectory>,
    report_zone: ReportZone,
}

impl AppState {
    /// Creates state from loaded configuration, seeding the directory from
    /// the roster and starting with an empty in-memory event store.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidEmployee` if a roster entry is invalid.
    pub fn new(config: &ConfigLoader) -> EngineResult<Self> {
        let directory = EmployeeDirectory::from_employees(config.employees().iter().cloned())?;
        Ok(Self::with_parts(
            Arc::new(InMemoryEventStore::new()),
            Arc::new(directory),
            config.report_zone(),
        ))
    }

    /// Creates state from explicit collaborators.
    pub fn with_parts(
        events: Arc<dyn EventStore>,
        directory: Arc<EmployeeDirectory>,
        report_zone: ReportZone,
    ) -> Self {
        Self {
            events,
            directory,
            report_zone,
        }
    }

    /// Returns the event store.
    pub fn events(&self) -> &dyn EventStore {
        self.events.as_ref()
    }

    /// Returns the employee directory.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Returns the zone reports are bucketed in.
    pub fn report_zone(&self) -> ReportZone {
        self.report_zone
    }

    /// Computes daily reports for `events` in the configured zone.
    pub fn compute_reports(&self, events: &[ClockEvent]) -> Vec<DailyReport> {
        match self.report_zone {
            ReportZone::Local => compute_daily_reports(events),
            ReportZone::Fixed(offset) => compute_daily_reports_in(events, &offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Employee};
    use chrono::{FixedOffset, NaiveDate};
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_new_seeds_directory() {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        let state = AppState::new(&config).unwrap();

        assert_eq!(state.directory().list().len(), 3);
        assert!(state.events().list_events().is_empty());
    }

    #[test]
    fn test_compute_reports_uses_configured_zone() {
        let employee = Employee::hourly("emp_001", "Mei", Decimal::from(200));
        // 2026-01-15T16:30:00Z
        let start = 1_768_494_600_000;
        let events = vec![
            ClockEvent::record(&employee, Direction::In, start, None).unwrap(),
            ClockEvent::record(&employee, Direction::Out, start + 3_600_000, None).unwrap(),
        ];

        let directory = Arc::new(EmployeeDirectory::new());
        let plus_eight = ReportZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap());
        let state = AppState::with_parts(Arc::new(InMemoryEventStore::new()), directory.clone(), plus_eight);
        assert_eq!(
            state.compute_reports(&events)[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
        );

        let utc = ReportZone::Fixed(FixedOffset::east_opt(0).unwrap());
        let state = AppState::with_parts(Arc::new(InMemoryEventStore::new()), directory, utc);
        assert_eq!(
            state.compute_reports(&events)[0].date,
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
        );
    }
}
