//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod daily_report;
mod employee;
mod work_session;

pub use clock_event::{ClockEvent, Direction, GeoLocation, RateSnapshot};
pub use daily_report::{DailyReport, PayrollSummary, ReportBatch};
pub use employee::{Employee, SalaryMode};
pub use work_session::WorkSession;
