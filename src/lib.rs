//! Attendance-to-payroll engine.
//!
//! This crate pairs employee clock-in/clock-out events into work sessions,
//! buckets them by local calendar date, splits each day's minutes into
//! regular and tiered overtime, and estimates daily pay from the rate
//! snapshot carried by each event.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
