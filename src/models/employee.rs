//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct and [`SalaryMode`] enum. An
//! employee's pay configuration is only ever read when a new clock event is
//! recorded; past events carry their own frozen copy (see
//! [`RateSnapshot`](super::RateSnapshot)).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::RateSnapshot;

/// How an employee's pay is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMode {
    /// Paid per hour at `hourly_rate`.
    Hourly,
    /// Paid a fixed `monthly_salary`, converted to an hourly figure for daily estimates.
    Monthly,
}

/// Represents an employee whose attendance is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// The current pay mode.
    pub salary_mode: SalaryMode,
    /// The current hourly rate (used when `salary_mode` is hourly).
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// The current monthly salary (used when `salary_mode` is monthly).
    #[serde(default)]
    pub monthly_salary: Decimal,
}

impl Employee {
    /// Creates an hourly-paid employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, SalaryMode};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::hourly("emp_001", "Mei", Decimal::from(200));
    /// assert_eq!(employee.salary_mode, SalaryMode::Hourly);
    /// assert_eq!(employee.monthly_salary, Decimal::ZERO);
    /// ```
    pub fn hourly(id: impl Into<String>, name: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary_mode: SalaryMode::Hourly,
            hourly_rate,
            monthly_salary: Decimal::ZERO,
        }
    }

    /// Creates a monthly-salaried employee.
    pub fn monthly(id: impl Into<String>, name: impl Into<String>, monthly_salary: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary_mode: SalaryMode::Monthly,
            hourly_rate: Decimal::ZERO,
            monthly_salary,
        }
    }

    /// Freezes the employee's current pay configuration.
    ///
    /// The returned value is copied into each new clock event and is never
    /// re-read from the employee afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, SalaryMode};
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee::hourly("emp_001", "Mei", Decimal::from(200));
    /// let snapshot = employee.rate_snapshot();
    ///
    /// employee.hourly_rate = Decimal::from(250);
    /// assert_eq!(snapshot.hourly_rate, Decimal::from(200));
    /// assert_eq!(snapshot.salary_mode, SalaryMode::Hourly);
    /// ```
    pub fn rate_snapshot(&self) -> RateSnapshot {
        RateSnapshot {
            salary_mode: self.salary_mode,
            hourly_rate: self.hourly_rate,
            monthly_salary: self.monthly_salary,
        }
    }

    /// Checks that the record can be used to stamp new clock events.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the id is blank or either
    /// rate is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: format!("must not be negative, got {}", self.hourly_rate),
            });
        }
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "monthly_salary".to_string(),
                message: format!("must not be negative, got {}", self.monthly_salary),
            });
        }
        Ok(())
    }
}
