//! Request types for the payroll engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, Direction, GeoLocation, SalaryMode};

/// Request body for `POST /reports`.
///
/// The events may belong to any number of employees and may arrive in any
/// order. Each carries its own rate snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsRequest {
    /// The clock events to compute reports for.
    pub events: Vec<ClockEvent>,
}

/// Request body for `POST /employees/:id/clock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockRequest {
    /// `IN` or `OUT`.
    pub direction: Direction,
    /// Epoch milliseconds; defaults to the server's current time.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Optional device location.
    #[serde(default)]
    pub location: Option<GeoLocation>,
}

/// Request body for `PUT /employees/:id/pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayUpdateRequest {
    /// The new pay mode.
    pub salary_mode: SalaryMode,
    /// The new hourly rate.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// The new monthly salary.
    #[serde(default)]
    pub monthly_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_reports_request() {
        let json = r#"{
            "events": [
                {
                    "id": "ev_1",
                    "employee_id": "emp_001",
                    "timestamp": 1768438800000,
                    "direction": "IN",
                    "rate": { "salary_mode": "hourly", "hourly_rate": "200", "monthly_salary": "0" }
                },
                {
                    "id": "ev_2",
                    "employee_id": "emp_001",
                    "timestamp": 1768469400000,
                    "direction": "OUT",
                    "location": { "lat": 25.03, "lng": 121.56, "accuracy": 12.0 },
                    "rate": { "salary_mode": "hourly", "hourly_rate": 200 }
                }
            ]
        }"#;

        let request: ReportsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.events.len(), 2);
        assert_eq!(request.events[0].direction, Direction::In);
        assert!(request.events[0].location.is_none());
        assert!(request.events[1].location.is_some());
        assert_eq!(request.events[1].rate.monthly_salary, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_clock_request_minimal() {
        let request: ClockRequest = serde_json::from_str(r#"{ "direction": "OUT" }"#).unwrap();
        assert_eq!(request.direction, Direction::Out);
        assert!(request.timestamp.is_none());
        assert!(request.location.is_none());
    }

    #[test]
    fn test_deserialize_pay_update_request() {
        let request: PayUpdateRequest =
            serde_json::from_str(r#"{ "salary_mode": "monthly", "monthly_salary": "36000" }"#)
                .unwrap();
        assert_eq!(request.salary_mode, SalaryMode::Monthly);
        assert_eq!(request.hourly_rate, Decimal::ZERO);
        assert_eq!(request.monthly_salary, Decimal::from_str("36000").unwrap());
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result: Result<ClockRequest, _> = serde_json::from_str(r#"{ "direction": "LUNCH" }"#);
        assert!(result.is_err());
    }
}
