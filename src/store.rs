//! In-memory collaborators for the payroll engine.
//!
//! The calculator itself is pure; these types hold the clock events and the
//! current employee pay configuration that the HTTP layer reads and writes.
//! Nothing here is durable.

use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockEvent, Employee, SalaryMode};

/// Source and sink of recorded clock events.
pub trait EventStore: Send + Sync {
    /// Returns every stored event in insertion order.
    fn list_events(&self) -> Vec<ClockEvent>;

    /// Returns the events belonging to one employee, in insertion order.
    fn list_events_for(&self, employee_id: &str) -> Vec<ClockEvent>;

    /// Appends an event.
    fn append(&self, event: ClockEvent);
}

/// An [`EventStore`] backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<ClockEvent>>,
}

impl InMemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if no events are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventStore for InMemoryEventStore {
    fn list_events(&self) -> Vec<ClockEvent> {
        self.events.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn list_events_for(&self, employee_id: &str) -> Vec<ClockEvent> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|event| event.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn append(&self, event: ClockEvent) {
        self.events
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

/// Current pay configuration per employee.
///
/// Changes made here never touch previously recorded events; those carry
/// their own [`RateSnapshot`](crate::models::RateSnapshot).
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: RwLock<HashMap<String, Employee>>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with `employees`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidEmployee` for the first employee that
    /// fails validation.
    pub fn from_employees(employees: impl IntoIterator<Item = Employee>) -> EngineResult<Self> {
        let directory = Self::new();
        for employee in employees {
            directory.upsert(employee)?;
        }
        Ok(directory)
    }

    /// Looks up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmployeeNotFound` if the id is unknown.
    pub fn get(&self, id: &str) -> EngineResult<Employee> {
        self.employees
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Returns all employees ordered by id.
    pub fn list(&self) -> Vec<Employee> {
        let mut employees: Vec<Employee> = self
            .employees
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        employees
    }

    /// Inserts or replaces an employee.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidEmployee` if the employee fails
    /// validation; the directory is left unchanged.
    pub fn upsert(&self, employee: Employee) -> EngineResult<()> {
        employee.validate()?;
        self.employees
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Replaces an employee's current pay configuration and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmployeeNotFound` for an unknown id, or
    /// `EngineError::InvalidEmployee` if the new figures are negative. In
    /// both cases the stored record is unchanged.
    pub fn update_pay(
        &self,
        id: &str,
        salary_mode: SalaryMode,
        hourly_rate: Decimal,
        monthly_salary: Decimal,
    ) -> EngineResult<Employee> {
        let mut employees = self.employees.write().unwrap_or_else(|e| e.into_inner());
        let current = employees
            .get(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;

        let updated = Employee {
            salary_mode,
            hourly_rate,
            monthly_salary,
            ..current.clone()
        };
        updated.validate()?;

        employees.insert(id.to_string(), updated.clone());
        Ok(updated)
    }
}
