//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! settings and employee roster from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{EmployeesConfig, ReportZone, Settings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── settings.yaml   # Server address, reporting offset
/// └── employees.yaml  # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Listening on {}", loader.settings().server.bind_address);
/// println!("{} employees", loader.employees().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
    employees: Vec<Employee>,
    report_zone: ReportZone,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - `reports.utc_offset` is not a valid offset (`ConfigParseError`)
    /// - An employee fails validation or an id is repeated (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<Settings>(&settings_path)?;

        let report_zone = match settings.reports.utc_offset.as_deref() {
            None => ReportZone::Local,
            Some(offset) => {
                ReportZone::parse_offset(offset).ok_or_else(|| EngineError::ConfigParseError {
                    path: settings_path.display().to_string(),
                    message: format!("invalid reports.utc_offset '{}'", offset),
                })?
            }
        };

        let employees_path = path.join("employees.yaml");
        let employees = Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees;
        Self::check_employees(&employees, &employees_path)?;

        Ok(Self {
            settings,
            employees,
            report_zone,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_employees(employees: &[Employee], path: &Path) -> EngineResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            let parse_error = |message: String| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            };

            employee
                .validate()
                .map_err(|e| parse_error(format!("employee '{}': {}", employee.id, e)))?;

            if !seen.insert(employee.id.as_str()) {
                return Err(parse_error(format!("duplicate employee id '{}'", employee.id)));
            }
        }
        Ok(())
    }

    /// Returns the parsed settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the employee roster in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the time zone reports are bucketed in.
    pub fn report_zone(&self) -> ReportZone {
        self.report_zone
    }
}
