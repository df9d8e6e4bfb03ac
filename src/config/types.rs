//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::models::Employee;

/// Default listen address when `server.bind_address` is absent.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Report computation settings.
    #[serde(default)]
    pub reports: ReportSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `"0.0.0.0:3000"`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// Report computation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    /// Fixed UTC offset (`"+08:00"`, `"-05:00"`, `"Z"`) used to assign
    /// sessions to calendar dates. `None` means the host's local zone.
    #[serde(default)]
    pub utc_offset: Option<String>,
}

/// Contents of `employees.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeesConfig {
    /// Employees to seed the directory with.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The time zone reports are bucketed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportZone {
    /// The host's local time zone.
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl ReportZone {
    /// Parses an offset string such as `"+08:00"`, `"-0530"` or `"Z"`.
    ///
    /// Returns `None` if the string is not a valid offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::ReportZone;
    /// use chrono::FixedOffset;
    ///
    /// let zone = ReportZone::parse_offset("+08:00").unwrap();
    /// assert_eq!(zone, ReportZone::Fixed(FixedOffset::east_opt(8 * 3600).unwrap()));
    /// assert!(ReportZone::parse_offset("Mars/Olympus").is_none());
    /// ```
    pub fn parse_offset(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0).map(Self::Fixed);
        }
        value.parse::<FixedOffset>().ok().map(Self::Fixed)
    }
}
