//! Configuration loading and management for the payroll engine.
//!
//! This module loads server settings, the reporting time zone, and the
//! employee roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Bind address: {}", config.settings().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDRESS, EmployeesConfig, ReportSettings, ReportZone, ServerSettings, Settings,
};
