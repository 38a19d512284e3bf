//! Configuration loading and management for the employee dashboard.
//!
//! This module loads the department, role and skill reference lists and the
//! export settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use employee_dashboard::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dashboard").unwrap();
//! println!("Known departments: {}", config.catalog().departments.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DashboardConfig, DepartmentsConfig, ExportConfig, ExportSettings, RolesConfig, SkillsConfig,
};
