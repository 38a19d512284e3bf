//! Configuration types for the employee dashboard.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a configuration directory.

use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_EXPORT_FIELDS;
use crate::models::{Department, ReferenceCatalog, Role, Skill};

/// departments.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// Every known department.
    pub departments: Vec<Department>,
}

/// roles.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RolesConfig {
    /// Every known role.
    pub roles: Vec<Role>,
}

/// skills.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillsConfig {
    /// Every known skill.
    pub skills: Vec<Skill>,
}

/// export.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Export settings.
    #[serde(default)]
    pub export: ExportSettings,
}

/// Settings for generated export files.
///
/// Every field may be omitted in YAML; omitted fields take the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File name prefix (`<prefix>_<timestamp>.<ext>`).
    pub filename_prefix: String,
    /// Worksheet name in XLSX exports.
    pub sheet_name: String,
    /// Default number of preview rows.
    pub preview_rows: usize,
    /// Minimum XLSX column width in characters.
    pub min_column_width: u16,
    /// Field keys used by quick exports.
    pub default_fields: Vec<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_prefix: "employees".to_string(),
            sheet_name: "Employees".to_string(),
            preview_rows: 5,
            min_column_width: 15,
            default_fields: DEFAULT_EXPORT_FIELDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The complete dashboard configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct DashboardConfig {
    /// Reference collections employees are resolved against.
    catalog: ReferenceCatalog,
    /// Export settings.
    export: ExportSettings,
}

impl DashboardConfig {
    /// Creates a configuration from its parts.
    pub fn new(catalog: ReferenceCatalog, export: ExportSettings) -> Self {
        Self { catalog, export }
    }

    /// Returns the reference catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportSettings {
        &self.export
    }
}
