//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Department, MAX_PROFICIENCY, MIN_PROFICIENCY, ReferenceCatalog, Role, Skill,
};

use super::types::{
    DashboardConfig, DepartmentsConfig, ExportConfig, ExportSettings, RolesConfig, SkillsConfig,
};

/// Loads and provides access to the dashboard configuration.
///
/// # Directory Structure
///
/// ```text
/// config/dashboard/
/// ├── departments.yaml   # Department reference list
/// ├── roles.yaml         # Role reference list
/// ├── skills.yaml        # Skill reference list
/// └── export.yaml        # Export file settings
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard").unwrap();
/// let department = loader.get_department("2").unwrap();
/// println!("Department: {}", department.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or violates a catalog rule (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();

        let departments_path = path.join("departments.yaml");
        let departments = Self::load_yaml::<DepartmentsConfig>(&departments_path)?.departments;
        Self::check_unique_ids(&departments_path, departments.iter().map(|d| d.id.as_str()))?;

        let roles_path = path.join("roles.yaml");
        let roles = Self::load_yaml::<RolesConfig>(&roles_path)?.roles;
        Self::check_unique_ids(&roles_path, roles.iter().map(|r| r.id.as_str()))?;

        let skills_path = path.join("skills.yaml");
        let skills = Self::load_yaml::<SkillsConfig>(&skills_path)?.skills;
        Self::check_unique_ids(&skills_path, skills.iter().map(|s| s.id.as_str()))?;
        Self::check_proficiency(&skills_path, &skills)?;

        let export = Self::load_yaml::<ExportConfig>(&path.join("export.yaml"))?.export;

        info!(
            path = %path.display(),
            departments = departments.len(),
            roles = roles.len(),
            skills = skills.len(),
            "Loaded dashboard configuration"
        );

        let catalog = ReferenceCatalog::new(departments, roles, skills);
        Ok(Self {
            config: DashboardConfig::new(catalog, export),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DashboardResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DashboardError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_unique_ids<'a>(
        path: &Path,
        ids: impl Iterator<Item = &'a str>,
    ) -> DashboardResult<()> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(DashboardError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate id '{}'", id),
                });
            }
        }
        Ok(())
    }

    fn check_proficiency(path: &Path, skills: &[Skill]) -> DashboardResult<()> {
        match skills
            .iter()
            .find(|s| !(MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&s.proficiency))
        {
            Some(skill) => Err(DashboardError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "skill '{}' has proficiency {}, expected {}-{}",
                    skill.id, skill.proficiency, MIN_PROFICIENCY, MAX_PROFICIENCY
                ),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns the reference catalog.
    pub fn catalog(&self) -> &ReferenceCatalog {
        self.config.catalog()
    }

    /// Returns the export settings.
    pub fn export_settings(&self) -> &ExportSettings {
        self.config.export()
    }

    /// Gets a department by id.
    pub fn get_department(&self, id: &str) -> DashboardResult<&Department> {
        self.catalog().department(id)
    }

    /// Gets a role by id.
    pub fn get_role(&self, id: &str) -> DashboardResult<&Role> {
        self.catalog().role(id)
    }

    /// Gets a skill by id.
    pub fn get_skill(&self, id: &str) -> DashboardResult<&Skill> {
        self.catalog().skill(id)
    }
}
