//! An in-process record source.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{
    Department, Employee, EmployeeForm, EmployeeUpdate, ReferenceCatalog, Role, Skill,
};

use super::RecordSource;

/// Keeps employees in memory behind a [`RwLock`] and resolves form
/// references against a fixed catalog. New employees get a UUID v4 id.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    catalog: ReferenceCatalog,
    records: RwLock<Vec<Employee>>,
}

impl InMemoryRecordSource {
    /// Creates an empty source over `catalog`.
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self::with_records(catalog, Vec::new())
    }

    /// Creates a source over `catalog` holding `records`.
    pub fn with_records(catalog: ReferenceCatalog, records: Vec<Employee>) -> Self {
        Self {
            catalog,
            records: RwLock::new(records),
        }
    }

    /// Creates an empty source over the catalog of a loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.catalog().clone())
    }

    /// The catalog form references are resolved against.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Number of stored employees.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl RecordSource for InMemoryRecordSource {
    async fn list_all(&self) -> DashboardResult<Vec<Employee>> {
        Ok(self.records.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> DashboardResult<Option<Employee>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|employee| employee.id == id).cloned())
    }

    async fn create(&self, form: EmployeeForm) -> DashboardResult<Employee> {
        let employee = form.into_employee(Uuid::new_v4().to_string(), &self.catalog)?;
        self.records.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: &str, update: EmployeeUpdate) -> DashboardResult<Employee> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| DashboardError::EmployeeNotFound { id: id.to_string() })?;
        let updated = update.apply_to(slot, &self.catalog)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> DashboardResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| DashboardError::EmployeeNotFound { id: id.to_string() })?;
        records.remove(index);
        Ok(())
    }

    async fn departments(&self) -> DashboardResult<Vec<Department>> {
        Ok(self.catalog.departments.clone())
    }

    async fn roles(&self) -> DashboardResult<Vec<Role>> {
        Ok(self.catalog.roles.clone())
    }

    async fn skills(&self) -> DashboardResult<Vec<Skill>> {
        Ok(self.catalog.skills.clone())
    }
}
