//! The backing record source.
//!
//! The dashboard never owns persistence. It talks to a [`RecordSource`], an
//! asynchronous collaborator that lists, creates, updates and deletes
//! employees and serves the reference lists. [`InMemoryRecordSource`] is the
//! bundled implementation, seeded from configuration or sample data.

mod memory;
mod sample;

use std::future::Future;

use crate::error::DashboardResult;
use crate::models::{Department, Employee, EmployeeForm, EmployeeUpdate, Role, Skill};

pub use memory::InMemoryRecordSource;
pub use sample::generate_sample_employees;

/// Asynchronous access to stored employees and reference data.
///
/// Failures other than `EmployeeNotFound` and validation errors are opaque to
/// the dashboard and reported as a store-wide error.
pub trait RecordSource {
    /// Lists every stored employee.
    fn list_all(&self) -> impl Future<Output = DashboardResult<Vec<Employee>>> + Send;

    /// Fetches one employee, or `None` if the id is unknown.
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = DashboardResult<Option<Employee>>> + Send;

    /// Stores a new employee built from a validated form and returns it with
    /// its assigned id.
    fn create(&self, form: EmployeeForm) -> impl Future<Output = DashboardResult<Employee>> + Send;

    /// Applies a partial update and returns the merged employee.
    fn update(
        &self,
        id: &str,
        update: EmployeeUpdate,
    ) -> impl Future<Output = DashboardResult<Employee>> + Send;

    /// Removes an employee.
    fn delete(&self, id: &str) -> impl Future<Output = DashboardResult<()>> + Send;

    /// Lists the known departments.
    fn departments(&self) -> impl Future<Output = DashboardResult<Vec<Department>>> + Send;

    /// Lists the known roles.
    fn roles(&self) -> impl Future<Output = DashboardResult<Vec<Role>>> + Send;

    /// Lists the known skills.
    fn skills(&self) -> impl Future<Output = DashboardResult<Vec<Skill>>> + Send;
}
