//! The employee store.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Employee, FilterCriteria, SortCriteria};
use crate::query::apply_filters_and_sort;

use super::StoreAction;

/// What the dashboard should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus<'a> {
    /// A load is in flight.
    Loading,
    /// A store-wide error halts normal rendering.
    Failed(&'a str),
    /// Records and the derived view are ready.
    Ready,
}

/// The single mutation point for employee records and table criteria.
///
/// The derived view is only ever written by [`EmployeeStore::refresh_view`],
/// which runs after every transition that touches records, filters or sort.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    records: Vec<Employee>,
    filters: FilterCriteria,
    sort: SortCriteria,
    view: Vec<Employee>,
    loading: bool,
    error: Option<String>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical records.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    /// The current filters.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// The current sort.
    pub fn sort(&self) -> SortCriteria {
        self.sort
    }

    /// The filtered and sorted view.
    pub fn view(&self) -> &[Employee] {
        &self.view
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The store-wide error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Finds a canonical record by id.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == id)
    }

    /// Returns true when a canonical record has the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Reports what to render. An error wins over an in-flight load.
    pub fn status(&self) -> StoreStatus<'_> {
        match (&self.error, self.loading) {
            (Some(message), _) => StoreStatus::Failed(message.as_str()),
            (None, true) => StoreStatus::Loading,
            (None, false) => StoreStatus::Ready,
        }
    }

    /// Applies a transition.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmployee` when `Load` carries a repeated id or `Add` reuses one
    /// - `EmployeeNotFound` when `Update` or `Delete` names an unknown id
    ///
    /// A rejected transition leaves the store unchanged.
    pub fn dispatch(&mut self, action: StoreAction) -> DashboardResult<()> {
        let name = action.name();
        let affects_view = action.affects_view();

        match action {
            StoreAction::Load(records) => {
                check_unique(&records)?;
                self.records = records;
                self.loading = false;
                self.error = None;
            }
            StoreAction::Add(employee) => {
                if self.contains(&employee.id) {
                    return Err(DashboardError::DuplicateEmployee { id: employee.id });
                }
                self.records.push(employee);
            }
            StoreAction::Update(employee) => {
                let slot = self
                    .records
                    .iter_mut()
                    .find(|existing| existing.id == employee.id)
                    .ok_or_else(|| DashboardError::EmployeeNotFound {
                        id: employee.id.clone(),
                    })?;
                *slot = employee;
            }
            StoreAction::Delete(id) => {
                let index = self
                    .records
                    .iter()
                    .position(|employee| employee.id == id)
                    .ok_or(DashboardError::EmployeeNotFound { id })?;
                self.records.remove(index);
            }
            StoreAction::SetFilters(update) => self.filters.merge(update),
            StoreAction::SetSort(sort) => self.sort = sort,
            StoreAction::SetLoading(loading) => self.loading = loading,
            StoreAction::SetError(error) => {
                if error.is_some() {
                    self.loading = false;
                }
                self.error = error;
            }
        }

        if affects_view {
            self.refresh_view();
        }

        debug!(
            action = name,
            records = self.records.len(),
            view = self.view.len(),
            "Store action applied"
        );
        Ok(())
    }

    fn refresh_view(&mut self) {
        self.view = apply_filters_and_sort(&self.records, &self.filters, self.sort)
            .into_iter()
            .cloned()
            .collect();
    }
}

fn check_unique(records: &[Employee]) -> DashboardResult<()> {
    let mut seen = HashSet::new();
    match records.iter().find(|employee| !seen.insert(employee.id.as_str())) {
        Some(duplicate) => Err(DashboardError::DuplicateEmployee {
            id: duplicate.id.clone(),
        }),
        None => Ok(()),
    }
}
