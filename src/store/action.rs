//! Store transitions.

use crate::models::{Employee, FilterUpdate, SortCriteria};

/// A request to change the store. Every transition the store supports is a
/// variant here, and [`EmployeeStore::dispatch`](super::EmployeeStore::dispatch)
/// matches on them exhaustively.
#[derive(Debug, Clone)]
pub enum StoreAction {
    /// Replace the canonical records wholesale.
    Load(Vec<Employee>),
    /// Append a new record.
    Add(Employee),
    /// Replace the record with the same id.
    Update(Employee),
    /// Remove the record with the given id.
    Delete(String),
    /// Merge a partial filter change into the current filters.
    SetFilters(FilterUpdate),
    /// Replace the current sort.
    SetSort(SortCriteria),
    /// Set the loading flag.
    SetLoading(bool),
    /// Set or clear the store-wide error.
    SetError(Option<String>),
}

impl StoreAction {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::Load(_) => "load",
            StoreAction::Add(_) => "add",
            StoreAction::Update(_) => "update",
            StoreAction::Delete(_) => "delete",
            StoreAction::SetFilters(_) => "set_filters",
            StoreAction::SetSort(_) => "set_sort",
            StoreAction::SetLoading(_) => "set_loading",
            StoreAction::SetError(_) => "set_error",
        }
    }

    /// Returns true when the transition changes records or criteria, so the
    /// derived view has to be recomputed afterwards.
    pub fn affects_view(&self) -> bool {
        !matches!(self, StoreAction::SetLoading(_) | StoreAction::SetError(_))
    }
}
