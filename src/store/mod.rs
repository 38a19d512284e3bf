//! State container for the dashboard.
//!
//! [`EmployeeStore`] holds the canonical records, the table criteria, the
//! derived view and the loading/error flags. It changes only through
//! [`StoreAction`]s passed to [`EmployeeStore::dispatch`].

mod action;
mod state;

pub use action::StoreAction;
pub use state::{EmployeeStore, StoreStatus};
