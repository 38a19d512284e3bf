//! Filter/sort engine for the employee table.
//!
//! [`apply_filters_and_sort`] is a pure, total function: it never fails,
//! never mutates its input, and returns an empty view for an empty input.

mod filter;
mod sort;

pub use filter::{
    matches_active, matches_department, matches_experience_level, matches_filters,
    matches_search_term,
};
pub use sort::{compare_by_field, sort_records};

use crate::models::{Employee, FilterCriteria, SortCriteria};

/// Filters `records` and orders the survivors.
///
/// With no sort field the surviving records keep their input order.
///
/// # Examples
///
/// ```
/// use employee_dashboard::models::{FilterCriteria, SortCriteria};
/// use employee_dashboard::query::apply_filters_and_sort;
///
/// let view = apply_filters_and_sort(&[], &FilterCriteria::default(), SortCriteria::default());
/// assert!(view.is_empty());
/// ```
pub fn apply_filters_and_sort<'a>(
    records: &'a [Employee],
    filters: &FilterCriteria,
    sort: SortCriteria,
) -> Vec<&'a Employee> {
    let mut view: Vec<&Employee> = records
        .iter()
        .filter(|employee| matches_filters(employee, filters))
        .collect();
    sort_records(&mut view, sort);
    view
}
