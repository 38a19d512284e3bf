//! Filter predicates. All active filters must match (AND semantics).

use crate::models::{Employee, FilterCriteria};

/// Returns true if `employee` passes every active filter in `filters`.
pub fn matches_filters(employee: &Employee, filters: &FilterCriteria) -> bool {
    matches_department(employee, &filters.department)
        && matches_experience_level(employee, &filters.experience_level)
        && matches_search_term(employee, &filters.search_term)
        && matches_active(employee, filters.is_active)
}

/// Exact match on department name; an empty name matches everyone.
pub fn matches_department(employee: &Employee, department: &str) -> bool {
    department.is_empty() || employee.department.name == department
}

/// Exact match on the derived experience-level label; empty matches everyone.
pub fn matches_experience_level(employee: &Employee, level: &str) -> bool {
    level.is_empty() || employee.experience_level().label() == level
}

/// Case-insensitive substring match against first name, last name, email or role title.
pub fn matches_search_term(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
        employee.role.title.as_str(),
    ]
    .iter()
    .any(|candidate| candidate.to_lowercase().contains(&term))
}

/// Exact match on the active flag when the filter is set.
pub fn matches_active(employee: &Employee, is_active: Option<bool>) -> bool {
    is_active.is_none_or(|wanted| employee.is_active == wanted)
}
