//! Employee ordering.
//!
//! Text columns compare case-insensitively, department and role compare by
//! their display name, and numbers and dates use their natural order.

use std::cmp::Ordering;

use crate::models::{Employee, SortCriteria, SortDirection, SortField};

/// Compares two employees on `field` in ascending order.
pub fn compare_by_field(a: &Employee, b: &Employee, field: SortField) -> Ordering {
    match field {
        SortField::Id => compare_text(&a.id, &b.id),
        SortField::FirstName => compare_text(&a.first_name, &b.first_name),
        SortField::LastName => compare_text(&a.last_name, &b.last_name),
        SortField::Email => compare_text(&a.email, &b.email),
        SortField::Role => compare_text(&a.role.title, &b.role.title),
        SortField::Department => compare_text(&a.department.name, &b.department.name),
        SortField::ExperienceYears => a.experience_years.cmp(&b.experience_years),
        SortField::Salary => a.salary.cmp(&b.salary),
        SortField::Location => compare_text(&a.location, &b.location),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::PerformanceRating => a.performance_rating.total_cmp(&b.performance_rating),
        SortField::IsActive => a.is_active.cmp(&b.is_active),
    }
}

/// Sorts `records` in place. Stable; without a field the order is untouched.
pub fn sort_records(records: &mut [&Employee], sort: SortCriteria) {
    let Some(field) = sort.field else {
        return;
    };
    records.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
