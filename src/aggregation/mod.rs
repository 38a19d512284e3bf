//! Aggregation engine for dashboard cards and charts.
//!
//! Every computation is a pure function over whatever collection the caller
//! passes in (canonical records or the filtered view). Empty input yields
//! zero counts and zero averages, never NaN.

mod department_metrics;
mod distribution;
mod scatter;
mod summary;

pub use department_metrics::{DepartmentMetrics, department_metrics};
pub use distribution::{
    DepartmentShare, SALARY_BRACKETS, SalaryBracket, SalaryBucket, department_distribution,
    salary_distribution,
};
pub use scatter::{ScatterPoint, scatter_points};
pub use summary::{DepartmentCount, SummaryMetrics, summary_metrics};

use crate::models::Employee;

/// Groups employees by department name, in order of first appearance.
pub(crate) fn group_by_department(records: &[Employee]) -> Vec<(&str, Vec<&Employee>)> {
    let mut groups: Vec<(&str, Vec<&Employee>)> = Vec::new();
    for employee in records {
        let name = employee.department.name.as_str();
        match groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, members)) => members.push(employee),
            None => groups.push((name, vec![employee])),
        }
    }
    groups
}

/// `part / total` as a percentage rounded to one decimal; zero when `total` is zero.
pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 / total as f64 * 100.0)
}

/// Rounds half away from zero to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean, zero for an empty input.
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
