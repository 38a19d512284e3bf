//! Per-department averages for the comparison chart.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::Employee;

use super::{group_by_department, mean, round_to_tenth};

/// Averages for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentMetrics {
    /// Department name.
    pub name: String,
    /// Mean salary rounded to a whole amount.
    pub avg_salary: Decimal,
    /// Mean years of experience, one decimal.
    pub avg_experience: f64,
    /// Mean performance rating, one decimal.
    pub avg_rating: f64,
    /// Number of employees.
    pub count: usize,
}

/// Computes averages for every department present in `records`.
pub fn department_metrics(records: &[Employee]) -> Vec<DepartmentMetrics> {
    group_by_department(records)
        .into_iter()
        .map(|(name, members)| {
            let count = members.len();
            let total_salary: Decimal = members.iter().map(|e| e.salary).sum();
            let avg_salary = (total_salary / Decimal::from(count))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

            DepartmentMetrics {
                name: name.to_string(),
                avg_salary,
                avg_experience: round_to_tenth(mean(
                    members.iter().map(|e| f64::from(e.experience_years)),
                )),
                avg_rating: round_to_tenth(mean(members.iter().map(|e| e.performance_rating))),
                count,
            }
        })
        .collect()
}
