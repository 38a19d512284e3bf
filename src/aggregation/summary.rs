//! Headline metrics for the dashboard summary cards.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Employee;

use super::{group_by_department, mean, percentage};

/// Number of employees in one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    /// Department name.
    pub name: String,
    /// Number of employees.
    pub count: usize,
}

/// Summary metrics over an employee collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Number of employees.
    pub total_employees: usize,
    /// Number of active employees.
    pub active_employees: usize,
    /// Share of active employees, one decimal.
    pub active_percentage: f64,
    /// Mean salary.
    pub average_salary: Decimal,
    /// Mean years of experience.
    pub average_experience: f64,
    /// Mean performance rating.
    pub average_rating: f64,
    /// Employees per department, in order of first appearance.
    pub department_counts: Vec<DepartmentCount>,
    /// The largest department; ties go to the one seen first.
    pub top_department: Option<DepartmentCount>,
}

/// Computes the summary metrics for `records`.
pub fn summary_metrics(records: &[Employee]) -> SummaryMetrics {
    let total_employees = records.len();
    let active_employees = records.iter().filter(|e| e.is_active).count();

    let average_salary = if total_employees == 0 {
        Decimal::ZERO
    } else {
        let total: Decimal = records.iter().map(|e| e.salary).sum();
        total / Decimal::from(total_employees)
    };

    let department_counts: Vec<DepartmentCount> = group_by_department(records)
        .into_iter()
        .map(|(name, members)| DepartmentCount {
            name: name.to_string(),
            count: members.len(),
        })
        .collect();

    let mut top_department: Option<&DepartmentCount> = None;
    for candidate in &department_counts {
        if top_department.is_none_or(|top| candidate.count > top.count) {
            top_department = Some(candidate);
        }
    }
    let top_department = top_department.cloned();

    SummaryMetrics {
        total_employees,
        active_employees,
        active_percentage: percentage(active_employees, total_employees),
        average_salary,
        average_experience: mean(records.iter().map(|e| f64::from(e.experience_years))),
        average_rating: mean(records.iter().map(|e| e.performance_rating)),
        department_counts,
        top_department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{create_test_employee, in_department, with_salary};

    #[test]
    fn test_empty_collection_reports_zeros() {
        let metrics = summary_metrics(&[]);
        assert_eq!(metrics.total_employees, 0);
        assert_eq!(metrics.active_employees, 0);
        assert_eq!(metrics.active_percentage, 0.0);
        assert_eq!(metrics.average_salary, Decimal::ZERO);
        assert_eq!(metrics.average_experience, 0.0);
        assert_eq!(metrics.average_rating, 0.0);
        assert!(metrics.department_counts.is_empty());
        assert_eq!(metrics.top_department, None);
    }

    #[test]
    fn test_averages_and_active_share() {
        let mut a = with_salary(create_test_employee("1", "A", "A"), 60_000);
        a.experience_years = 2;
        a.performance_rating = 3.0;
        let mut b = with_salary(create_test_employee("2", "B", "B"), 90_000);
        b.experience_years = 6;
        b.performance_rating = 4.5;
        b.is_active = false;

        let metrics = summary_metrics(&[a, b]);
        assert_eq!(metrics.total_employees, 2);
        assert_eq!(metrics.active_employees, 1);
        assert_eq!(metrics.active_percentage, 50.0);
        assert_eq!(metrics.average_salary, Decimal::new(75_000, 0));
        assert_eq!(metrics.average_experience, 4.0);
        assert_eq!(metrics.average_rating, 3.75);
    }

    #[test]
    fn test_top_department_is_largest() {
        let records = vec![
            in_department(create_test_employee("1", "A", "A"), "4", "Manufacturing"),
            in_department(create_test_employee("2", "B", "B"), "2", "Clinical Research"),
            in_department(create_test_employee("3", "C", "C"), "2", "Clinical Research"),
        ];
        let metrics = summary_metrics(&records);
        assert_eq!(
            metrics.top_department,
            Some(DepartmentCount {
                name: "Clinical Research".to_string(),
                count: 2
            })
        );
        assert_eq!(metrics.department_counts.len(), 2);
    }

    #[test]
    fn test_top_department_tie_goes_to_first_seen() {
        let records = vec![
            in_department(create_test_employee("1", "A", "A"), "4", "Manufacturing"),
            in_department(create_test_employee("2", "B", "B"), "2", "Clinical Research"),
        ];
        let metrics = summary_metrics(&records);
        assert_eq!(metrics.top_department.unwrap().name, "Manufacturing");
    }
}
