//! Experience-versus-salary scatter points.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Employee;

/// One employee on the experience/salary chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Years of experience (x axis).
    pub experience: u32,
    /// Salary (y axis).
    pub salary: Decimal,
    /// Full name for the tooltip.
    pub name: String,
    /// Department name, used for colouring.
    pub department: String,
    /// Performance rating.
    pub rating: f64,
}

/// Projects each employee onto a scatter point, preserving order.
pub fn scatter_points(records: &[Employee]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|e| ScatterPoint {
            experience: e.experience_years,
            salary: e.salary,
            name: e.full_name(),
            department: e.department.name.clone(),
            rating: e.performance_rating,
        })
        .collect()
}
