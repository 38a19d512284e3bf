//! Chart groupings: headcount per department and per salary bracket.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Employee;

use super::{group_by_department, percentage};

/// One department's share of the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentShare {
    /// Department name.
    pub name: String,
    /// Number of employees.
    pub count: usize,
    /// Share of the collection, one decimal.
    pub percentage: f64,
}

/// Department headcounts with their share of the collection.
pub fn department_distribution(records: &[Employee]) -> Vec<DepartmentShare> {
    let total = records.len();
    group_by_department(records)
        .into_iter()
        .map(|(name, members)| DepartmentShare {
            name: name.to_string(),
            count: members.len(),
            percentage: percentage(members.len(), total),
        })
        .collect()
}

/// A half-open salary range `[min, max)`; `max` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBracket {
    /// Chart label.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: i64,
    /// Exclusive upper bound.
    pub max: Option<i64>,
}

impl SalaryBracket {
    /// Returns true if `salary` falls inside this bracket.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= Decimal::from(self.min) && self.max.is_none_or(|max| salary < Decimal::from(max))
    }
}

/// Fixed salary brackets, lowest first.
pub const SALARY_BRACKETS: [SalaryBracket; 5] = [
    SalaryBracket {
        label: "$40k-60k",
        min: 40_000,
        max: Some(60_000),
    },
    SalaryBracket {
        label: "$60k-80k",
        min: 60_000,
        max: Some(80_000),
    },
    SalaryBracket {
        label: "$80k-100k",
        min: 80_000,
        max: Some(100_000),
    },
    SalaryBracket {
        label: "$100k-120k",
        min: 100_000,
        max: Some(120_000),
    },
    SalaryBracket {
        label: "$120k+",
        min: 120_000,
        max: None,
    },
];

/// Headcount of one salary bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBucket {
    /// Bracket label.
    pub range: String,
    /// Number of employees in the bracket.
    pub count: usize,
    /// Share of the whole collection, one decimal.
    pub percentage: f64,
}

/// Counts employees per salary bracket, omitting empty brackets.
///
/// Salaries below the lowest bracket are not counted anywhere, but still
/// count toward the total used for percentages.
pub fn salary_distribution(records: &[Employee]) -> Vec<SalaryBucket> {
    let total = records.len();
    SALARY_BRACKETS
        .iter()
        .filter_map(|bracket| {
            let count = records.iter().filter(|e| bracket.contains(e.salary)).count();
            (count > 0).then(|| SalaryBucket {
                range: bracket.label.to_string(),
                count,
                percentage: percentage(count, total),
            })
        })
        .collect()
}
