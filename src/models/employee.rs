//! Employee model and the derived experience-level bucket.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Department, Role, Skill};

/// Experience bucket derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// Up to 2 years.
    Junior,
    /// 3 to 5 years.
    Mid,
    /// 6 to 8 years.
    Senior,
    /// More than 8 years.
    Expert,
}

impl ExperienceLevel {
    /// Buckets a number of years of experience.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_dashboard::models::ExperienceLevel;
    ///
    /// assert_eq!(ExperienceLevel::from_years(2), ExperienceLevel::Junior);
    /// assert_eq!(ExperienceLevel::from_years(5), ExperienceLevel::Mid);
    /// assert_eq!(ExperienceLevel::from_years(8), ExperienceLevel::Senior);
    /// assert_eq!(ExperienceLevel::from_years(9), ExperienceLevel::Expert);
    /// ```
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=2 => ExperienceLevel::Junior,
            3..=5 => ExperienceLevel::Mid,
            6..=8 => ExperienceLevel::Senior,
            _ => ExperienceLevel::Expert,
        }
    }

    /// Returns the label used by filters and exports.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// The employee's role.
    pub role: Role,
    /// The employee's department.
    pub department: Department,
    /// Years of professional experience.
    pub experience_years: u32,
    /// Free-text specialization labels, in the order they were added.
    #[serde(default)]
    pub specialization: Vec<String>,
    /// Annual salary.
    pub salary: Decimal,
    /// Office location (e.g., "Boston, MA").
    pub location: String,
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Skills, in the order they were selected.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Performance rating between 1 and 5.
    pub performance_rating: f64,
    /// Whether the employee is currently active.
    pub is_active: bool,
}

impl Employee {
    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the experience bucket for this employee.
    pub fn experience_level(&self) -> ExperienceLevel {
        ExperienceLevel::from_years(self.experience_years)
    }
}
