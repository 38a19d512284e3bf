//! Form payloads for creating and editing employees.
//!
//! Forms carry reference ids rather than resolved entities. Validation
//! collects every failing rule before anything is resolved or stored, so a
//! rejected form never partially applies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardResult, FieldErrors};

use super::{Employee, ReferenceCatalog};

/// Maximum accepted years of experience.
pub const MAX_EXPERIENCE_YEARS: i32 = 50;
/// Lowest performance rating.
pub const MIN_RATING: f64 = 1.0;
/// Highest performance rating.
pub const MAX_RATING: f64 = 5.0;

/// Payload for creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// Id of the role in the reference catalog.
    pub role_id: String,
    /// Id of the department in the reference catalog.
    pub department_id: String,
    /// Years of experience (0 to 50).
    pub experience_years: i32,
    /// Specialization labels.
    #[serde(default)]
    pub specialization: Vec<String>,
    /// Annual salary, must be positive.
    pub salary: Decimal,
    /// Office location.
    pub location: String,
    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,
    /// Ids of the selected skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Performance rating (1 to 5).
    pub performance_rating: f64,
    /// Whether the employee is active.
    pub is_active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role_id: String::new(),
            department_id: String::new(),
            experience_years: 0,
            specialization: Vec::new(),
            salary: Decimal::ZERO,
            location: String::new(),
            start_date: String::new(),
            skills: Vec::new(),
            performance_rating: 3.0,
            is_active: true,
        }
    }
}

impl EmployeeForm {
    /// Pre-fills a form from an existing employee for editing.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            role_id: employee.role.id.clone(),
            department_id: employee.department.id.clone(),
            experience_years: i32::try_from(employee.experience_years).unwrap_or(i32::MAX),
            specialization: employee.specialization.clone(),
            salary: employee.salary,
            location: employee.location.clone(),
            start_date: employee.start_date.format("%Y-%m-%d").to_string(),
            skills: employee.skills.iter().map(|s| s.id.clone()).collect(),
            performance_rating: employee.performance_rating,
            is_active: employee.is_active,
        }
    }

    /// Checks every field rule and reports all failures at once.
    pub fn validate(&self) -> DashboardResult<()> {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "firstName", "First name", &self.first_name);
        check_required(&mut errors, "lastName", "Last name", &self.last_name);
        check_email(&mut errors, &self.email);
        check_required_id(&mut errors, "roleId", "Role", &self.role_id);
        check_required_id(&mut errors, "departmentId", "Department", &self.department_id);
        check_experience(&mut errors, self.experience_years);
        check_salary(&mut errors, self.salary);
        check_required(&mut errors, "location", "Location", &self.location);
        check_start_date(&mut errors, &self.start_date);
        check_rating(&mut errors, self.performance_rating);
        errors.into_result()
    }

    /// Validates the form, resolves its references and builds the employee.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if any field rule fails
    /// - `UnresolvedReference` if the department, role or any skill id is unknown
    pub fn into_employee(
        self,
        id: String,
        catalog: &ReferenceCatalog,
    ) -> DashboardResult<Employee> {
        self.validate()?;

        let department = catalog.department(&self.department_id)?.clone();
        let role = catalog.role(&self.role_id)?.clone();
        let skills = catalog.skills_for(&self.skills)?;
        let start_date = parse_date(&self.start_date).unwrap_or_default();

        Ok(Employee {
            id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role,
            department,
            experience_years: self.experience_years.unsigned_abs(),
            specialization: clean_specializations(self.specialization),
            salary: self.salary,
            location: self.location.trim().to_string(),
            start_date,
            skills,
            performance_rating: self.performance_rating,
            is_active: self.is_active,
        })
    }
}

/// Partial payload for editing an employee. Omitted fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New role id.
    #[serde(default)]
    pub role_id: Option<String>,
    /// New department id.
    #[serde(default)]
    pub department_id: Option<String>,
    /// New years of experience.
    #[serde(default)]
    pub experience_years: Option<i32>,
    /// Replacement specialization list.
    #[serde(default)]
    pub specialization: Option<Vec<String>>,
    /// New salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// New location.
    #[serde(default)]
    pub location: Option<String>,
    /// New start date as `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Replacement skill ids.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// New performance rating.
    #[serde(default)]
    pub performance_rating: Option<f64>,
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl EmployeeUpdate {
    /// Returns true when no field is supplied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the rules of every supplied field.
    pub fn validate(&self) -> DashboardResult<()> {
        let mut errors = FieldErrors::new();
        if let Some(first_name) = &self.first_name {
            check_required(&mut errors, "firstName", "First name", first_name);
        }
        if let Some(last_name) = &self.last_name {
            check_required(&mut errors, "lastName", "Last name", last_name);
        }
        if let Some(email) = &self.email {
            check_email(&mut errors, email);
        }
        if let Some(role_id) = &self.role_id {
            check_required_id(&mut errors, "roleId", "Role", role_id);
        }
        if let Some(department_id) = &self.department_id {
            check_required_id(&mut errors, "departmentId", "Department", department_id);
        }
        if let Some(years) = self.experience_years {
            check_experience(&mut errors, years);
        }
        if let Some(salary) = self.salary {
            check_salary(&mut errors, salary);
        }
        if let Some(location) = &self.location {
            check_required(&mut errors, "location", "Location", location);
        }
        if let Some(start_date) = &self.start_date {
            check_start_date(&mut errors, start_date);
        }
        if let Some(rating) = self.performance_rating {
            check_rating(&mut errors, rating);
        }
        errors.into_result()
    }

    /// Validates the patch and returns `employee` with the supplied fields replaced.
    ///
    /// The id never changes. `employee` itself is left untouched.
    pub fn apply_to(
        &self,
        employee: &Employee,
        catalog: &ReferenceCatalog,
    ) -> DashboardResult<Employee> {
        self.validate()?;

        let mut updated = employee.clone();
        if let Some(department_id) = &self.department_id {
            updated.department = catalog.department(department_id)?.clone();
        }
        if let Some(role_id) = &self.role_id {
            updated.role = catalog.role(role_id)?.clone();
        }
        if let Some(skill_ids) = &self.skills {
            updated.skills = catalog.skills_for(skill_ids)?;
        }
        if let Some(first_name) = &self.first_name {
            updated.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = &self.last_name {
            updated.last_name = last_name.trim().to_string();
        }
        if let Some(email) = &self.email {
            updated.email = email.trim().to_string();
        }
        if let Some(years) = self.experience_years {
            updated.experience_years = years.unsigned_abs();
        }
        if let Some(specialization) = &self.specialization {
            updated.specialization = clean_specializations(specialization.clone());
        }
        if let Some(salary) = self.salary {
            updated.salary = salary;
        }
        if let Some(location) = &self.location {
            updated.location = location.trim().to_string();
        }
        if let Some(start_date) = self.start_date.as_deref().and_then(parse_date) {
            updated.start_date = start_date;
        }
        if let Some(rating) = self.performance_rating {
            updated.performance_rating = rating;
        }
        if let Some(is_active) = self.is_active {
            updated.is_active = is_active;
        }
        Ok(updated)
    }
}

fn check_required(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} is required", label));
    }
}

fn check_required_id(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, format!("{} is required", label));
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please enter a valid email address");
    }
}

fn check_experience(errors: &mut FieldErrors, years: i32) {
    if !(0..=MAX_EXPERIENCE_YEARS).contains(&years) {
        errors.push(
            "experienceYears",
            format!("Experience years must be between 0 and {}", MAX_EXPERIENCE_YEARS),
        );
    }
}

fn check_salary(errors: &mut FieldErrors, salary: Decimal) {
    if salary <= Decimal::ZERO {
        errors.push("salary", "Salary must be greater than 0");
    }
}

fn check_start_date(errors: &mut FieldErrors, start_date: &str) {
    if start_date.trim().is_empty() {
        errors.push("startDate", "Start date is required");
    } else if parse_date(start_date).is_none() {
        errors.push("startDate", "Start date must be a valid date (YYYY-MM-DD)");
    }
}

fn check_rating(errors: &mut FieldErrors, rating: f64) {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        errors.push("performanceRating", "Performance rating must be between 1 and 5");
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

// Duplicates are kept; only blank entries are dropped.
fn clean_specializations(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}
