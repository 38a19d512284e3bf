//! The registry of exportable fields.
//!
//! Each field pairs a stable key with a column label and an extractor.
//! Projections always follow registry order, whatever order keys arrive in.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::Employee;

use super::CellValue;

/// Grouping used by the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Names and contact details.
    Basic,
    /// Role and department.
    Role,
    /// Experience and performance.
    Experience,
    /// Salary, location, dates and status.
    Employment,
    /// Specializations and skills.
    Skills,
}

/// An exportable column.
#[derive(Clone, Copy)]
pub struct ExportField {
    /// Stable key used in requests and JSON output.
    pub key: &'static str,
    /// Column header used in CSV, XLSX and previews.
    pub label: &'static str,
    /// Dialog grouping.
    pub category: FieldCategory,
    extract: fn(&Employee) -> CellValue,
}

impl ExportField {
    /// Extracts this field's value from `employee`.
    pub fn value(&self, employee: &Employee) -> CellValue {
        (self.extract)(employee)
    }
}

impl fmt::Debug for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("category", &self.category)
            .finish()
    }
}

impl PartialEq for ExportField {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

const fn field(
    key: &'static str,
    label: &'static str,
    category: FieldCategory,
    extract: fn(&Employee) -> CellValue,
) -> ExportField {
    ExportField {
        key,
        label,
        category,
        extract,
    }
}

/// Every exportable field, in output order.
pub static EXPORT_FIELDS: [ExportField; 18] = [
    field("firstName", "First Name", FieldCategory::Basic, first_name),
    field("lastName", "Last Name", FieldCategory::Basic, last_name),
    field("fullName", "Full Name", FieldCategory::Basic, full_name),
    field("email", "Email", FieldCategory::Basic, email),
    field("roleTitle", "Role Title", FieldCategory::Role, role_title),
    field("roleLevel", "Role Level", FieldCategory::Role, role_level),
    field("roleCategory", "Role Category", FieldCategory::Role, role_category),
    field("department", "Department", FieldCategory::Role, department),
    field("experienceYears", "Experience (Years)", FieldCategory::Experience, experience_years),
    field("experienceLevel", "Experience Level", FieldCategory::Experience, experience_level),
    field("salary", "Salary", FieldCategory::Employment, salary),
    field("location", "Location", FieldCategory::Employment, location),
    field("startDate", "Start Date", FieldCategory::Employment, start_date),
    field("performanceRating", "Performance Rating", FieldCategory::Experience, performance_rating),
    field("isActive", "Status", FieldCategory::Employment, status),
    field("specialization", "Specializations", FieldCategory::Skills, specializations),
    field("skills", "Skills", FieldCategory::Skills, skill_names),
    field("skillCount", "Skill Count", FieldCategory::Skills, skill_count),
];

/// Fields selected when an export dialog opens.
pub const DEFAULT_EXPORT_FIELDS: [&str; 9] = [
    "fullName",
    "email",
    "roleTitle",
    "department",
    "experienceYears",
    "salary",
    "location",
    "startDate",
    "isActive",
];

/// Separator for list-valued fields.
pub const LIST_SEPARATOR: &str = "; ";

/// Looks up a field by key.
pub fn find_field(key: &str) -> Option<&'static ExportField> {
    EXPORT_FIELDS.iter().find(|f| f.key == key)
}

/// Resolves requested keys to fields in registry order.
///
/// Unknown keys are skipped and duplicates collapse.
pub fn resolve_fields<S: AsRef<str>>(keys: &[S]) -> Vec<&'static ExportField> {
    EXPORT_FIELDS
        .iter()
        .filter(|f| keys.iter().any(|k| k.as_ref() == f.key))
        .collect()
}

/// Returns the fields of one dialog category, in registry order.
pub fn fields_in_category(category: FieldCategory) -> Vec<&'static ExportField> {
    EXPORT_FIELDS
        .iter()
        .filter(|f| f.category == category)
        .collect()
}

fn first_name(e: &Employee) -> CellValue {
    CellValue::from(e.first_name.as_str())
}

fn last_name(e: &Employee) -> CellValue {
    CellValue::from(e.last_name.as_str())
}

fn full_name(e: &Employee) -> CellValue {
    CellValue::from(e.full_name())
}

fn email(e: &Employee) -> CellValue {
    CellValue::from(e.email.as_str())
}

fn role_title(e: &Employee) -> CellValue {
    CellValue::from(e.role.title.as_str())
}

fn role_level(e: &Employee) -> CellValue {
    CellValue::from(e.role.level.label())
}

fn role_category(e: &Employee) -> CellValue {
    CellValue::from(e.role.category.label())
}

fn department(e: &Employee) -> CellValue {
    CellValue::from(e.department.name.as_str())
}

fn experience_years(e: &Employee) -> CellValue {
    CellValue::Number(f64::from(e.experience_years))
}

fn experience_level(e: &Employee) -> CellValue {
    CellValue::from(e.experience_level().label())
}

fn salary(e: &Employee) -> CellValue {
    CellValue::Number(e.salary.to_f64().unwrap_or_default())
}

fn location(e: &Employee) -> CellValue {
    CellValue::from(e.location.as_str())
}

fn start_date(e: &Employee) -> CellValue {
    CellValue::from(e.start_date.format("%Y-%m-%d").to_string())
}

fn performance_rating(e: &Employee) -> CellValue {
    CellValue::Number(e.performance_rating)
}

fn status(e: &Employee) -> CellValue {
    CellValue::from(if e.is_active { "Active" } else { "Inactive" })
}

fn specializations(e: &Employee) -> CellValue {
    CellValue::from(e.specialization.join(LIST_SEPARATOR))
}

fn skill_names(e: &Employee) -> CellValue {
    let names: Vec<&str> = e.skills.iter().map(|s| s.name.as_str()).collect();
    CellValue::from(names.join(LIST_SEPARATOR))
}

fn skill_count(e: &Employee) -> CellValue {
    CellValue::Number(e.skills.len() as f64)
}
