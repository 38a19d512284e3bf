//! Error types for the employee dashboard pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the pipeline can report. The pure filter/sort and
//! aggregation functions never fail; only configuration loading, form
//! validation, store transitions, the record source and the export engine
//! produce these errors.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The kind of reference collection an id is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// A department id.
    Department,
    /// A role id.
    Role,
    /// A skill id.
    Skill,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Department => "department",
            ReferenceKind::Role => "role",
            ReferenceKind::Skill => "skill",
        };
        f.write_str(name)
    }
}

/// A single failed form rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The form field that failed (camelCase, as the form names it).
    pub field: String,
    /// A human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All failed form rules, in the order the form declares its fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Creates an empty error list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Returns true when no rule failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failed rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Iterates over the failed rules.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Converts the collected failures into a result.
    pub fn into_result(self) -> DashboardResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::ValidationFailed { errors: self })
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

/// The main error type for the employee dashboard.
///
/// # Example
///
/// ```
/// use employee_dashboard::error::DashboardError;
///
/// let error = DashboardError::EmployeeNotFound {
///     id: "42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// One or more form fields failed validation.
    #[error("Validation failed: {errors}")]
    ValidationFailed {
        /// Every failed rule.
        errors: FieldErrors,
    },

    /// A department, role or skill id does not exist in the reference catalog.
    #[error("Unknown {kind} '{id}'")]
    UnresolvedReference {
        /// Which reference collection was searched.
        kind: ReferenceKind,
        /// The id that did not resolve.
        id: String,
    },

    /// No employee with the given id exists.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: String,
    },

    /// A transition would leave two employees with the same id.
    #[error("Duplicate employee id: {id}")]
    DuplicateEmployee {
        /// The duplicated id.
        id: String,
    },

    /// Export was requested for an empty record collection.
    #[error("No data to export")]
    NoData,

    /// Export was requested without any (known) field.
    #[error("No fields selected for export")]
    NoFieldsSelected,

    /// The requested export format is not recognized.
    #[error("Unsupported export format: {format}")]
    UnsupportedFormat {
        /// The format name as supplied.
        format: String,
    },

    /// A CSV or JSON document could not be assembled.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the failure.
        message: String,
    },

    /// The spreadsheet writer rejected the workbook.
    #[error("Spreadsheet export failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// The download sink could not deliver a finished document.
    #[error("Failed to deliver '{filename}': {message}")]
    DeliveryFailed {
        /// The generated file name.
        filename: String,
        /// A description of the failure.
        message: String,
    },

    /// The backing record source failed.
    #[error("Record source error: {message}")]
    RecordSource {
        /// The opaque failure reported by the source.
        message: String,
    },
}

impl DashboardError {
    /// Returns true for malformed form input and unresolved references.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DashboardError::ValidationFailed { .. } | DashboardError::UnresolvedReference { .. }
        )
    }

    /// Returns true when an update or delete targeted a missing employee.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DashboardError::EmployeeNotFound { .. })
    }

    /// Returns true for export preconditions that are checked before any document is built.
    pub fn is_export_precondition(&self) -> bool {
        matches!(
            self,
            DashboardError::NoData
                | DashboardError::NoFieldsSelected
                | DashboardError::UnsupportedFormat { .. }
        )
    }
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;
