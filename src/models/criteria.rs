//! Filter and sort criteria for the employee table.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Active filters. Empty strings and `None` mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact department name.
    #[serde(default)]
    pub department: String,
    /// Experience-level label (Junior, Mid, Senior or Expert).
    #[serde(default)]
    pub experience_level: String,
    /// Case-insensitive search over name, email and role title.
    #[serde(default)]
    pub search_term: String,
    /// Active-status filter.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl FilterCriteria {
    /// Returns true when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.department.is_empty()
            && self.experience_level.is_empty()
            && self.search_term.is_empty()
            && self.is_active.is_none()
    }

    /// Merges a partial update into these criteria.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(experience_level) = update.experience_level {
            self.experience_level = experience_level;
        }
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

/// A partial filter change; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    /// New department filter.
    #[serde(default)]
    pub department: Option<String>,
    /// New experience-level filter.
    #[serde(default)]
    pub experience_level: Option<String>,
    /// New search term.
    #[serde(default)]
    pub search_term: Option<String>,
    /// New active-status filter; `Some(None)` clears it.
    #[serde(default)]
    pub is_active: Option<Option<bool>>,
}

impl FilterUpdate {
    /// Sets the department filter.
    pub fn department(mut self, name: impl Into<String>) -> Self {
        self.department = Some(name.into());
        self
    }

    /// Sets the experience-level filter.
    pub fn experience_level(mut self, label: impl Into<String>) -> Self {
        self.experience_level = Some(label.into());
        self
    }

    /// Sets the search term.
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Sets or clears the active-status filter.
    pub fn is_active(mut self, is_active: Option<bool>) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Resets every filter.
    pub fn clear_all() -> Self {
        Self {
            department: Some(String::new()),
            experience_level: Some(String::new()),
            search_term: Some(String::new()),
            is_active: Some(None),
        }
    }
}

/// A sortable employee attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Employee id.
    Id,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Role, ordered by title.
    Role,
    /// Department, ordered by name.
    Department,
    /// Years of experience.
    ExperienceYears,
    /// Salary.
    Salary,
    /// Location.
    Location,
    /// Start date.
    StartDate,
    /// Performance rating.
    PerformanceRating,
    /// Active flag (inactive first when ascending).
    IsActive,
}

impl SortField {
    /// Parses a column name in camelCase or snake_case.
    ///
    /// Unknown names return `None`, which callers treat as "no sort".
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_dashboard::models::SortField;
    ///
    /// assert_eq!(SortField::parse("firstName"), Some(SortField::FirstName));
    /// assert_eq!(SortField::parse("start_date"), Some(SortField::StartDate));
    /// assert_eq!(SortField::parse("skills"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let field = match name {
            "id" => SortField::Id,
            "firstName" | "first_name" => SortField::FirstName,
            "lastName" | "last_name" => SortField::LastName,
            "email" => SortField::Email,
            "role" => SortField::Role,
            "department" => SortField::Department,
            "experienceYears" | "experience_years" => SortField::ExperienceYears,
            "salary" => SortField::Salary,
            "location" => SortField::Location,
            "startDate" | "start_date" => SortField::StartDate,
            "performanceRating" | "performance_rating" => SortField::PerformanceRating,
            "isActive" | "is_active" => SortField::IsActive,
            _ => return None,
        };
        Some(field)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The current sort: an optional field and a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    /// Field to sort by; `None` keeps input order. Unknown names deserialize to `None`.
    #[serde(default, deserialize_with = "deserialize_sort_field")]
    pub field: Option<SortField>,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

fn deserialize_sort_field<'de, D>(deserializer: D) -> Result<Option<SortField>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    let field = name.as_deref().and_then(SortField::parse);
    if let (Some(name), None) = (name.as_deref(), field) {
        debug!(field = name, "Unknown sort field, keeping input order");
    }
    Ok(field)
}

impl SortCriteria {
    /// Sorts by `field` in `direction`.
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Builds criteria from a column name that may not be sortable.
    pub fn by_name(name: &str, direction: SortDirection) -> Self {
        let field = SortField::parse(name);
        if field.is_none() {
            debug!(field = name, "Unknown sort field, keeping input order");
        }
        Self { field, direction }
    }

    /// Criteria for a header click: same field flips direction, a new field sorts ascending.
    pub fn clicked(self, field: SortField) -> Self {
        let direction = if self.field == Some(field) {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        };
        Self::new(field, direction)
    }
}
