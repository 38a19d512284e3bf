//! Reference entities shared by employees: departments, roles and skills.
//!
//! Employees hold copies of these entities, but they are created only by
//! resolving ids against a [`ReferenceCatalog`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult, ReferenceKind};

/// An organizational department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// Display name (e.g., "Clinical Research").
    pub name: String,
    /// Short description of what the department does.
    pub description: String,
    /// Planned headcount, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_count: Option<u32>,
    /// Annual budget, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

/// Seniority level of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleLevel {
    /// Entry level.
    Junior,
    /// Intermediate.
    Mid,
    /// Senior individual contributor.
    Senior,
    /// Technical or team lead.
    Lead,
    /// People manager.
    Manager,
    /// Director.
    Director,
}

impl RoleLevel {
    /// Returns the display label of the level.
    pub fn label(self) -> &'static str {
        match self {
            RoleLevel::Junior => "Junior",
            RoleLevel::Mid => "Mid",
            RoleLevel::Senior => "Senior",
            RoleLevel::Lead => "Lead",
            RoleLevel::Manager => "Manager",
            RoleLevel::Director => "Director",
        }
    }
}

/// Functional category of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    /// Engineering and production.
    Engineering,
    /// Research.
    Research,
    /// Clinical operations.
    Clinical,
    /// Regulatory affairs.
    Regulatory,
    /// Commercial.
    Sales,
}

impl RoleCategory {
    /// Returns the display label of the category.
    pub fn label(self) -> &'static str {
        match self {
            RoleCategory::Engineering => "Engineering",
            RoleCategory::Research => "Research",
            RoleCategory::Clinical => "Clinical",
            RoleCategory::Regulatory => "Regulatory",
            RoleCategory::Sales => "Sales",
        }
    }
}

/// A job role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier for the role.
    pub id: String,
    /// Display title (e.g., "Research Scientist").
    pub title: String,
    /// Seniority level.
    pub level: RoleLevel,
    /// Functional category.
    pub category: RoleCategory,
}

/// Category of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Tools and methods.
    Technical,
    /// Industry knowledge.
    Domain,
    /// Interpersonal.
    Soft,
}

/// A skill an employee can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier for the skill.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill category.
    pub category: SkillCategory,
    /// Proficiency from 1 to 5.
    pub proficiency: u8,
}

/// Lowest valid skill proficiency.
pub const MIN_PROFICIENCY: u8 = 1;
/// Highest valid skill proficiency.
pub const MAX_PROFICIENCY: u8 = 5;

/// The three reference collections employees are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    /// Known departments.
    pub departments: Vec<Department>,
    /// Known roles.
    pub roles: Vec<Role>,
    /// Known skills.
    pub skills: Vec<Skill>,
}

impl ReferenceCatalog {
    /// Creates a catalog from its three collections.
    pub fn new(departments: Vec<Department>, roles: Vec<Role>, skills: Vec<Skill>) -> Self {
        Self {
            departments,
            roles,
            skills,
        }
    }

    /// Resolves a department id.
    pub fn department(&self, id: &str) -> DashboardResult<&Department> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| unresolved(ReferenceKind::Department, id))
    }

    /// Resolves a role id.
    pub fn role(&self, id: &str) -> DashboardResult<&Role> {
        self.roles
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| unresolved(ReferenceKind::Role, id))
    }

    /// Resolves a skill id.
    pub fn skill(&self, id: &str) -> DashboardResult<&Skill> {
        self.skills
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| unresolved(ReferenceKind::Skill, id))
    }

    /// Resolves every skill id in order, failing on the first unknown one.
    pub fn skills_for<S: AsRef<str>>(&self, ids: &[S]) -> DashboardResult<Vec<Skill>> {
        ids.iter()
            .map(|id| self.skill(id.as_ref()).cloned())
            .collect()
    }
}

fn unresolved(kind: ReferenceKind, id: &str) -> DashboardError {
    DashboardError::UnresolvedReference {
        kind,
        id: id.to_string(),
    }
}
