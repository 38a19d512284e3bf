//! Core data models for the employee dashboard.
//!
//! This module contains the employee record, the reference entities it is
//! resolved against, form payloads, and the filter/sort criteria.

mod criteria;
mod employee;
mod form;
mod reference;

pub use criteria::{FilterCriteria, FilterUpdate, SortCriteria, SortDirection, SortField};
pub use employee::{Employee, ExperienceLevel};
pub use form::{EmployeeForm, EmployeeUpdate, MAX_EXPERIENCE_YEARS, MAX_RATING, MIN_RATING};
pub use reference::{
    Department, MAX_PROFICIENCY, MIN_PROFICIENCY, ReferenceCatalog, Role, RoleCategory,
    RoleLevel, Skill, SkillCategory,
};
