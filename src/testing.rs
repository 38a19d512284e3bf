//! Shared fixtures for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Department, Employee, ReferenceCatalog, Role, RoleCategory, RoleLevel, Skill, SkillCategory,
};

pub(crate) fn department(id: &str, name: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} department", name),
        head_count: None,
        budget: None,
    }
}

pub(crate) fn role(id: &str, title: &str) -> Role {
    Role {
        id: id.to_string(),
        title: title.to_string(),
        level: RoleLevel::Mid,
        category: RoleCategory::Research,
    }
}

pub(crate) fn skill(id: &str, name: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: SkillCategory::Technical,
        proficiency: 3,
    }
}

/// An active mid-level researcher; tests override the fields they care about.
pub(crate) fn create_test_employee(id: &str, first_name: &str, last_name: &str) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@pharma.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        role: role("1", "Research Scientist"),
        department: department("1", "Research & Development"),
        experience_years: 4,
        specialization: vec!["Oncology".to_string(), "Immunotherapy".to_string()],
        salary: Decimal::new(80_000, 0),
        location: "Boston, MA".to_string(),
        start_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
        skills: vec![skill("7", "Python"), skill("8", "Statistical Analysis")],
        performance_rating: 4.0,
        is_active: true,
    }
}

pub(crate) fn in_department(mut employee: Employee, id: &str, name: &str) -> Employee {
    employee.department = department(id, name);
    employee
}

pub(crate) fn with_salary(mut employee: Employee, salary: i64) -> Employee {
    employee.salary = Decimal::new(salary, 0);
    employee
}

pub(crate) fn test_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(
        vec![
            department("1", "Research & Development"),
            department("2", "Clinical Research"),
            department("4", "Manufacturing"),
        ],
        vec![role("1", "Research Scientist"), role("6", "QA Manager")],
        vec![skill("7", "Python"), skill("8", "Statistical Analysis")],
    )
}
