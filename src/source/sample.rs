//! Generated demo employees.

use chrono::{Months, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;

use crate::models::{Employee, ReferenceCatalog, SkillCategory};

const FIRST_NAMES: [&str; 34] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Jessica", "William",
    "Ashley", "James", "Amanda", "Christopher", "Jennifer", "Daniel", "Lisa", "Matthew", "Karen",
    "Anthony", "Nancy", "Mark", "Betty", "Donald", "Helen", "Steven", "Sandra", "Paul", "Donna",
    "Andrew", "Carol", "Joshua", "Ruth", "Kenneth", "Sharon",
];

const LAST_NAMES: [&str; 34] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
];

const LOCATIONS: [&str; 8] = [
    "New York, NY",
    "San Francisco, CA",
    "Boston, MA",
    "Chicago, IL",
    "Los Angeles, CA",
    "Seattle, WA",
    "Philadelphia, PA",
    "San Diego, CA",
];

const SPECIALIZATIONS: [[&str; 2]; 8] = [
    ["Oncology", "Immunotherapy"],
    ["Cardiology", "Diabetes"],
    ["Neurology", "Psychiatry"],
    ["Infectious Diseases", "Vaccines"],
    ["Rare Diseases", "Pediatrics"],
    ["Women's Health", "Reproductive Medicine"],
    ["Respiratory", "Allergy"],
    ["Dermatology", "Rheumatology"],
];

/// Generates `count` plausible employees with ids `"1"..=count`.
///
/// Departments, roles and skills are drawn from `catalog`; start dates fall
/// within the ten years before `today`. Salary is 50,000 plus 5,000 per year
/// of experience plus up to 30,000. Roughly nine in ten are active.
///
/// Returns an empty list when the catalog has no departments or no roles.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use employee_dashboard::models::ReferenceCatalog;
/// use employee_dashboard::source::generate_sample_employees;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
/// let employees = generate_sample_employees(&ReferenceCatalog::default(), 10, today, &mut rng);
/// assert!(employees.is_empty());
/// ```
pub fn generate_sample_employees<R: Rng + ?Sized>(
    catalog: &ReferenceCatalog,
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Employee> {
    if catalog.departments.is_empty() || catalog.roles.is_empty() {
        return Vec::new();
    }

    (1..=count)
        .filter_map(|index| {
            let first_name = *FIRST_NAMES.choose(rng)?;
            let last_name = *LAST_NAMES.choose(rng)?;
            let department = catalog.departments.choose(rng)?.clone();
            let role = catalog.roles.choose(rng)?.clone();
            let experience_years: u32 = rng.gen_range(1..=20);
            let start_date = today
                .checked_sub_months(Months::new(12 * rng.gen_range(0..10)))
                .unwrap_or(today);

            let skill_limit = 3 + rng.gen_range(0..3);
            let skills = catalog
                .skills
                .iter()
                .filter(|skill| rng.gen_bool(0.5) || skill.category == SkillCategory::Soft)
                .take(skill_limit)
                .cloned()
                .collect();

            let salary = 50_000 + i64::from(experience_years) * 5_000 + rng.gen_range(0..30_000);
            let rating: f64 = rng.gen_range(1.0..=5.0);

            Some(Employee {
                id: index.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!(
                    "{}.{}@pharma.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                role,
                department,
                experience_years,
                specialization: SPECIALIZATIONS
                    .choose(rng)?
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                salary: Decimal::new(salary, 0),
                location: LOCATIONS.choose(rng)?.to_string(),
                start_date,
                skills,
                performance_rating: (rating * 10.0).round() / 10.0,
                is_active: rng.gen_bool(0.9),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_catalog;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn generate(count: usize, seed: u64) -> Vec<Employee> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_sample_employees(&test_catalog(), count, today(), &mut rng)
    }

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let employees = generate(35, 1);
        assert_eq!(employees.len(), 35);
        assert_eq!(employees[0].id, "1");
        assert_eq!(employees[34].id, "35");
    }

    #[test]
    fn test_same_seed_same_data() {
        assert_eq!(generate(10, 42), generate(10, 42));
    }

    #[test]
    fn test_values_stay_in_range() {
        let catalog = test_catalog();
        for employee in generate(200, 3) {
            let years = i64::from(employee.experience_years);
            let floor = Decimal::new(50_000 + years * 5_000, 0);
            assert!((1..=20).contains(&employee.experience_years));
            assert!(employee.salary >= floor);
            assert!(employee.salary < floor + Decimal::new(30_000, 0));
            assert!((1.0..=5.0).contains(&employee.performance_rating));
            assert!(employee.start_date <= today());
            assert!(employee.start_date > today() - Months::new(120));
            assert!(employee.skills.len() <= 5);
            assert!(catalog.department(&employee.department.id).is_ok());
            assert!(employee.email.ends_with("@pharma.com"));
            assert_eq!(employee.specialization.len(), 2);
        }
    }

    #[test]
    fn test_empty_catalog_generates_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let employees =
            generate_sample_employees(&ReferenceCatalog::default(), 5, today(), &mut rng);
        assert!(employees.is_empty());
    }
}
