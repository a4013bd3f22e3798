//! Employee entity - the subject eligibility rules evaluate.

use crate::domain::value_objects::Department;
use serde::{Deserialize, Serialize};

/// An employee record
///
/// Immutable while specifications evaluate it; identity is field equality.
/// Evaluation borrows the record, so one employee can be checked against
/// any number of specifications, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name (may be empty for an unvetted candidate)
    name: String,
    /// Age in years
    age: u8,
    /// Department the employee belongs to
    department: Department,
    /// Annual salary; zero until compensation is set
    #[serde(default)]
    salary: u32,
    /// Years in which a bonus was awarded
    #[serde(default)]
    previous_bonus_years: Vec<u16>,
}

impl Employee {
    /// Create a new Employee with no salary or bonus history
    pub fn new(name: impl Into<String>, age: u8, department: Department) -> Self {
        Self {
            name: name.into(),
            age,
            department,
            salary: 0,
            previous_bonus_years: Vec::new(),
        }
    }

    /// Builder: set the annual salary
    pub fn with_salary(mut self, salary: u32) -> Self {
        self.salary = salary;
        self
    }

    /// Builder: record a year in which a bonus was awarded
    pub fn with_bonus_year(mut self, year: u16) -> Self {
        self.previous_bonus_years.push(year);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    pub fn previous_bonus_years(&self) -> &[u16] {
        &self.previous_bonus_years
    }
}
