//! Test fixtures - reusable employee rosters for scenario tests.

#![allow(dead_code)] // each scenario file uses its own subset

use criteria::{Department, Employee};

/// Candidates that pass every hiring rule.
pub fn valid_candidates() -> Vec<(&'static str, u8, Department)> {
    vec![
        ("Roy", 31, Department::Development),
        ("Jen", 28, Department::Hr),
        ("Moss", 30, Department::Finance),
    ]
}

/// Candidates that violate at least one hiring rule.
pub fn invalid_candidates() -> Vec<(&'static str, u8, Department)> {
    vec![
        ("Jaon", 10, Department::Development),
        ("Clare", 28, Department::Sales),
        ("Sarah", 102, Department::Marketing),
        ("", 45, Department::Hr),
    ]
}

/// Employees the raise policy accepts.
pub fn eligible_for_raise() -> Vec<Employee> {
    vec![
        Employee::new("Iroh", 70, Department::Sales).with_salary(25_000),
        Employee::new("Azula", 25, Department::Sales).with_salary(32_000),
    ]
}

/// Employees the raise policy rejects.
pub fn not_eligible_for_raise() -> Vec<Employee> {
    vec![
        Employee::new("Momo", 12, Department::Hr),
        Employee::new("Zuko", 22, Department::Sales).with_salary(8_000),
        Employee::new("Roku", 98, Department::Sales).with_salary(32_000),
    ]
}
