//! Hiring validation policy.

use crate::domain::entities::Employee;
use crate::domain::specifications::{BelongsToDepartment, HasValidName, ValidWorkingAge};
use crate::domain::value_objects::Department;
use crate::error::{CriteriaError, CriteriaResult};
use crate::specification::Specification;

/// A named hiring rule.
struct HiringRule {
    name: &'static str,
    spec: Box<dyn Specification<Employee> + Send + Sync>,
}

/// Validates candidates before they become employees.
///
/// Every rule is checked independently so a rejection names each rule the
/// candidate failed, not just the first.
pub struct HiringPolicy {
    rules: Vec<HiringRule>,
}

impl HiringPolicy {
    /// Create the policy with the standard rule set.
    pub fn new() -> Self {
        Self {
            rules: vec![
                HiringRule {
                    name: "working age",
                    spec: Box::new(ValidWorkingAge),
                },
                HiringRule {
                    name: "non-empty name",
                    spec: Box::new(HasValidName),
                },
                HiringRule {
                    name: "not in sales",
                    spec: Box::new(BelongsToDepartment(Department::Sales).not()),
                },
            ],
        }
    }

    /// Validate a candidate and construct the employee record.
    pub fn hire(
        &self,
        name: impl Into<String>,
        age: u8,
        department: Department,
    ) -> CriteriaResult<Employee> {
        let candidate = Employee::new(name, age, department);
        let violations = self.violations(&candidate);

        if violations.is_empty() {
            Ok(candidate)
        } else {
            Err(CriteriaError::IneligibleCandidate {
                name: candidate.name().to_string(),
                violations,
            })
        }
    }

    /// Names of every rule `candidate` fails, in rule order.
    pub fn violations(&self, candidate: &Employee) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| !rule.spec.is_satisfied_by(candidate))
            .map(|rule| rule.name.to_string())
            .collect()
    }
}

impl Default for HiringPolicy {
    fn default() -> Self {
        Self::new()
    }
}
