//! Name leaf specification.

use crate::domain::entities::Employee;
use crate::specification::Specification;

/// Satisfied when the employee has a non-empty name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HasValidName;

impl Specification<Employee> for HasValidName {
    fn is_satisfied_by(&self, candidate: &Employee) -> bool {
        !candidate.name().is_empty()
    }
}
