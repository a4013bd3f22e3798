//! Department leaf specification.

use crate::domain::entities::Employee;
use crate::domain::value_objects::Department;
use crate::specification::Specification;

/// Satisfied when the employee belongs to the given department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BelongsToDepartment(pub Department);

impl Specification<Employee> for BelongsToDepartment {
    fn is_satisfied_by(&self, candidate: &Employee) -> bool {
        candidate.department() == self.0
    }
}
