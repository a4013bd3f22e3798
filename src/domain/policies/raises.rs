//! Raise eligibility policy.
//!
//! Department rules are leaf compositions OR-ed together behind a common
//! age guard; a new department rule is a new branch, not an edit to the
//! existing ones.

use crate::domain::entities::Employee;
use crate::domain::specifications::{
    AgeBelow, BelongsToDepartment, BonusAwardedIn, MaximumSalary, MinimumAge, MinimumSalary,
};
use crate::domain::value_objects::Department;
use crate::specification::Specification;

/// Minimum age for any raise
const RAISE_MINIMUM_AGE: u8 = 18;
/// Sales must earn at least this much to qualify
const SALES_MINIMUM_SALARY: u32 = 10_000;
/// Sales at or above this age no longer qualify
const SALES_AGE_CUTOFF: u8 = 75;
/// Finance above this salary no longer qualifies
const FINANCE_MAXIMUM_SALARY: u32 = 85_000;
/// Hr employees with a bonus in this year sit the round out
const HR_EXCLUDED_BONUS_YEAR: u16 = 2022;

/// Decides whether an employee is eligible for a raise.
///
/// The specification tree is built once in [`RaisePolicy::new`] and reused
/// for any number of evaluations.
pub struct RaisePolicy {
    eligibility: Box<dyn Specification<Employee> + Send + Sync>,
}

impl RaisePolicy {
    pub fn new() -> Self {
        let sales = BelongsToDepartment(Department::Sales)
            .and(MinimumSalary(SALES_MINIMUM_SALARY))
            .and(AgeBelow(SALES_AGE_CUTOFF));
        let finance =
            BelongsToDepartment(Department::Finance).and(MaximumSalary(FINANCE_MAXIMUM_SALARY));
        let development = BelongsToDepartment(Department::Development);
        let hr =
            BelongsToDepartment(Department::Hr).and(BonusAwardedIn(HR_EXCLUDED_BONUS_YEAR).not());

        let eligibility =
            MinimumAge(RAISE_MINIMUM_AGE).and(sales.or(finance).or(development).or(hr));

        Self {
            eligibility: Box::new(eligibility),
        }
    }

    /// Check whether `employee` qualifies for a raise.
    pub fn is_eligible(&self, employee: &Employee) -> bool {
        self.eligibility.is_satisfied_by(employee)
    }
}

impl Default for RaisePolicy {
    fn default() -> Self {
        Self::new()
    }
}
