//! Criteria - composable specification engine for eligibility rules
//!
//! Criteria implements the Specification pattern: small predicate objects
//! that each encode one atomic rule, combined into richer rules with
//! `and`, `or`, and `not` without modifying the rules being combined.
//! New eligibility rules are added by writing a new leaf specification
//! and composing it, never by editing an existing one.

pub mod domain;
pub mod error;
pub mod specification;

// Re-exports for convenience
pub use domain::entities::Employee;
pub use domain::policies::{HiringPolicy, RaisePolicy};
pub use domain::specifications::{
    AgeBelow, BelongsToDepartment, BonusAwardedIn, HasValidName, MaximumSalary, MinimumAge,
    MinimumSalary, ValidWorkingAge,
};
pub use domain::value_objects::Department;
pub use error::{CriteriaError, CriteriaResult};
pub use specification::{AndSpecification, NotSpecification, OrSpecification, Specification};
