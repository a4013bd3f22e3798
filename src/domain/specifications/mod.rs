//! Leaf specifications over [`Employee`](crate::domain::entities::Employee)
//!
//! Each leaf encodes one atomic rule. New rules are added here and
//! composed at the policy layer; existing leaves never change to admit
//! a new rule.

mod age;
mod compensation;
mod department;
mod history;
mod name;

pub use age::{AgeBelow, MinimumAge, ValidWorkingAge};
pub use compensation::{MaximumSalary, MinimumSalary};
pub use department::BelongsToDepartment;
pub use history::BonusAwardedIn;
pub use name::HasValidName;
