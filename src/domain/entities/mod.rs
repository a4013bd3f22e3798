//! Domain Entities
//!
//! - `Employee` - the record eligibility rules evaluate

mod employee;

pub use employee::Employee;
