//! Domain Policies
//!
//! Business rules composed from leaf specifications. Policies build their
//! specification trees once and reuse them across evaluations.

mod hiring;
mod raises;

pub use hiring::HiringPolicy;
pub use raises::RaisePolicy;
