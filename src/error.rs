//! Error types for Criteria
//!
//! Uses `thiserror` for library errors. Specification evaluation itself is
//! infallible; errors only arise from policy-level validation.

use thiserror::Error;

/// Result type alias for Criteria operations
pub type CriteriaResult<T> = Result<T, CriteriaError>;

/// Main error type for Criteria operations
#[derive(Error, Debug)]
pub enum CriteriaError {
    /// Candidate failed one or more hiring rules
    #[error("candidate '{name}' is not eligible for hire: {}", .violations.join(", "))]
    IneligibleCandidate {
        name: String,
        /// Names of every violated rule, in evaluation order
        violations: Vec<String>,
    },
}
