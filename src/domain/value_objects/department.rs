//! Department value object - the categorical field leaf rules compare against.

use serde::{Deserialize, Serialize};

/// Department an employee belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Sales,
    Hr,
    Marketing,
    Finance,
    Development,
}

impl Department {
    /// All departments, in declaration order
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Hr,
        Department::Marketing,
        Department::Finance,
        Department::Development,
    ];
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Department::Sales => write!(f, "sales"),
            Department::Hr => write!(f, "hr"),
            Department::Marketing => write!(f, "marketing"),
            Department::Finance => write!(f, "finance"),
            Department::Development => write!(f, "development"),
        }
    }
}
