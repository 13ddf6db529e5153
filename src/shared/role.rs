//! Account Roles
//!
//! A role decides which dashboard and which API routes an account may use.
//! The set is closed: adding a role is a source change that the compiler
//! surfaces at every `match` below and at every guard that dispatches on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role, chosen at signup and immutable through this subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Society,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Society];

    /// Stable lowercase name used on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Society => "society",
        }
    }

    /// API path of the dashboard this role lands on.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/api/dashboard/student",
            Role::Teacher => "/api/dashboard/teacher",
            Role::Society => "/api/dashboard/society",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}', expected one of: student, teacher, society",
            self.0
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "society" => Ok(Role::Society),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
