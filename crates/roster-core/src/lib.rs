use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// Configuration types shared across all roster crates
pub mod config;

pub use config::{ConfigError, ConnectionConfig, OperatorConfig, RosterConfig};

/// One employee as retrieved from the directory store.
///
/// Records are fully detached values: once mapped from a row they hold no
/// reference to the connection or its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_number: u32,
    /// Empty when the store holds no first name.
    #[serde(default)]
    pub first_name: String,
    /// Empty when the store holds no last name.
    #[serde(default)]
    pub last_name: String,
}

impl EmployeeRecord {
    pub fn new(
        employee_number: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_number,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Operator credentials supplied for a single login attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of one pass through the login gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginOutcome {
    Success,
    Failure,
    Aborted,
}

impl LoginOutcome {
    /// Whether the calling loop should stop prompting.
    pub fn is_final(&self) -> bool {
        !matches!(self, LoginOutcome::Failure)
    }
}

/// An authenticated session, created once the gate reaches `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            started_at: Utc::now(),
        }
    }
}
