//! Directory store connection configuration.
//!
//! Connection parameters are given field by field. The password can be
//! supplied inline or through an environment variable, which wins when set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Parameters identifying the directory database.
///
/// Built once at startup and handed to the directory adapter, which reads it
/// for every fetch cycle and never changes it.
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Hostname of the MySQL server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the MySQL server.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database (schema) holding the `employees` relation.
    #[serde(default = "default_database")]
    pub database: String,

    /// Username for the store connection.
    #[serde(default = "default_username")]
    pub username: String,

    /// Password for the store connection. Empty means no password.
    #[serde(default)]
    pub password: String,

    /// Environment variable containing the password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_env: Option<String>,

    /// Upper bound on connection establishment, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            username: default_username(),
            password: String::new(),
            password_env: None,
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("password_env", &self.password_env)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

impl ConnectionConfig {
    /// Get the password, checking password_env first.
    pub fn resolved_password(&self) -> String {
        if let Some(env_var) = &self.password_env
            && let Ok(password) = std::env::var(env_var)
        {
            return password;
        }
        self.password.clone()
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// `user@host:port/database`, safe to print or log.
    pub fn display_target(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }

    /// Check that every field can identify a store.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("connection.host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("connection.port must be non-zero".to_string());
        }
        if self.database.trim().is_empty() {
            return Err("connection.database must not be empty".to_string());
        }
        if self.username.trim().is_empty() {
            return Err("connection.username must not be empty".to_string());
        }
        if self.connect_timeout_seconds == 0 {
            return Err("connection.connect_timeout_seconds must be non-zero".to_string());
        }
        Ok(())
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8889
}

fn default_database() -> String {
    "employees".to_string()
}

fn default_username() -> String {
    "root".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_employees_schema() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8889);
        assert_eq!(config.database, "employees");
        assert_eq!(config.username, "root");
        assert_eq!(config.password, "");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_password_env_wins_over_inline_password() {
        // SAFETY: We're in a test and controlling the environment
        unsafe {
            std::env::set_var("ROSTER_TEST_CONN_PASSWORD_A", "from-env");
        }
        let config = ConnectionConfig {
            password: "inline".to_string(),
            password_env: Some("ROSTER_TEST_CONN_PASSWORD_A".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_password(), "from-env");
    }

    #[test]
    fn test_unset_password_env_falls_back_to_inline() {
        let config = ConnectionConfig {
            password: "inline".to_string(),
            password_env: Some("ROSTER_TEST_CONN_PASSWORD_UNSET".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_password(), "inline");
    }

    #[test]
    fn test_debug_and_target_never_show_password() {
        let config = ConnectionConfig {
            password: "s3cret".to_string(),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("s3cret"));
        assert_eq!(config.display_target(), "root@localhost:8889/employees");
    }

    #[test]
    fn test_validate_rejects_unusable_fields() {
        assert!(ConnectionConfig::default().validate().is_ok());

        let no_host = ConnectionConfig {
            host: " ".to_string(),
            ..Default::default()
        };
        assert!(no_host.validate().unwrap_err().contains("host"));

        let no_port = ConnectionConfig {
            port: 0,
            ..Default::default()
        };
        assert!(no_port.validate().unwrap_err().contains("port"));

        let no_timeout = ConnectionConfig {
            connect_timeout_seconds: 0,
            ..Default::default()
        };
        assert!(no_timeout.validate().unwrap_err().contains("timeout"));
    }
}
