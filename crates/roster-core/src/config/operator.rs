//! Operator login configuration.
//!
//! The operator's credentials are never stored in the config file. The file
//! only names the environment variables they are read from.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::Credentials;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Environment variable holding the operator username.
    #[serde(default = "default_username_env")]
    pub username_env: String,

    /// Environment variable holding the operator password.
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            username_env: default_username_env(),
            password_env: default_password_env(),
        }
    }
}

impl OperatorConfig {
    /// Read the expected operator credentials from the environment.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let username = read_env(&self.username_env)?;
        let password = read_env(&self.password_env)?;
        Ok(Credentials { username, password })
    }
}

fn read_env(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::Config(format!(
            "environment variable {} is empty",
            name
        ))),
        Err(_) => Err(ConfigError::Config(format!(
            "environment variable {} is not set",
            name
        ))),
    }
}

fn default_username_env() -> String {
    "ROSTER_OPERATOR_USERNAME".to_string()
}

fn default_password_env() -> String {
    "ROSTER_OPERATOR_PASSWORD".to_string()
}
