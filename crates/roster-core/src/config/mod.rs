//! Configuration types for roster.
//!
//! A single YAML file (`roster.yaml` by default) carries two sections:
//!
//! - **connection**: where the employee directory lives
//! - **operator**: which environment variables hold the operator login

pub mod connection;
pub mod operator;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use connection::ConnectionConfig;
pub use operator::OperatorConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "roster.yaml";

/// Complete roster configuration loaded from a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Directory store connection.
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Operator login settings.
    #[serde(default)]
    pub operator: OperatorConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterConfig {
    /// Load configuration from a YAML file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.connection.validate().map_err(ConfigError::Config)?;
        if self.operator.username_env.trim().is_empty()
            || self.operator.password_env.trim().is_empty()
        {
            return Err(ConfigError::Config(
                "operator.username_env and operator.password_env must name variables".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(ConfigError::from)
    }
}
