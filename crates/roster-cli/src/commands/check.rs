//! `roster check` - validate configuration and optionally reach the store.

use anyhow::Context;
use roster_adapter_mysql::{EmployeeDirectory, MySqlEmployeeDirectory};
use roster_core::RosterConfig;
use std::io::{self, Write};
use std::path::Path;

pub async fn run(config_path: &Path, connect: bool) -> anyhow::Result<()> {
    let config = RosterConfig::from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    let operator_ready = {
        let mut out = io::stdout().lock();
        writeln!(out, "✔ Configuration valid: {}", config_path.display())?;
        report(&config, &mut out)?
    };

    if connect {
        let directory = MySqlEmployeeDirectory::new(config.connection.clone());
        let count = count_employees(&directory).await?;
        println!("✔ Directory reachable: {} employees", count);
    }

    if !operator_ready {
        anyhow::bail!("operator credentials are not available");
    }
    Ok(())
}

/// Run one fetch cycle and return how many employees came back.
pub async fn count_employees(directory: &dyn EmployeeDirectory) -> anyhow::Result<usize> {
    let employees = directory
        .fetch_employees()
        .await
        .context("directory reachability check failed")?;
    Ok(employees.len())
}

/// Describe the resolved configuration. Returns whether operator
/// credentials resolve from the environment.
pub fn report<W: Write>(config: &RosterConfig, out: &mut W) -> io::Result<bool> {
    let conn = &config.connection;
    writeln!(out, "  Directory store: {}", conn.display_target())?;
    writeln!(out, "  Connect timeout: {}s", conn.connect_timeout_seconds)?;

    let password_source = match &conn.password_env {
        Some(var) if std::env::var(var).is_ok() => format!("environment ({})", var),
        Some(var) if !conn.password.is_empty() => format!("inline ({} not set)", var),
        Some(var) => format!("none ({} not set)", var),
        None if !conn.password.is_empty() => "inline".to_string(),
        None => "none".to_string(),
    };
    writeln!(out, "  Store password:  {}", password_source)?;

    match config.operator.credentials() {
        Ok(creds) => {
            writeln!(
                out,
                "✔ Operator login: {} (from {})",
                creds.username, config.operator.username_env
            )?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "✘ Operator login: {}", e)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use roster_adapter_mysql::DirectoryError;
    use roster_core::{ConnectionConfig, EmployeeRecord, OperatorConfig};

    struct TwoEmployees;

    #[async_trait]
    impl EmployeeDirectory for TwoEmployees {
        async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
            Ok(vec![
                EmployeeRecord::new(1, "Sergio", "Sánchez"),
                EmployeeRecord::new(2, "Manuel", "Martín"),
            ])
        }
    }

    #[tokio::test]
    async fn test_count_employees_from_directory() {
        assert_eq!(count_employees(&TwoEmployees).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_store_check_fails_with_context() {
        let directory = MySqlEmployeeDirectory::new(ConnectionConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            connect_timeout_seconds: 2,
            ..Default::default()
        });

        let err = count_employees(&directory).await.unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("directory reachability check failed"));
        assert!(chain.contains("failed to connect"));
    }

    #[test]
    fn test_report_redacts_password_and_flags_missing_operator() {
        let config = RosterConfig {
            connection: ConnectionConfig {
                password: "s3cret".to_string(),
                ..Default::default()
            },
            operator: OperatorConfig {
                username_env: "ROSTER_TEST_CHECK_USER_MISSING".to_string(),
                password_env: "ROSTER_TEST_CHECK_PASS_MISSING".to_string(),
            },
        };

        let mut out = Vec::new();
        let ready = report(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!ready);
        assert!(text.contains("root@localhost:8889/employees"));
        assert!(text.contains("Store password:  inline"));
        assert!(!text.contains("s3cret"));
        assert!(text.contains("ROSTER_TEST_CHECK_USER_MISSING"));
    }

    #[test]
    fn test_report_with_operator_in_environment() {
        // SAFETY: We're in a test and controlling the environment
        unsafe {
            std::env::set_var("ROSTER_TEST_CHECK_USER", "admin");
            std::env::set_var("ROSTER_TEST_CHECK_PASS", "letmein");
        }
        let config = RosterConfig {
            operator: OperatorConfig {
                username_env: "ROSTER_TEST_CHECK_USER".to_string(),
                password_env: "ROSTER_TEST_CHECK_PASS".to_string(),
            },
            ..Default::default()
        };

        let mut out = Vec::new();
        let ready = report(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(ready);
        assert!(text.contains("Operator login: admin"));
        assert!(!text.contains("letmein"));
        assert!(text.contains("Store password:  none"));
    }
}
