//! # roster-adapter-mysql
//!
//! Reads the employee directory from a MySQL store.
//!
//! Every call to [`EmployeeDirectory::fetch_employees`] is one fetch cycle:
//!
//! ```text
//! connect (bounded by connect_timeout)  ──fail──▶ ConnectionFailed
//!    │
//!    ▼
//! SELECT CAST(emp_no AS SIGNED) AS emp_no, first_name, last_name FROM employees
//!    │
//!    ▼
//! map rows by column name, in store order
//!    │
//!    ▼
//! close the connection (on every path past connect)
//! ```
//!
//! Connections are never pooled or reused across calls.

use async_trait::async_trait;
use roster_core::{ConnectionConfig, EmployeeRecord};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::{debug, info, warn};

pub mod error;
pub mod row;

pub use error::DirectoryError;
pub use row::{EmployeeRow, LIST_EMPLOYEES_SQL};

/// Source of employee records for the presentation layer.
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Run one complete fetch cycle and return the records in store order.
    /// An empty directory is `Ok(vec![])`, never an error.
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError>;
}

pub struct MySqlEmployeeDirectory {
    config: ConnectionConfig,
}

impl MySqlEmployeeDirectory {
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .database(&self.config.database)
            .username(&self.config.username);

        let password = self.config.resolved_password();
        if password.is_empty() {
            options
        } else {
            options.password(&password)
        }
    }

    async fn connect(&self) -> Result<MySqlConnection, DirectoryError> {
        let timeout = self.config.connect_timeout();
        let options = self.connect_options();

        match tokio::time::timeout(timeout, MySqlConnection::connect_with(&options)).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(DirectoryError::ConnectionFailed(e.to_string())),
            Err(_) => Err(DirectoryError::ConnectionFailed(format!(
                "timed out after {}s connecting to {}:{}",
                timeout.as_secs(),
                self.config.host,
                self.config.port
            ))),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for MySqlEmployeeDirectory {
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, DirectoryError> {
        debug!(
            host = %self.config.host,
            port = self.config.port,
            database = %self.config.database,
            "Connecting to directory store"
        );

        let mut conn = self.connect().await.inspect_err(|e| {
            warn!(store = %self.config.display_target(), error = %e, "Directory connection failed");
        })?;

        let fetched = sqlx::query_as::<_, EmployeeRow>(LIST_EMPLOYEES_SQL)
            .fetch_all(&mut conn)
            .await;

        // Release before inspecting the query result so every path closes.
        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close directory connection cleanly");
        }

        let rows = fetched.map_err(|e| {
            let err = DirectoryError::from_query(e);
            warn!(error = %err, "Directory query failed");
            err
        })?;

        let records = row::map_rows(rows)?;
        info!(rows = records.len(), "Fetched employee directory");
        Ok(records)
    }
}
