//! Error types for the directory adapter.

use thiserror::Error;

/// Errors that can end a fetch cycle.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The store could not be reached, rejected the login, or has no such
    /// schema. The query was never attempted.
    #[error("failed to connect to directory store: {0}")]
    ConnectionFailed(String),

    /// The connection opened but the statement was rejected or failed.
    #[error("directory query failed: {0}")]
    QueryExecutionFailed(String),

    /// A returned row could not become an `EmployeeRecord`.
    #[error("invalid employee row: {reason}")]
    InvalidRecord { reason: String },
}

impl DirectoryError {
    /// Human-readable diagnostic carried by the error.
    pub fn diagnostic(&self) -> &str {
        match self {
            DirectoryError::ConnectionFailed(msg) | DirectoryError::QueryExecutionFailed(msg) => msg,
            DirectoryError::InvalidRecord { reason } => reason,
        }
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, DirectoryError::ConnectionFailed(_))
    }

    /// Classify an error raised while running the query.
    pub(crate) fn from_query(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => DirectoryError::InvalidRecord {
                reason: format!("column {}: {}", index, source),
            },
            sqlx::Error::Decode(source) => DirectoryError::InvalidRecord {
                reason: source.to_string(),
            },
            other => DirectoryError::QueryExecutionFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_is_carried_verbatim() {
        let err = DirectoryError::ConnectionFailed("Connection refused (os error 111)".into());
        assert_eq!(err.diagnostic(), "Connection refused (os error 111)");
        assert!(err.is_connection_failure());
        assert!(err.to_string().starts_with("failed to connect"));
    }

    #[test]
    fn test_query_errors_are_not_connection_failures() {
        let err = DirectoryError::from_query(sqlx::Error::RowNotFound);
        assert!(matches!(err, DirectoryError::QueryExecutionFailed(_)));
        assert!(!err.is_connection_failure());
        assert!(!err.diagnostic().is_empty());
    }

    #[test]
    fn test_decode_errors_are_invalid_records() {
        let err = DirectoryError::from_query(sqlx::Error::Decode("bad integer".into()));
        match err {
            DirectoryError::InvalidRecord { reason } => assert_eq!(reason, "bad integer"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
