//! Mapping from `employees` rows to `EmployeeRecord`.

use roster_core::EmployeeRecord;
use sqlx::FromRow;

use crate::error::DirectoryError;

/// The fixed directory statement. Columns are named so mapping never
/// depends on their position, and there is no ORDER BY: rows come back in
/// the order the store returns them.
///
/// `emp_no` is cast to a signed BIGINT so `INT` and `INT UNSIGNED` columns
/// both decode into `EmployeeRow::emp_no`.
pub const LIST_EMPLOYEES_SQL: &str =
    "SELECT CAST(emp_no AS SIGNED) AS emp_no, first_name, last_name FROM employees";

/// One raw row, decoded by column name.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub emp_no: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl TryFrom<EmployeeRow> for EmployeeRecord {
    type Error = DirectoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let employee_number =
            u32::try_from(row.emp_no).map_err(|_| DirectoryError::InvalidRecord {
                reason: format!("emp_no {} is outside 0..={}", row.emp_no, u32::MAX),
            })?;

        Ok(EmployeeRecord {
            employee_number,
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
        })
    }
}

/// Map rows in order, stopping at the first one that cannot be represented.
pub fn map_rows(rows: Vec<EmployeeRow>) -> Result<Vec<EmployeeRecord>, DirectoryError> {
    rows.into_iter().map(EmployeeRecord::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(emp_no: i64, first: Option<&str>, last: Option<&str>) -> EmployeeRow {
        EmployeeRow {
            emp_no,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_all_three_columns_are_mapped() {
        let record = EmployeeRecord::try_from(row(1, Some("Sergio"), Some("Sánchez"))).unwrap();
        assert_eq!(record, EmployeeRecord::new(1, "Sergio", "Sánchez"));
    }

    #[test]
    fn test_null_names_become_empty_strings() {
        let record = EmployeeRecord::try_from(row(42, None, None)).unwrap();
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.employee_number, 42);
    }

    #[test]
    fn test_negative_employee_number_is_rejected() {
        let err = EmployeeRecord::try_from(row(-3, Some("Ghost"), None)).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord { .. }));
        assert!(err.diagnostic().contains("-3"));
    }

    #[test]
    fn test_oversized_employee_number_is_rejected() {
        let err = EmployeeRecord::try_from(row(i64::from(u32::MAX) + 1, None, None)).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord { .. }));
    }

    #[test]
    fn test_map_rows_preserves_order() {
        let records = map_rows(vec![
            row(3, Some("C"), None),
            row(1, Some("A"), None),
            row(2, Some("B"), None),
        ])
        .unwrap();
        let numbers: Vec<u32> = records.iter().map(|r| r.employee_number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn test_map_rows_of_nothing_is_empty() {
        assert!(map_rows(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_statement_is_fixed_and_unordered() {
        let sql = LIST_EMPLOYEES_SQL.to_ascii_uppercase();
        assert!(sql.ends_with("FIRST_NAME, LAST_NAME FROM EMPLOYEES"));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_statement_decodes_employee_number_as_signed() {
        // Unsigned integer columns are not i64-compatible in sqlx; the cast
        // keeps the column alias so FromRow still finds it by name.
        let sql = LIST_EMPLOYEES_SQL.to_ascii_uppercase();
        assert!(sql.starts_with("SELECT CAST(EMP_NO AS SIGNED) AS EMP_NO,"));
    }
}
