//! Advisory validation of the schema definitions catalog
//!
//! Issues are collected and reported, never raised: a flagged catalog still
//! feeds generation.

use crate::catalog::SchemaDefRow;
use std::collections::HashMap;
use std::fmt;

/// One advisory validation finding
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// A column name appears more than once within a table
    DuplicateColumns {
        table: String,
        columns: Vec<String>,
    },
    /// A column row has an empty name
    MissingColumnName { table: String },
    /// A column has no data type
    MissingDataType { table: String, column: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateColumns { table, columns } => {
                write!(f, "Duplicate column names in {}: {}", table, columns.join(", "))
            }
            ValidationIssue::MissingColumnName { table } => {
                write!(f, "Missing column name in {}", table)
            }
            ValidationIssue::MissingDataType { table, column } => {
                write!(f, "Missing data type for column {} in {}", column, table)
            }
        }
    }
}

/// Validate the schema definitions catalog.
///
/// Flags, per `(schema, table)`: duplicate column names, empty column
/// names, and columns without a data type. Table order follows first
/// appearance in the input.
pub fn validate_schema_definitions(rows: &[SchemaDefRow]) -> Vec<ValidationIssue> {
    let mut table_order: Vec<String> = Vec::new();
    let mut by_table: HashMap<String, Vec<&SchemaDefRow>> = HashMap::new();

    for row in rows {
        let key = format!("{}.{}", row.schema_name, row.table_name);
        if !by_table.contains_key(&key) {
            table_order.push(key.clone());
        }
        by_table.entry(key).or_default().push(row);
    }

    let mut issues = Vec::new();
    for table in &table_order {
        let columns = &by_table[table];

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for row in columns {
            *seen.entry(row.column_name.as_str()).or_insert(0) += 1;
        }
        let mut duplicates: Vec<String> = columns
            .iter()
            .map(|r| r.column_name.as_str())
            .filter(|name| seen[name] > 1)
            .map(String::from)
            .collect();
        duplicates.sort();
        duplicates.dedup();
        if !duplicates.is_empty() {
            issues.push(ValidationIssue::DuplicateColumns {
                table: table.clone(),
                columns: duplicates,
            });
        }

        for row in columns {
            if row.column_name.trim().is_empty() {
                issues.push(ValidationIssue::MissingColumnName {
                    table: table.clone(),
                });
            }
            if row.data_type.trim().is_empty() {
                issues.push(ValidationIssue::MissingDataType {
                    table: table.clone(),
                    column: row.column_name.clone(),
                });
            }
        }
    }

    issues
}
