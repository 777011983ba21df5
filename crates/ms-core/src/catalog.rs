//! Readers for the tabular input catalogs
//!
//! Two CSV catalogs feed a generation run: the source tables catalog (one
//! row per external table) and the schema definitions catalog (one row per
//! column). Both require a header row; unknown columns are ignored.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::path::Path;

/// One row of the source tables catalog
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTableRow {
    /// Table name (required, non-empty)
    pub table_name: String,

    /// Source database (defaults to "default")
    pub source_database: String,

    /// Source schema (defaults to "public")
    pub source_schema: String,

    /// Table description
    pub description: String,

    /// External storage location (e.g. an object-store URI)
    pub location: String,

    /// File format of the external data
    pub file_format: String,

    /// Partition column, if the table is partitioned
    pub partition_by: Option<String>,

    /// Clustering column, if any
    pub cluster_by: Option<String>,

    /// Refresh cadence hint
    pub refresh_frequency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSourceRow {
    #[serde(default)]
    table_name: Option<String>,
    #[serde(default)]
    source_database: Option<String>,
    #[serde(default)]
    source_schema: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    file_format: Option<String>,
    #[serde(default)]
    partition_by: Option<String>,
    #[serde(default)]
    cluster_by: Option<String>,
    #[serde(default)]
    refresh_frequency: Option<String>,
}

/// One row of the schema definitions catalog
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefRow {
    /// Schema the table lives in
    pub schema_name: String,

    /// Table the column belongs to
    pub table_name: String,

    /// Column name
    pub column_name: String,

    /// SQL data type
    pub data_type: String,

    /// Column description, if any
    pub description: Option<String>,

    /// Derived expression, if the column is computed
    pub expression: Option<String>,

    /// Whether NULL values are allowed (defaults to true)
    pub is_nullable: bool,

    /// Whether the column is the primary key (defaults to false)
    pub is_primary_key: bool,

    /// Whether values must be unique (defaults to false)
    pub is_unique: bool,

    /// Default value expression, if any
    pub default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSchemaDefRow {
    #[serde(default)]
    schema_name: Option<String>,
    #[serde(default)]
    table_name: Option<String>,
    #[serde(default)]
    column_name: Option<String>,
    #[serde(default)]
    data_type: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    expression: Option<String>,
    #[serde(default)]
    is_nullable: Option<String>,
    #[serde(default)]
    is_primary_key: Option<String>,
    #[serde(default)]
    is_unique: Option<String>,
    #[serde(default)]
    default_value: Option<String>,
}

/// Coerce a boolean catalog flag.
///
/// Accepts the literal strings "true"/"false" case-insensitively; anything
/// else (including absence) falls back to the field's documented default.
pub fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}

/// Read the source tables catalog.
///
/// A missing file or unreadable content is fatal; so is a row with an
/// empty `table_name` (C003).
pub fn read_source_catalog(path: &Path) -> CoreResult<Vec<SourceTableRow>> {
    if !path.exists() {
        return Err(CoreError::CatalogNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| CoreError::CatalogParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawSourceRow>().enumerate() {
        // Header is line 1; data rows start at line 2
        let line = idx + 2;
        let raw = record.map_err(|e| CoreError::CatalogParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        let table_name = match trimmed(raw.table_name) {
            Some(name) => name,
            None => {
                return Err(CoreError::CatalogMissingTableName {
                    path: path.display().to_string(),
                    row: line,
                })
            }
        };

        rows.push(SourceTableRow {
            table_name,
            source_database: trimmed(raw.source_database)
                .unwrap_or_else(|| "default".to_string()),
            source_schema: trimmed(raw.source_schema).unwrap_or_else(|| "public".to_string()),
            description: trimmed(raw.description).unwrap_or_default(),
            location: trimmed(raw.location).unwrap_or_default(),
            file_format: trimmed(raw.file_format).unwrap_or_default(),
            partition_by: trimmed(raw.partition_by),
            cluster_by: trimmed(raw.cluster_by),
            refresh_frequency: trimmed(raw.refresh_frequency),
        });
    }

    log::info!("Read {} source tables from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read the schema definitions catalog.
///
/// Rows missing any of schema/table/column name are skipped with a warning
/// rather than aborting the run.
pub fn read_schema_definitions(path: &Path) -> CoreResult<Vec<SchemaDefRow>> {
    if !path.exists() {
        return Err(CoreError::CatalogNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| CoreError::CatalogParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawSchemaDefRow>().enumerate() {
        let line = idx + 2;
        let raw = record.map_err(|e| CoreError::CatalogParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        let (schema_name, table_name, column_name) = match (
            trimmed(raw.schema_name),
            trimmed(raw.table_name),
            trimmed(raw.column_name),
        ) {
            (Some(s), Some(t), Some(c)) => (s, t, c),
            _ => {
                log::warn!(
                    "Skipping incomplete schema definition row {} in {}",
                    line,
                    path.display()
                );
                continue;
            }
        };

        rows.push(SchemaDefRow {
            schema_name,
            table_name,
            column_name,
            data_type: trimmed(raw.data_type).unwrap_or_default(),
            description: trimmed(raw.description),
            expression: trimmed(raw.expression),
            is_nullable: parse_flag(raw.is_nullable.as_deref(), true),
            is_primary_key: parse_flag(raw.is_primary_key.as_deref(), false),
            is_unique: parse_flag(raw.is_unique.as_deref(), false),
            default_value: trimmed(raw.default_value),
        });
    }

    log::info!(
        "Read {} schema definitions from {}",
        rows.len(),
        path.display()
    );
    Ok(rows)
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
