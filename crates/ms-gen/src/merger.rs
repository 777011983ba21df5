//! Source-catalog merger
//!
//! Folds catalog rows into per-(database, schema) source documents.
//! Each row is processed independently: read the target document if it
//! exists, replace any stale entry for the same table, rewrite the whole
//! file. Re-running a merge is idempotent.

use crate::error::GenResult;
use crate::lint::try_lint_yaml;
use ms_core::{
    derive_constraint_tests, ColumnDescriptor, ExternalSpec, GenerationConfig, MappingDocument,
    PartitionSpec, SchemaDefRow, SourceDocument, SourceTableDescriptor, SourceTableRow,
};

/// Outcome of a merge pass over the source catalog
#[derive(Debug, Default)]
pub struct MergeReport {
    /// Number of table descriptors merged
    pub tables_merged: usize,
    /// Lint violations reported per written file (advisory)
    pub lint_violations: Vec<String>,
}

/// Merge every catalog row into its source document.
///
/// `mapping` and `schema_defs` feed column resolution; either may be
/// absent. Lint findings are advisory and never fail the merge.
pub async fn merge_sources(
    rows: &[SourceTableRow],
    mapping: Option<&MappingDocument>,
    schema_defs: &[SchemaDefRow],
    config: &GenerationConfig,
) -> GenResult<MergeReport> {
    let mut report = MergeReport::default();

    for row in rows {
        let columns = resolve_columns(row, mapping, schema_defs);
        let descriptor = build_table_descriptor(row, columns);

        let path = config.sources_path(&row.source_database, &row.source_schema);
        let mut doc = SourceDocument::load_or_default(&path)?;
        doc.entry_mut(&row.source_schema).upsert_table(descriptor);
        doc.write(&path)?;

        log::info!(
            "Merged source table {} into {}",
            row.table_name,
            path.display()
        );
        report.tables_merged += 1;

        let violations = try_lint_yaml(&path).await;
        for violation in &violations {
            log::warn!("YAML lint: {}", violation);
        }
        report.lint_violations.extend(violations);
    }

    Ok(report)
}

/// Resolve columns for a source table.
///
/// Two-stage lookup, first populated source wins: the mapping document's
/// staging entry takes precedence; the schema definitions catalog is the
/// fallback. Partial data from the two sources is never merged.
pub fn resolve_columns(
    row: &SourceTableRow,
    mapping: Option<&MappingDocument>,
    schema_defs: &[SchemaDefRow],
) -> Option<Vec<ColumnDescriptor>> {
    if let Some(staging) = mapping.and_then(|m| m.find_staging_for_table(&row.table_name)) {
        let columns: Vec<ColumnDescriptor> = staging
            .columns
            .iter()
            .map(|col| ColumnDescriptor {
                name: col.name.clone(),
                data_type: col.data_type.clone().unwrap_or_default(),
                description: Some(col.description.clone().unwrap_or_default()),
                quote: col.quote,
                alias: col.alias.clone(),
                expression: col.expression.clone(),
                tests: Vec::new(),
            })
            .collect();
        if !columns.is_empty() {
            return Some(columns);
        }
    }

    let columns: Vec<ColumnDescriptor> = schema_defs
        .iter()
        .filter(|def| {
            def.schema_name == row.source_schema && def.table_name == row.table_name
        })
        .map(|def| ColumnDescriptor {
            name: def.column_name.clone(),
            data_type: def.data_type.clone(),
            description: def.description.clone(),
            quote: None,
            alias: None,
            expression: def.expression.clone(),
            tests: derive_constraint_tests(def.is_primary_key, def.is_nullable),
        })
        .collect();

    if columns.is_empty() {
        None
    } else {
        Some(columns)
    }
}

/// Build the external table descriptor for one catalog row.
pub fn build_table_descriptor(
    row: &SourceTableRow,
    columns: Option<Vec<ColumnDescriptor>>,
) -> SourceTableDescriptor {
    SourceTableDescriptor {
        name: row.table_name.clone(),
        description: row.description.clone(),
        external: ExternalSpec {
            location: row.location.clone(),
            file_format: row.file_format.clone(),
            partitions: row.partition_by.as_ref().map(|name| {
                vec![PartitionSpec {
                    name: name.clone(),
                    data_type: "date".to_string(),
                }]
            }),
            cluster_by: row.cluster_by.as_ref().map(|c| vec![c.clone()]),
            refresh_frequency: row.refresh_frequency.clone(),
        },
        columns,
    }
}

#[cfg(test)]
#[path = "merger_test.rs"]
mod tests;
