//! Schema document generation
//!
//! Groups mapping entries by output directory and emits one schema.yml per
//! group. Per-column data-quality tests are derivable but only emitted when
//! `emit_column_tests` is enabled in the run configuration.

use crate::error::GenResult;
use ms_core::{
    validate_schema_definitions, GenerationConfig, MappingColumn, MappingDocument,
    ModelConfig, ModelMapping, ModelSchemaEntry, SchemaColumn, SchemaDefRow, SchemaDocument,
    TestDefinition, ValidationIssue,
};
use std::path::PathBuf;

/// Column names that get a not_null test by convention
const DEFAULT_NOT_NULL: &[&str] = &["id", "created_at", "updated_at"];

/// Column names that get a unique test by convention
const DEFAULT_UNIQUE: &[&str] = &["id"];

/// Outcome of a schema generation pass
#[derive(Debug, Default)]
pub struct SchemaGenReport {
    /// Number of schema documents written
    pub documents_written: usize,
    /// Number of model entries emitted across all documents
    pub models_emitted: usize,
    /// Advisory findings from the schema definitions catalog
    pub issues: Vec<ValidationIssue>,
}

/// Generate one schema document per output grouping.
///
/// Models keep their input order within a group; columns keep source
/// order. Validation of the schema definitions catalog is advisory and
/// runs after the documents are written.
pub fn generate_schema_documents(
    mapping: &MappingDocument,
    schema_defs: &[SchemaDefRow],
    config: &GenerationConfig,
) -> GenResult<SchemaGenReport> {
    let mut report = SchemaGenReport::default();

    for (group_dir, entries) in group_models(&mapping.models) {
        let doc = SchemaDocument {
            version: 2,
            models: entries
                .iter()
                .map(|m| build_model_entry(m, config.emit_column_tests))
                .collect(),
        };

        let path = config.project_root.join(&group_dir).join("schema.yml");
        doc.write(&path)?;
        log::info!("Generated schema file: {}", path.display());

        report.documents_written += 1;
        report.models_emitted += entries.len();
    }

    report.issues = validate_schema_definitions(schema_defs);
    if report.issues.is_empty() {
        log::info!("Schema validation passed");
    } else {
        log::warn!("Schema validation issues found:");
        for issue in &report.issues {
            log::warn!("  - {issue}");
        }
    }

    Ok(report)
}

/// Group model entries by output directory, preserving first-seen order.
fn group_models(models: &[ModelMapping]) -> Vec<(PathBuf, Vec<&ModelMapping>)> {
    let mut groups: Vec<(PathBuf, Vec<&ModelMapping>)> = Vec::new();
    for model in models {
        let dir = model.schema_group_dir();
        match groups.iter_mut().find(|(key, _)| *key == dir) {
            Some((_, entries)) => entries.push(model),
            None => groups.push((dir, vec![model])),
        }
    }
    groups
}

/// Build the contract entry for one model.
fn build_model_entry(model: &ModelMapping, emit_tests: bool) -> ModelSchemaEntry {
    ModelSchemaEntry {
        name: model.name.clone(),
        description: model
            .description
            .clone()
            .unwrap_or_else(|| format!("Model for {}", model.name)),
        config: ModelConfig::default(),
        columns: model
            .columns
            .iter()
            .map(|col| build_column(col, emit_tests))
            .collect(),
    }
}

/// Build one column declaration, appending the transformation note.
fn build_column(col: &MappingColumn, emit_tests: bool) -> SchemaColumn {
    let description = col
        .description
        .clone()
        .unwrap_or_else(|| format!("Column {}", col.name));
    let description = match &col.transformation {
        Some(t) => format!("{description} (Transformation: {t})"),
        None => description,
    };

    SchemaColumn {
        name: col.name.clone(),
        description,
        tests: if emit_tests { column_tests(col) } else { Vec::new() },
    }
}

/// Derive data-quality test annotations for a mapping column.
pub fn column_tests(col: &MappingColumn) -> Vec<TestDefinition> {
    let mut tests = Vec::new();

    if col.required.unwrap_or(false) || DEFAULT_NOT_NULL.contains(&col.name.as_str()) {
        tests.push(TestDefinition::parameterized(
            "not_null",
            severity_config("error"),
        ));
    }

    if col.primary_key.unwrap_or(false) || DEFAULT_UNIQUE.contains(&col.name.as_str()) {
        tests.push(TestDefinition::parameterized(
            "unique",
            severity_config("error"),
        ));
    }

    if !col.accepted_values.is_empty() {
        tests.push(TestDefinition::parameterized(
            "accepted_values",
            yaml_map(vec![
                (
                    "values",
                    serde_yaml::Value::Sequence(col.accepted_values.clone()),
                ),
                ("config", severity_value("warn")),
            ]),
        ));
    }

    if let Some(rel) = &col.relationship {
        tests.push(TestDefinition::parameterized(
            "relationships",
            yaml_map(vec![
                ("to", serde_yaml::Value::String(rel.to.clone())),
                ("field", serde_yaml::Value::String(rel.field.clone())),
                ("config", severity_value("error")),
            ]),
        ));
    }

    if let Some(max_length) = col.max_length {
        tests.push(TestDefinition::parameterized(
            "dbt_utils.string_length",
            yaml_map(vec![
                ("max_length", serde_yaml::Value::Number(max_length.into())),
                ("config", severity_value("warn")),
            ]),
        ));
    }

    if let Some(expression) = range_expression(col) {
        tests.push(TestDefinition::parameterized(
            "dbt_utils.expression_is_true",
            yaml_map(vec![("expression", serde_yaml::Value::String(expression))]),
        ));
    }

    if let Some(pattern) = &col.pattern {
        tests.push(TestDefinition::parameterized(
            "dbt_utils.expression_is_true",
            yaml_map(vec![
                (
                    "expression",
                    serde_yaml::Value::String(format!(
                        "{{{{ ref('{}') }}}} ~ '{}'",
                        col.name, pattern
                    )),
                ),
                ("config", severity_value("warn")),
            ]),
        ));
    }

    tests
}

/// Build the numeric range expression, if min or max bounds are present.
fn range_expression(col: &MappingColumn) -> Option<String> {
    let col_ref = format!("{{{{ ref('{}') }}}}", col.name);
    match (col.min_value, col.max_value) {
        (Some(min), Some(max)) => Some(format!("{col_ref} >= {min} and {col_ref} <= {max}")),
        (Some(min), None) => Some(format!("{col_ref} >= {min}")),
        (None, Some(max)) => Some(format!("{col_ref} <= {max}")),
        (None, None) => None,
    }
}

fn yaml_map(entries: Vec<(&str, serde_yaml::Value)>) -> serde_yaml::Value {
    let mut map = serde_yaml::Mapping::new();
    for (key, value) in entries {
        map.insert(serde_yaml::Value::String(key.to_string()), value);
    }
    serde_yaml::Value::Mapping(map)
}

fn severity_value(severity: &str) -> serde_yaml::Value {
    yaml_map(vec![(
        "severity",
        serde_yaml::Value::String(severity.to_string()),
    )])
}

fn severity_config(severity: &str) -> serde_yaml::Value {
    yaml_map(vec![("config", severity_value(severity))])
}

#[cfg(test)]
#[path = "schema_gen_test.rs"]
mod tests;
