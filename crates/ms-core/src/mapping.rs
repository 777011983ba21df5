//! Mapping document parsing
//!
//! The mapping document is the user-authored YAML connecting source tables
//! to generated models. It carries two lists: `staging_models` and `models`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The user-authored mapping document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MappingDocument {
    /// Staging model entries (generated first)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub staging_models: Vec<ModelMapping>,

    /// General model entries (intermediate, marts, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<ModelMapping>,
}

/// One model entry from the mapping document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMapping {
    /// Model name (identity key)
    pub name: String,

    /// Model type: staging, intermediate, marts, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,

    /// Mart subtype (dimensions or facts) when type is marts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mart_type: Option<String>,

    /// Source table this model reads from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_table: Option<String>,

    /// Model description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Column specifications
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<MappingColumn>,

    /// Free-text behavior hint used when generating unit tests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_behavior: Option<String>,
}

/// One column specification within a model mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingColumn {
    /// Column name
    pub name: String,

    /// SQL data type (accepts both `data_type` and `type` keys)
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// Column description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Transformation applied to produce this column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transformation: Option<String>,

    /// Force quoting of the column identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<bool>,

    /// Output alias for the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Source expression for computed columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Whether the column is required (drives a not_null test)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Whether the column is a primary key (drives a unique test)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,

    /// Allowed values for an accepted_values test
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accepted_values: Vec<serde_yaml::Value>,

    /// Relationship test target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<RelationshipSpec>,

    /// Maximum string length constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Minimum numeric value constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Maximum numeric value constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    /// Regex pattern constraint for string columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Target of a relationship test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipSpec {
    /// Referenced model
    #[serde(default)]
    pub to: String,

    /// Referenced field
    #[serde(default)]
    pub field: String,
}

impl MappingDocument {
    /// Load and validate a mapping document from a path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::MappingNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        let doc: MappingDocument =
            serde_yaml::from_str(&content).map_err(|e| CoreError::MappingParseError {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;

        for (list, entries) in [("staging_models", &doc.staging_models), ("models", &doc.models)] {
            for (index, entry) in entries.iter().enumerate() {
                if entry.name.trim().is_empty() {
                    return Err(CoreError::MappingMissingName {
                        list: list.to_string(),
                        index,
                    });
                }
            }
        }

        Ok(doc)
    }

    /// All entries in body-generation order: staging models first
    pub fn generation_order(&self) -> impl Iterator<Item = &ModelMapping> {
        self.staging_models.iter().chain(self.models.iter())
    }

    /// Find the staging entry describing a source table.
    ///
    /// Matches either by the `stg_<table>` naming convention or by an
    /// explicit `source_table` reference.
    pub fn find_staging_for_table(&self, table_name: &str) -> Option<&ModelMapping> {
        let staging_name = format!("stg_{table_name}");
        self.staging_models.iter().find(|m| {
            m.name == staging_name || m.source_table.as_deref() == Some(table_name)
        })
    }
}

impl ModelMapping {
    /// Output path of the generated model body.
    ///
    /// Marts models land directly under `models/marts/`; everything else
    /// under `models/<type>/` with `staging` as the default type.
    pub fn body_output_path(&self, models_dir: &Path) -> PathBuf {
        let model_type = self.model_type.as_deref().unwrap_or("staging");
        let dir = if model_type == "marts" {
            models_dir.join("marts")
        } else {
            models_dir.join(model_type)
        };
        dir.join(format!("{}.sql", self.name))
    }

    /// Schema-document grouping directory, relative to the project root.
    ///
    /// Marts models group by subtype (`models/marts/<mart_type>`, default
    /// `dimensions`); everything else by type with `marts` as the default.
    pub fn schema_group_dir(&self) -> PathBuf {
        let model_type = self.model_type.as_deref().unwrap_or("marts");
        if model_type == "marts" {
            let mart_type = self.mart_type.as_deref().unwrap_or("dimensions");
            PathBuf::from("models").join(model_type).join(mart_type)
        } else {
            PathBuf::from("models").join(model_type)
        }
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
