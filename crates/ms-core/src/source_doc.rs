//! Source document types and persistence
//!
//! A source document declares externally-owned tables for one
//! (database, schema) pair, persisted at
//! `models/<database>/<schema>/sources.yml`. The document is always read
//! and rewritten whole; there are no partial updates.

use crate::error::{CoreError, CoreResult};
use crate::testing::TestDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A generated sources.yml document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Schema format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Source groups (one per schema; documents are scoped to one schema)
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

fn default_version() -> u32 {
    2
}

impl Default for SourceDocument {
    fn default() -> Self {
        Self {
            version: default_version(),
            sources: Vec::new(),
        }
    }
}

/// One source group within a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Schema name
    pub name: String,

    /// Group description
    pub description: String,

    /// Tables declared in this group
    #[serde(default)]
    pub tables: Vec<SourceTableDescriptor>,
}

/// One external table declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceTableDescriptor {
    /// Table name (identity key within the document)
    pub name: String,

    /// Table description
    pub description: String,

    /// External storage configuration
    pub external: ExternalSpec,

    /// Column declarations, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDescriptor>>,
}

/// External storage configuration for a source table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalSpec {
    /// Storage location (e.g. an object-store URI)
    pub location: String,

    /// File format of the stored data
    pub file_format: String,

    /// Partition columns, when the table is partitioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partitions: Option<Vec<PartitionSpec>>,

    /// Clustering columns, when any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_by: Option<Vec<String>>,

    /// Refresh cadence hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_frequency: Option<String>,
}

/// One partition column declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartitionSpec {
    /// Partition column name
    pub name: String,

    /// Partition column type
    pub data_type: String,
}

/// One column declaration within a source table
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// SQL data type
    pub data_type: String,

    /// Column description. Mapping-derived columns always carry one
    /// (possibly empty); catalog-derived columns omit empty descriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Force quoting of the column identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<bool>,

    /// Output alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Source expression for computed columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,

    /// Data-quality test annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<TestDefinition>,
}

impl SourceDocument {
    /// Load an existing document, or start an empty one if the file is
    /// absent. A present-but-unparseable file is a fatal input error.
    pub fn load_or_default(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| CoreError::SourceDocParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })
    }

    /// Find or create the source entry for a schema.
    pub fn entry_mut(&mut self, schema: &str) -> &mut SourceEntry {
        // Positional lookup keeps the borrow checker happy across the push
        let idx = self.sources.iter().position(|s| s.name == schema);
        match idx {
            Some(i) => &mut self.sources[i],
            None => {
                self.sources.push(SourceEntry {
                    name: schema.to_string(),
                    description: format!("External tables in {schema} schema"),
                    tables: Vec::new(),
                });
                let last = self.sources.len() - 1;
                &mut self.sources[last]
            }
        }
    }

    /// Render the document as YAML with an explicit document-start marker.
    pub fn to_yaml(&self) -> CoreResult<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("---\n{body}"))
    }

    /// Rewrite the whole document at `path`, creating parent directories.
    pub fn write(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

impl SourceEntry {
    /// Insert or replace a table declaration by name.
    ///
    /// Any stale entry with the same name is removed first, so re-merging
    /// the same table replaces it in place instead of duplicating it.
    pub fn upsert_table(&mut self, table: SourceTableDescriptor) {
        self.tables.retain(|t| t.name != table.name);
        self.tables.push(table);
    }
}

#[cfg(test)]
#[path = "source_doc_test.rs"]
mod tests;
