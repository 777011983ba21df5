//! Schema document types
//!
//! A schema document declares the contract of the generated models in one
//! output directory: names, descriptions, and (optionally) data-quality
//! test annotations.

use crate::error::CoreResult;
use crate::testing::TestDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A generated schema.yml document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema format version
    pub version: u32,

    /// Model contracts, in input order
    pub models: Vec<ModelSchemaEntry>,
}

impl Default for SchemaDocument {
    fn default() -> Self {
        Self {
            version: 2,
            models: Vec::new(),
        }
    }
}

/// Contract declaration for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchemaEntry {
    /// Model name
    pub name: String,

    /// Model description
    pub description: String,

    /// Model configuration (contract enforcement)
    pub config: ModelConfig,

    /// Column declarations, in source order
    pub columns: Vec<SchemaColumn>,
}

/// Per-model configuration block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Contract settings
    pub contract: ContractConfig,
}

/// Contract enforcement settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Whether the declared columns are enforced at build time
    pub enforced: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            contract: ContractConfig { enforced: true },
        }
    }
}

/// One column declaration within a model contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaColumn {
    /// Column name
    pub name: String,

    /// Column description (transformation note appended when present)
    pub description: String,

    /// Data-quality test annotations (emitted only when enabled)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tests: Vec<TestDefinition>,
}

impl SchemaDocument {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_document_shape() {
        let doc = SchemaDocument {
            version: 2,
            models: vec![ModelSchemaEntry {
                name: "dim_customers".to_string(),
                description: "Customer dimension".to_string(),
                config: ModelConfig::default(),
                columns: vec![SchemaColumn {
                    name: "customer_id".to_string(),
                    description: "Surrogate key".to_string(),
                    tests: Vec::new(),
                }],
            }],
        };

        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("enforced: true"));
        // Empty test lists stay out of the document
        assert!(!yaml.contains("tests:"));
    }
}
