//! ms-core - Core library for Modelsmith
//!
//! This crate provides the shared types, configuration, input readers, and
//! generated-document models used across all Modelsmith components.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mapping;
pub mod schema_doc;
pub mod source_doc;
pub mod testing;
pub mod validate;

pub use catalog::{parse_flag, read_schema_definitions, read_source_catalog, SchemaDefRow, SourceTableRow};
pub use config::{GenerationConfig, LlmConfig};
pub use error::{CoreError, CoreResult};
pub use mapping::{MappingColumn, MappingDocument, ModelMapping, RelationshipSpec};
pub use schema_doc::{ModelConfig, ModelSchemaEntry, SchemaColumn, SchemaDocument};
pub use source_doc::{
    ColumnDescriptor, ExternalSpec, PartitionSpec, SourceDocument, SourceEntry,
    SourceTableDescriptor,
};
pub use testing::{derive_constraint_tests, TestDefinition};
pub use validate::{validate_schema_definitions, ValidationIssue};
