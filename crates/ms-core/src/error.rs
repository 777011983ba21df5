//! Error types for ms-core

use thiserror::Error;

/// Core error type for Modelsmith
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Invalid configuration value
    #[error("[E001] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C001: Catalog file not found
    #[error("[C001] Catalog file not found: {path}")]
    CatalogNotFound { path: String },

    /// C002: Failed to parse a catalog file
    #[error("[C002] Failed to parse catalog {path}: {details}")]
    CatalogParseError { path: String, details: String },

    /// C003: Catalog row missing its table name
    #[error("[C003] Catalog row {row} in {path} has an empty table_name")]
    CatalogMissingTableName { path: String, row: usize },

    /// M001: Mapping document not found
    #[error("[M001] Mapping document not found: {path}")]
    MappingNotFound { path: String },

    /// M002: Failed to parse the mapping document
    #[error("[M002] Failed to parse mapping document {path}: {details}")]
    MappingParseError { path: String, details: String },

    /// M003: Mapping entry missing its model name
    #[error("[M003] Mapping entry {index} in '{list}' has an empty name")]
    MappingMissingName { list: String, index: usize },

    /// S001: Failed to parse an existing sources document
    #[error("[S001] Failed to parse sources document {path}: {details}")]
    SourceDocParseError { path: String, details: String },

    /// E014: IO error
    #[error("[E014] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E016: IO error with file path context
    #[error("[E016] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E015: YAML serialization error
    #[error("[E015] YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
