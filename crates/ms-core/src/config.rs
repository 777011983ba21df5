//! Configuration for a generation run
//!
//! All configuration is resolved once at startup from environment variables
//! (with fixed defaults) plus CLI overrides, then passed around as an
//! immutable value. Nothing reads the environment after construction.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for a project generation run
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Root directory of the generated project
    pub project_root: PathBuf,

    /// Path to the source tables catalog (CSV)
    pub source_csv_path: PathBuf,

    /// Path to the schema definitions catalog (CSV)
    pub schema_definitions_path: PathBuf,

    /// Path to the mapping document (YAML)
    pub mapping_yaml_path: PathBuf,

    /// Directory holding prompt template overrides
    pub prompts_path: PathBuf,

    /// Emit per-column data-quality tests into schema documents
    pub emit_column_tests: bool,

    /// Wall-clock budget for a full generation run, in seconds
    pub run_timeout_secs: u64,
}

impl GenerationConfig {
    /// Build a configuration from environment variables with fixed defaults
    pub fn from_env() -> Self {
        Self {
            project_root: PathBuf::from(env_or("MS_PROJECT_ROOT", "./dbt_project")),
            source_csv_path: PathBuf::from(env_or(
                "MS_SOURCE_CSV_PATH",
                "./config/source_tables.csv",
            )),
            schema_definitions_path: PathBuf::from(env_or(
                "MS_SCHEMA_DEFINITIONS_PATH",
                "./config/schema_definitions.csv",
            )),
            mapping_yaml_path: PathBuf::from(env_or(
                "MS_MAPPING_YAML_PATH",
                "./config/table_mappings.yaml",
            )),
            prompts_path: PathBuf::from(env_or("MS_PROMPTS_PATH", "./prompts")),
            emit_column_tests: env_flag("MS_EMIT_COLUMN_TESTS"),
            run_timeout_secs: env_parsed("MS_RUN_TIMEOUT_SECS", 50),
        }
    }

    /// Validate the configuration.
    ///
    /// Only an empty project root is fatal. Missing input files are advisory:
    /// they are returned as warnings and the corresponding generation phases
    /// are skipped at run time.
    pub fn validate(&self) -> CoreResult<Vec<String>> {
        if self.project_root.as_os_str().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "project root cannot be empty".to_string(),
            });
        }

        let mut warnings = Vec::new();
        for (label, path) in [
            ("source catalog", &self.source_csv_path),
            ("schema definitions", &self.schema_definitions_path),
            ("mapping document", &self.mapping_yaml_path),
        ] {
            if !path.exists() {
                warnings.push(format!("{} not found: {}", label, path.display()));
            }
        }
        if !self.prompts_path.exists() {
            warnings.push(format!(
                "prompts directory not found: {} (using built-in templates)",
                self.prompts_path.display()
            ));
        }
        Ok(warnings)
    }

    /// Directory for generated model files
    pub fn models_dir(&self) -> PathBuf {
        self.project_root.join("models")
    }

    /// Directory for generated unit-test stubs
    pub fn tests_dir(&self) -> PathBuf {
        self.project_root.join("tests")
    }

    /// Directory for run logs (audit records, token usage)
    pub fn logs_dir(&self) -> PathBuf {
        self.project_root.join("logs")
    }

    /// Path of the sources document for a (database, schema) pair
    pub fn sources_path(&self, database: &str, schema: &str) -> PathBuf {
        self.models_dir().join(database).join(schema).join("sources.yml")
    }
}

/// Text-generation service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Service endpoint URL
    pub api_url: String,

    /// Bearer credential
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Nucleus sampling parameter
    pub top_p: f64,

    /// Maximum tokens per response
    pub max_tokens: u32,
}

/// Optional file-based overrides for [`LlmConfig`] (config/llm_config.json)
#[derive(Debug, Deserialize)]
struct LlmConfigFile {
    api_url: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f64>,
    top_p: Option<f64>,
    max_tokens: Option<u32>,
}

impl LlmConfig {
    /// Build a configuration from environment variables with fixed defaults
    pub fn from_env() -> Self {
        Self {
            api_url: env_or(
                "MS_LLM_API_URL",
                "https://api.openai.com/v1/chat/completions",
            ),
            api_key: std::env::var("MS_LLM_API_KEY")
                .or_else(|_| std::env::var("OPENAI_API_KEY"))
                .unwrap_or_default(),
            model: env_or("MS_LLM_MODEL", "gpt-4"),
            temperature: env_parsed("MS_LLM_TEMPERATURE", 0.2),
            top_p: env_parsed("MS_LLM_TOP_P", 1.0),
            max_tokens: env_parsed("MS_LLM_MAX_TOKENS", 4000),
        }
    }

    /// Apply overrides from a JSON config file if one exists at `path`.
    ///
    /// A missing file leaves the configuration untouched. A malformed file
    /// is a fatal input error.
    pub fn with_file_overrides(mut self, path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Ok(self);
        }
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let file: LlmConfigFile = serde_json::from_str(&content)?;
        if let Some(v) = file.api_url {
            self.api_url = v;
        }
        if let Some(v) = file.api_key {
            self.api_key = v;
        }
        if let Some(v) = file.model {
            self.model = v;
        }
        if let Some(v) = file.temperature {
            self.temperature = v;
        }
        if let Some(v) = file.top_p {
            self.top_p = v;
        }
        if let Some(v) = file.max_tokens {
            self.max_tokens = v;
        }
        Ok(self)
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

fn env_parsed<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparseable {key}={raw}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
