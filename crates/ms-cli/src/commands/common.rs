//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ms_core::{GenerationConfig, LlmConfig};
use ms_llm::HttpTextGenerator;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error. The failure has already been reported by the
        // command that raised it.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Per-command overrides applied on top of the environment configuration.
#[derive(Debug, Default)]
pub(crate) struct ConfigOverrides {
    pub csv_path: Option<String>,
    pub mapping_path: Option<String>,
    pub schema_csv: Option<String>,
}

/// Resolve the run configuration: environment defaults, then CLI overrides.
pub(crate) fn resolve_config(global: &GlobalArgs, overrides: ConfigOverrides) -> GenerationConfig {
    let mut config = GenerationConfig::from_env();

    if let Some(root) = &global.project_root {
        config.project_root = PathBuf::from(root);
    }
    if let Some(path) = overrides.csv_path {
        config.source_csv_path = PathBuf::from(path);
    }
    if let Some(path) = overrides.mapping_path {
        config.mapping_yaml_path = PathBuf::from(path);
    }
    if let Some(path) = overrides.schema_csv {
        config.schema_definitions_path = PathBuf::from(path);
    }

    config
}

/// Build the HTTP text generator from environment and optional file config.
pub(crate) fn build_generator(config: &GenerationConfig) -> Result<HttpTextGenerator> {
    let llm_config = LlmConfig::from_env()
        .with_file_overrides(Path::new("config/llm_config.json"))
        .context("Failed to load LLM configuration")?;

    if !llm_config.has_credential() {
        log::warn!("No text-generation credential configured; requests will be rejected and bodies will fall back to placeholders");
    }

    Ok(HttpTextGenerator::new(llm_config).with_usage_log(config.logs_dir()))
}

/// Load the mapping document with command-level context.
pub(crate) fn load_mapping(config: &GenerationConfig) -> Result<ms_core::MappingDocument> {
    ms_core::MappingDocument::load(&config.mapping_yaml_path)
        .context("Failed to load mapping document")
}

/// Read schema definitions when the catalog file exists, else empty.
pub(crate) fn read_schema_defs_if_present(
    config: &GenerationConfig,
) -> Result<Vec<ms_core::SchemaDefRow>> {
    if config.schema_definitions_path.exists() {
        Ok(ms_core::read_schema_definitions(&config.schema_definitions_path)
            .context("Failed to read schema definitions")?)
    } else {
        log::info!(
            "Proceeding without schema definitions ({} not found)",
            config.schema_definitions_path.display()
        );
        Ok(Vec::new())
    }
}
