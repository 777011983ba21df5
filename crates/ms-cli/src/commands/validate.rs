//! Validate command implementation - configuration and input checks

use anyhow::{Context, Result};
use ms_core::LlmConfig;
use std::path::Path;

use crate::cli::GlobalArgs;
use crate::commands::common::{resolve_config, ConfigOverrides};

/// Execute the validate command.
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global, ConfigOverrides::default());

    let warnings = config.validate().context("Configuration is invalid")?;
    if warnings.is_empty() {
        println!("\u{2713} Configuration is valid");
    } else {
        println!("\u{2713} Configuration is valid, with warnings:");
        for warning in &warnings {
            println!("  - {warning}");
        }
    }

    let llm_config = LlmConfig::from_env()
        .with_file_overrides(Path::new("config/llm_config.json"))
        .context("Failed to load LLM configuration")?;
    if llm_config.has_credential() {
        println!("\u{2713} Text-generation credential configured ({})", llm_config.model);
    } else {
        println!("! No text-generation credential set; model bodies will use fallback text");
    }

    println!("\u{2713} All validations passed!");
    Ok(())
}
