//! Init command implementation - creates the project directory skeleton

use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::commands::common::{resolve_config, ConfigOverrides};

/// Execute the init command.
pub(crate) async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global, ConfigOverrides::default());

    ms_gen::create_project_structure(&config).context("Failed to create project structure")?;

    println!("\u{2713} Project structure initialized successfully!");
    println!("Project location: {}", config.project_root.display());
    println!();
    println!("Next steps:");
    println!("  ms validate     # Check configuration and inputs");
    println!("  ms generate     # Run the full generation pipeline");

    Ok(())
}
