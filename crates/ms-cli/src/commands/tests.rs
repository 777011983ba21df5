//! Tests command implementation - unit-test stub generation only

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, TestsArgs};
use crate::commands::common::{build_generator, load_mapping, resolve_config, ConfigOverrides};

/// Execute the tests command.
pub(crate) async fn execute(args: &TestsArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(
        global,
        ConfigOverrides {
            mapping_path: Some(args.mapping_path.clone()),
            ..Default::default()
        },
    );

    ms_gen::create_project_structure(&config).context("Failed to create project structure")?;

    let mapping = load_mapping(&config)?;
    let prompts = ms_gen::PromptLibrary::load(&config.prompts_path)
        .context("Failed to load prompt templates")?;
    let generator = build_generator(&config)?;

    let written = ms_gen::generate_unit_tests(&mapping, &generator, &prompts, &config)
        .await
        .context("Failed to generate unit tests")?;

    println!("\u{2713} Unit tests generated successfully! ({written} written)");
    Ok(())
}
