//! Sources command implementation - source-catalog merge only

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, SourcesArgs};
use crate::commands::common::{read_schema_defs_if_present, resolve_config, ConfigOverrides};

/// Execute the sources command.
pub(crate) async fn execute(args: &SourcesArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(
        global,
        ConfigOverrides {
            csv_path: Some(args.csv_path.clone()),
            ..Default::default()
        },
    );

    ms_gen::create_project_structure(&config).context("Failed to create project structure")?;

    let rows = ms_core::read_source_catalog(&config.source_csv_path)
        .context("Failed to read source catalog")?;

    let mapping = if config.mapping_yaml_path.exists() {
        Some(
            ms_core::MappingDocument::load(&config.mapping_yaml_path)
                .context("Failed to load mapping document")?,
        )
    } else {
        None
    };
    let schema_defs = read_schema_defs_if_present(&config)?;

    let report = ms_gen::merge_sources(&rows, mapping.as_ref(), &schema_defs, &config)
        .await
        .context("Failed to merge sources")?;

    if !report.lint_violations.is_empty() {
        println!("YAML lint reported {} issue(s):", report.lint_violations.len());
        for violation in &report.lint_violations {
            println!("  {violation}");
        }
    }

    println!(
        "\u{2713} External tables generated successfully! ({} merged)",
        report.tables_merged
    );
    Ok(())
}
