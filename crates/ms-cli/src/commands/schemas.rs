//! Schemas command implementation - schema document generation only

use anyhow::{Context, Result};

use crate::cli::{GlobalArgs, SchemasArgs};
use crate::commands::common::{
    load_mapping, read_schema_defs_if_present, resolve_config, ConfigOverrides,
};

/// Execute the schemas command.
pub(crate) async fn execute(args: &SchemasArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(
        global,
        ConfigOverrides {
            mapping_path: Some(args.mapping_path.clone()),
            schema_csv: args.schema_csv.clone(),
            ..Default::default()
        },
    );

    ms_gen::create_project_structure(&config).context("Failed to create project structure")?;

    let mapping = load_mapping(&config)?;
    let schema_defs = read_schema_defs_if_present(&config)?;

    let report = ms_gen::generate_schema_documents(&mapping, &schema_defs, &config)
        .context("Failed to generate schema documents")?;

    if !report.issues.is_empty() {
        println!("Schema validation issues found:");
        for issue in &report.issues {
            println!("  - {issue}");
        }
    }

    println!(
        "\u{2713} Schema files generated successfully! ({} documents, {} models)",
        report.documents_written, report.models_emitted
    );
    Ok(())
}
