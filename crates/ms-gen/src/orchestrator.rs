//! Full-run orchestration
//!
//! Five sequential phases: validate configuration, create the project
//! skeleton, merge the source catalog, then (when a mapping document is
//! present) generate model bodies, schema documents, and unit-test stubs.
//! A phase failure aborts the run; there is no retry. The wall-clock
//! watchdog lives with the caller, which races this future against a
//! timer and abandons it in place on expiry.

use crate::error::GenResult;
use crate::merger::merge_sources;
use crate::model_gen::{generate_model_bodies, CommentPolicy};
use crate::prompts::PromptLibrary;
use crate::schema_gen::generate_schema_documents;
use crate::unit_tests::generate_unit_tests;
use ms_core::{
    read_schema_definitions, read_source_catalog, GenerationConfig, MappingDocument,
};
use ms_llm::TextGenerator;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Directories created under the project root
const PROJECT_DIRS: &[&str] = &["models", "macros", "tests", "docs", "logs", "target"];

/// Outcome of a full generation run
#[derive(Debug)]
pub struct RunSummary {
    /// Unique identifier for this run
    pub run_id: Uuid,

    /// Advisory configuration warnings
    pub warnings: Vec<String>,

    /// Source tables merged into source documents
    pub tables_merged: usize,

    /// Model bodies written
    pub models_generated: usize,

    /// Schema documents written
    pub schema_documents: usize,

    /// Unit-test stubs written
    pub unit_tests: usize,

    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Create the project directory skeleton.
pub fn create_project_structure(config: &GenerationConfig) -> GenResult<()> {
    log::info!("Creating project structure...");
    for dir in PROJECT_DIRS {
        std::fs::create_dir_all(config.project_root.join(dir))?;
    }
    log::info!("Project structure created successfully");
    Ok(())
}

/// Run the complete generation pipeline.
pub async fn run_full_generation(
    config: &GenerationConfig,
    generator: &dyn TextGenerator,
) -> GenResult<RunSummary> {
    let started = Instant::now();
    let run_id = Uuid::new_v4();
    log::info!("Starting full project generation (run {run_id})...");

    let warnings = config.validate()?;
    for warning in &warnings {
        log::warn!("{warning}");
    }

    create_project_structure(config)?;

    let mapping = if config.mapping_yaml_path.exists() {
        Some(MappingDocument::load(&config.mapping_yaml_path)?)
    } else {
        None
    };

    let schema_defs = if config.schema_definitions_path.exists() {
        read_schema_definitions(&config.schema_definitions_path)?
    } else {
        Vec::new()
    };

    let mut summary = RunSummary {
        run_id,
        warnings,
        tables_merged: 0,
        models_generated: 0,
        schema_documents: 0,
        unit_tests: 0,
        elapsed: Duration::ZERO,
    };

    if config.source_csv_path.exists() {
        let rows = read_source_catalog(&config.source_csv_path)?;
        let report = merge_sources(&rows, mapping.as_ref(), &schema_defs, config).await?;
        summary.tables_merged = report.tables_merged;
    } else {
        log::info!("No source catalog at {}; skipping source merge", config.source_csv_path.display());
    }

    if let Some(mapping) = &mapping {
        let prompts = PromptLibrary::load(&config.prompts_path)?;

        summary.models_generated = generate_model_bodies(
            mapping,
            generator,
            &prompts,
            config,
            CommentPolicy::CommentOut,
        )
        .await?;

        let schema_report = generate_schema_documents(mapping, &schema_defs, config)?;
        summary.schema_documents = schema_report.documents_written;

        summary.unit_tests = generate_unit_tests(mapping, generator, &prompts, config).await?;
    } else {
        log::info!(
            "No mapping document at {}; skipping model generation",
            config.mapping_yaml_path.display()
        );
    }

    summary.elapsed = started.elapsed();
    log::info!(
        "Project generation completed in {:.2}s",
        summary.elapsed.as_secs_f64()
    );
    Ok(summary)
}
