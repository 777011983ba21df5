//! ms-gen - Generation pipeline for Modelsmith
//!
//! This crate implements the source-catalog merge, schema document
//! generation, model body generation, unit-test stubs, and the run
//! orchestrator, plus the best-effort format/lint collaborators.

pub mod error;
pub mod format;
pub mod lint;
pub mod merger;
pub mod model_gen;
pub mod orchestrator;
pub mod prompts;
pub mod schema_gen;
pub mod unit_tests;

pub use error::{GenError, GenResult};
pub use format::try_format_sql;
pub use lint::try_lint_yaml;
pub use merger::{build_table_descriptor, merge_sources, resolve_columns, MergeReport};
pub use model_gen::{generate_model_bodies, CommentPolicy};
pub use orchestrator::{create_project_structure, run_full_generation, RunSummary};
pub use prompts::PromptLibrary;
pub use schema_gen::{generate_schema_documents, SchemaGenReport};
pub use unit_tests::generate_unit_tests;
