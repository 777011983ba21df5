//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Modelsmith - scaffolds dbt-style project files from catalogs and mapping documents
#[derive(Parser, Debug)]
#[command(name = "ms")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory for the generated project
    #[arg(short = 'p', long, global = true, env = "MS_PROJECT_ROOT")]
    pub project_root: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the complete project generation pipeline
    Generate(GenerateArgs),

    /// Merge the source tables catalog into source documents
    Sources(SourcesArgs),

    /// Generate model bodies from the mapping document
    Models(ModelsArgs),

    /// Generate schema documents from the mapping document
    Schemas(SchemasArgs),

    /// Generate unit-test stubs for mapped models
    Tests(TestsArgs),

    /// Create the project directory skeleton
    Init,

    /// Validate configuration and report missing inputs
    Validate,

    /// Format a SQL file in place (best-effort)
    Fmt(FmtArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the source tables CSV file
    #[arg(short = 'c', long)]
    pub csv_path: Option<String>,

    /// Path to the mapping YAML file
    #[arg(short = 'm', long)]
    pub mapping_path: Option<String>,

    /// Wall-clock budget for the run, in seconds
    #[arg(long, env = "MS_RUN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

/// Arguments for the sources command
#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// Path to the source tables CSV file
    #[arg(short = 'c', long)]
    pub csv_path: String,
}

/// Arguments for the models command
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Path to the mapping YAML file
    #[arg(short = 'm', long)]
    pub mapping_path: String,
}

/// Arguments for the schemas command
#[derive(Args, Debug)]
pub struct SchemasArgs {
    /// Path to the mapping YAML file
    #[arg(short = 'm', long)]
    pub mapping_path: String,

    /// Path to the schema definitions CSV file
    #[arg(short = 's', long)]
    pub schema_csv: Option<String>,
}

/// Arguments for the tests command
#[derive(Args, Debug)]
pub struct TestsArgs {
    /// Path to the mapping YAML file
    #[arg(short = 'm', long)]
    pub mapping_path: String,
}

/// Arguments for the fmt command
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Path to the SQL file to format
    #[arg(short = 'f', long)]
    pub sql_file: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
