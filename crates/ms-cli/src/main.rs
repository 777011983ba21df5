//! Modelsmith CLI - scaffolds dbt-style projects from catalogs and mapping documents

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::common::ExitCode;
use commands::{fmt, generate, init, models, schemas, sources, tests, validate};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    if let Err(e) = run(&cli).await {
        if let Some(code) = e.downcast_ref::<ExitCode>() {
            std::process::exit(code.0);
        }
        eprintln!("\u{2717} {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::Generate(args) => generate::execute(args, &cli.global).await,
        cli::Commands::Sources(args) => sources::execute(args, &cli.global).await,
        cli::Commands::Models(args) => models::execute(args, &cli.global).await,
        cli::Commands::Schemas(args) => schemas::execute(args, &cli.global).await,
        cli::Commands::Tests(args) => tests::execute(args, &cli.global).await,
        cli::Commands::Init => init::execute(&cli.global).await,
        cli::Commands::Validate => validate::execute(&cli.global).await,
        cli::Commands::Fmt(args) => fmt::execute(args, &cli.global).await,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}
