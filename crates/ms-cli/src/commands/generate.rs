//! Generate command implementation - the full pipeline under a watchdog

use anyhow::Result;
use std::time::Duration;

use crate::cli::{GenerateArgs, GlobalArgs};
use crate::commands::common::{build_generator, resolve_config, ConfigOverrides, ExitCode};

/// Execute the generate command.
///
/// The whole run races a wall-clock timer. On expiry the run is abandoned
/// in place (in-flight writes may still land) and the timeout is reported
/// distinctly from content failures.
pub(crate) async fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(
        global,
        ConfigOverrides {
            csv_path: args.csv_path.clone(),
            mapping_path: args.mapping_path.clone(),
            ..Default::default()
        },
    );
    let generator = build_generator(&config)?;

    let budget_secs = args.timeout_secs.unwrap_or(config.run_timeout_secs);
    if global.verbose {
        eprintln!("[verbose] Running full generation with a {budget_secs}s budget");
    }

    let run = ms_gen::run_full_generation(&config, &generator);
    match tokio::time::timeout(Duration::from_secs(budget_secs), run).await {
        Err(_) => {
            eprintln!("\u{2717} Generation run timed out after {budget_secs} seconds");
            Err(ExitCode(1).into())
        }
        Ok(Err(e)) => {
            eprintln!("\u{2717} Error generating project: {e}");
            Err(ExitCode(1).into())
        }
        Ok(Ok(summary)) => {
            println!("\u{2713} Project generated successfully!");
            println!("Project location: {}", config.project_root.display());
            println!(
                "  {} sources merged, {} model bodies, {} schema documents, {} unit tests ({:.2}s, run {})",
                summary.tables_merged,
                summary.models_generated,
                summary.schema_documents,
                summary.unit_tests,
                summary.elapsed.as_secs_f64(),
                summary.run_id,
            );
            Ok(())
        }
    }
}
