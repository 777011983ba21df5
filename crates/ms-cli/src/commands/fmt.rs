//! Fmt command implementation - best-effort SQL formatting

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::{FmtArgs, GlobalArgs};

/// Execute the fmt command.
pub(crate) async fn execute(args: &FmtArgs, global: &GlobalArgs) -> Result<()> {
    let path = Path::new(&args.sql_file);
    let sql = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if global.verbose {
        eprintln!("[verbose] Formatting {}", path.display());
    }

    let formatted = ms_gen::try_format_sql(&sql);
    std::fs::write(path, &formatted)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if formatted == sql {
        println!("\u{2713} {} already formatted", path.display());
    } else {
        println!("\u{2713} SQL file formatted successfully: {}", path.display());
    }
    Ok(())
}
