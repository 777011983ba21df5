//! Best-effort SQL format collaborator
//!
//! Wraps the sqlfmt library behind a TryFormat contract: the call always
//! returns usable content, falling back to the original text on any
//! formatting failure.

use sqlfmt::Mode;

/// Build the formatting mode used for generated model bodies.
fn format_mode() -> Mode {
    Mode {
        line_length: 88,
        dialect_name: "polyglot".to_string(),
        no_jinjafmt: false,
        quiet: true,
        no_progressbar: true,
        check: false,
        diff: false,
        fast: false,
        exclude: Vec::new(),
        encoding: "utf-8".to_string(),
        verbose: false,
        no_color: true,
        force_color: false,
        threads: 0,
        single_process: true,
        reset_cache: false,
    }
}

/// Format SQL, returning the original content unchanged on failure.
pub fn try_format_sql(sql: &str) -> String {
    match sqlfmt::format_string(sql, &format_mode()) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("SQL formatting failed: {e}. Keeping content unformatted.");
            sql.to_string()
        }
    }
}
