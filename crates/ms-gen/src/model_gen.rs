//! Model body generation
//!
//! Each mapping entry produces one model file from two text-generation
//! requests: the SQL body and a pre-deployment checklist. The file is
//! written comment-only by default; generated SQL is never emitted in
//! executable form without an explicit policy change.

use crate::error::GenResult;
use crate::format::try_format_sql;
use crate::prompts::PromptLibrary;
use ms_core::{GenerationConfig, MappingDocument};
use ms_llm::{RequestAudit, TextGenerator};
use std::path::Path;

/// Fallback body when the generator fails or returns nothing
const NO_CODE_FALLBACK: &str = "-- No code generated";

/// Fallback checklist when the generator fails or returns nothing
const NO_CHECKLIST_FALLBACK: &str = "No tester suggestions.";

/// How generated SQL is rendered into the model file.
///
/// `CommentOut` is the default and the only policy the orchestrator uses:
/// unreviewed generated SQL stays inert until a developer uncomments it.
/// Emitting executable bodies requires passing `Verbatim` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Render checklist and body as comment blocks (default)
    #[default]
    CommentOut,
    /// Render the checklist as a comment block, the body as-is
    Verbatim,
}

/// Generate model bodies for every mapping entry, staging models first.
///
/// Returns the number of model files written. Generator failures degrade
/// to fallback text; only IO and template errors abort.
pub async fn generate_model_bodies(
    mapping: &MappingDocument,
    generator: &dyn TextGenerator,
    prompts: &PromptLibrary,
    config: &GenerationConfig,
    policy: CommentPolicy,
) -> GenResult<usize> {
    let models_dir = config.models_dir();
    let mut written = 0;

    for entry in mapping.generation_order() {
        let mapping_json = serde_json::to_string(entry)?;
        let prompt = prompts.model_generation(&entry.name, &mapping_json)?;

        // Written before the call; an abandoned request still leaves its
        // audit record on disk
        let audit = generator.describe_request(&prompt);
        write_audit_log(&config.logs_dir(), &entry.name, &audit)?;

        let sql = match generator.generate(&prompt).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Body generation failed for {}: {e}", entry.name);
                NO_CODE_FALLBACK.to_string()
            }
        };

        let checklist_prompt = prompts.checklist(&entry.name)?;
        let checklist = match generator.generate(&checklist_prompt).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Checklist generation failed for {}: {e}", entry.name);
                NO_CHECKLIST_FALLBACK.to_string()
            }
        };

        let body = try_format_sql(&sql);
        let content = render_model_file(&checklist, &body, policy);

        let path = entry.body_output_path(&models_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;

        log::info!("Generated model body: {}", path.display());
        written += 1;
    }

    Ok(written)
}

/// Render the final model file content.
pub fn render_model_file(checklist: &str, body: &str, policy: CommentPolicy) -> String {
    let rendered_body = match policy {
        CommentPolicy::CommentOut => comment_block(body),
        CommentPolicy::Verbatim => body.to_string(),
    };
    format!("{}\n{}", comment_block(checklist), rendered_body)
}

/// Prefix every line of `text` with a SQL line comment marker.
fn comment_block(text: &str) -> String {
    text.lines()
        .map(|line| format!("-- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the request audit record for one model generation call.
fn write_audit_log(logs_dir: &Path, model_name: &str, audit: &RequestAudit) -> GenResult<()> {
    std::fs::create_dir_all(logs_dir)?;
    let record = format!(
        "URL: {}\nHeaders: {}\nPayload: {}\n",
        audit.url,
        serde_json::to_string(&audit.headers)?,
        serde_json::to_string_pretty(&audit.payload)?,
    );
    std::fs::write(
        logs_dir.join(format!("model_generation_{model_name}.log")),
        record,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_block() {
        assert_eq!(comment_block("select 1\nfrom t"), "-- select 1\n-- from t");
    }

    #[test]
    fn test_render_comment_out_policy() {
        let content = render_model_file("check inputs", "select 1", CommentPolicy::CommentOut);
        assert_eq!(content, "-- check inputs\n-- select 1");
        // Every line is inert
        assert!(content.lines().all(|l| l.starts_with("--")));
    }

    #[test]
    fn test_render_verbatim_policy_keeps_checklist_commented() {
        let content = render_model_file("check inputs", "select 1", CommentPolicy::Verbatim);
        assert_eq!(content, "-- check inputs\nselect 1");
    }
}
