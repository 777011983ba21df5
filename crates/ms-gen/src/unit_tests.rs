//! Unit-test stub generation
//!
//! Reads each generated model body back from disk and asks the text
//! generator for unit tests, guided by the mapping's `expected_behavior`
//! hint. Missing model files and generator failures skip the entry.

use crate::error::GenResult;
use crate::prompts::PromptLibrary;
use ms_core::{GenerationConfig, MappingDocument};
use ms_llm::TextGenerator;

/// Generate unit-test stubs for every entry in the `models` list.
///
/// Returns the number of test files written.
pub async fn generate_unit_tests(
    mapping: &MappingDocument,
    generator: &dyn TextGenerator,
    prompts: &PromptLibrary,
    config: &GenerationConfig,
) -> GenResult<usize> {
    let models_dir = config.models_dir();
    let tests_dir = config.tests_dir();
    let mut written = 0;

    for entry in &mapping.models {
        let model_path = entry.body_output_path(&models_dir);
        if !model_path.exists() {
            log::warn!(
                "Model file not found for testing: {}",
                model_path.display()
            );
            continue;
        }
        let model_code = std::fs::read_to_string(&model_path)?;

        let prompt = prompts.unit_test(
            &entry.name,
            &model_code,
            entry.expected_behavior.as_deref().unwrap_or(""),
        )?;

        let test_code = match generator.generate(&prompt).await {
            Ok(content) => content,
            Err(e) => {
                log::error!("Error generating tests for {}: {e}", entry.name);
                continue;
            }
        };

        std::fs::create_dir_all(&tests_dir)?;
        let test_path = tests_dir.join(format!("test_{}.sql", entry.name));
        std::fs::write(&test_path, test_code)?;

        log::info!("Generated unit tests: test_{}.sql", entry.name);
        written += 1;
    }

    Ok(written)
}
