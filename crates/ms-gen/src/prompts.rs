//! Prompt templates for the text-generation collaborator
//!
//! Templates are minijinja sources resolved from the configured prompts
//! directory, falling back to built-in defaults when no override file
//! exists. Template names mirror the files users may drop in:
//! `model_generation.txt`, `checklist.txt`, `unit_test.txt`.

use crate::error::{GenError, GenResult};
use minijinja::{context, Environment};
use std::path::Path;

const MODEL_GENERATION: &str = "model_generation";
const CHECKLIST: &str = "checklist";
const UNIT_TEST: &str = "unit_test";

const DEFAULT_MODEL_GENERATION: &str =
    "Generate dbt model for {{ model_name }} with mapping: {{ mapping_json }}";

const DEFAULT_CHECKLIST: &str = "Suggest checks a developer should do before deploying \
the dbt model {{ model_name }}. Return as a checklist.";

const DEFAULT_UNIT_TEST: &str = "You are an expert dbt developer. Generate comprehensive \
unit tests for the following model.\n\nModel name: {{ model_name }}\nExpected behavior: \
{{ expected_behavior }}\n\nModel code:\n{{ model_code }}";

/// Loaded prompt templates for one generation run
pub struct PromptLibrary {
    env: Environment<'static>,
}

impl PromptLibrary {
    /// Load templates, preferring `<name>.txt` files under `prompts_dir`.
    pub fn load(prompts_dir: &Path) -> GenResult<Self> {
        let mut env = Environment::new();

        for (name, default_source) in [
            (MODEL_GENERATION, DEFAULT_MODEL_GENERATION),
            (CHECKLIST, DEFAULT_CHECKLIST),
            (UNIT_TEST, DEFAULT_UNIT_TEST),
        ] {
            let override_path = prompts_dir.join(format!("{name}.txt"));
            let source = if override_path.exists() {
                std::fs::read_to_string(&override_path)?
            } else {
                default_source.to_string()
            };
            env.add_template_owned(name.to_string(), source)
                .map_err(|e| GenError::Template(e.to_string()))?;
        }

        Ok(Self { env })
    }

    /// Render the model body generation prompt
    pub fn model_generation(&self, model_name: &str, mapping_json: &str) -> GenResult<String> {
        self.render(
            MODEL_GENERATION,
            context! { model_name, mapping_json },
        )
    }

    /// Render the pre-deployment checklist prompt
    pub fn checklist(&self, model_name: &str) -> GenResult<String> {
        self.render(CHECKLIST, context! { model_name })
    }

    /// Render the unit-test generation prompt
    pub fn unit_test(
        &self,
        model_name: &str,
        model_code: &str,
        expected_behavior: &str,
    ) -> GenResult<String> {
        self.render(
            UNIT_TEST,
            context! { model_name, model_code, expected_behavior },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> GenResult<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| GenError::Template(e.to_string()))?;
        template
            .render(ctx)
            .map_err(|e| GenError::Template(e.to_string()))
    }
}
