use super::*;

#[test]
fn test_sources_path_layout() {
    let config = GenerationConfig {
        project_root: PathBuf::from("/tmp/project"),
        source_csv_path: PathBuf::from("source_tables.csv"),
        schema_definitions_path: PathBuf::from("schema_definitions.csv"),
        mapping_yaml_path: PathBuf::from("table_mappings.yaml"),
        prompts_path: PathBuf::from("prompts"),
        emit_column_tests: false,
        run_timeout_secs: 50,
    };

    assert_eq!(
        config.sources_path("raw_data", "analytics"),
        PathBuf::from("/tmp/project/models/raw_data/analytics/sources.yml")
    );
    assert_eq!(config.logs_dir(), PathBuf::from("/tmp/project/logs"));
    assert_eq!(config.tests_dir(), PathBuf::from("/tmp/project/tests"));
}

#[test]
fn test_validate_rejects_empty_root() {
    let config = GenerationConfig {
        project_root: PathBuf::new(),
        source_csv_path: PathBuf::from("a.csv"),
        schema_definitions_path: PathBuf::from("b.csv"),
        mapping_yaml_path: PathBuf::from("c.yaml"),
        prompts_path: PathBuf::from("prompts"),
        emit_column_tests: false,
        run_timeout_secs: 50,
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_missing_inputs_are_warnings() {
    let temp = tempfile::TempDir::new().unwrap();
    let config = GenerationConfig {
        project_root: temp.path().to_path_buf(),
        source_csv_path: temp.path().join("missing.csv"),
        schema_definitions_path: temp.path().join("missing_defs.csv"),
        mapping_yaml_path: temp.path().join("missing.yaml"),
        prompts_path: temp.path().join("prompts"),
        emit_column_tests: false,
        run_timeout_secs: 50,
    };

    let warnings = config.validate().unwrap();
    assert_eq!(warnings.len(), 4);
}

#[test]
fn test_llm_file_overrides() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("llm_config.json");
    std::fs::write(
        &path,
        r#"{"api_url": "https://llm.internal/v1/chat", "model": "local-7b", "max_tokens": 256}"#,
    )
    .unwrap();

    let base = LlmConfig {
        api_url: "https://api.openai.com/v1/chat/completions".to_string(),
        api_key: "sk-test".to_string(),
        model: "gpt-4".to_string(),
        temperature: 0.2,
        top_p: 1.0,
        max_tokens: 4000,
    };

    let merged = base.with_file_overrides(&path).unwrap();
    assert_eq!(merged.api_url, "https://llm.internal/v1/chat");
    assert_eq!(merged.model, "local-7b");
    assert_eq!(merged.max_tokens, 256);
    // Untouched fields keep their env-derived values
    assert_eq!(merged.api_key, "sk-test");
    assert!(merged.has_credential());
}

#[test]
fn test_llm_missing_file_is_noop() {
    let base = LlmConfig {
        api_url: "https://api.openai.com/v1/chat/completions".to_string(),
        api_key: String::new(),
        model: "gpt-4".to_string(),
        temperature: 0.2,
        top_p: 1.0,
        max_tokens: 4000,
    };

    let merged = base
        .clone()
        .with_file_overrides(Path::new("/nonexistent/llm_config.json"))
        .unwrap();
    assert_eq!(merged.model, base.model);
    assert!(!merged.has_credential());
}
