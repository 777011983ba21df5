use super::*;
use ms_core::TestDefinition;
use tempfile::TempDir;

fn catalog_row(table: &str) -> SourceTableRow {
    SourceTableRow {
        table_name: table.to_string(),
        source_database: "raw_data".to_string(),
        source_schema: "analytics".to_string(),
        description: format!("{table} raw feed"),
        location: format!("s3://bucket/raw/{table}/"),
        file_format: "CSV".to_string(),
        partition_by: None,
        cluster_by: None,
        refresh_frequency: None,
    }
}

fn schema_def(table: &str, column: &str, pk: bool, nullable: bool) -> SchemaDefRow {
    SchemaDefRow {
        schema_name: "analytics".to_string(),
        table_name: table.to_string(),
        column_name: column.to_string(),
        data_type: "bigint".to_string(),
        description: None,
        expression: None,
        is_nullable: nullable,
        is_primary_key: pk,
        is_unique: false,
        default_value: None,
    }
}

fn test_config(root: &std::path::Path) -> GenerationConfig {
    GenerationConfig {
        project_root: root.to_path_buf(),
        source_csv_path: root.join("source_tables.csv"),
        schema_definitions_path: root.join("schema_definitions.csv"),
        mapping_yaml_path: root.join("table_mappings.yaml"),
        prompts_path: root.join("prompts"),
        emit_column_tests: false,
        run_timeout_secs: 50,
    }
}

#[tokio::test]
async fn test_merge_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());
    let rows = vec![catalog_row("customers")];

    merge_sources(&rows, None, &[], &config).await.unwrap();
    let first = std::fs::read_to_string(config.sources_path("raw_data", "analytics")).unwrap();

    merge_sources(&rows, None, &[], &config).await.unwrap();
    let second = std::fs::read_to_string(config.sources_path("raw_data", "analytics")).unwrap();

    assert_eq!(first, second);

    let doc = SourceDocument::load_or_default(&config.sources_path("raw_data", "analytics"))
        .unwrap();
    assert_eq!(doc.sources.len(), 1);
    assert_eq!(doc.sources[0].tables.len(), 1);
}

#[tokio::test]
async fn test_merge_preserves_siblings() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path());

    merge_sources(&[catalog_row("customers")], None, &[], &config)
        .await
        .unwrap();
    merge_sources(&[catalog_row("orders")], None, &[], &config)
        .await
        .unwrap();

    let doc = SourceDocument::load_or_default(&config.sources_path("raw_data", "analytics"))
        .unwrap();
    let tables = &doc.sources[0].tables;
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].name, "customers");
    assert_eq!(tables[0].description, "customers raw feed");
    assert_eq!(tables[1].name, "orders");
}

#[test]
fn test_mapping_columns_take_precedence() {
    let mapping: MappingDocument = serde_yaml::from_str(
        r#"
staging_models:
  - name: stg_customers
    source_table: customers
    columns:
      - name: customer_id
        data_type: bigint
        description: "From the mapping"
"#,
    )
    .unwrap();

    let row = catalog_row("customers");
    let defs = vec![schema_def("customers", "id", true, false)];

    let columns = resolve_columns(&row, Some(&mapping), &defs).unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].name, "customer_id");
    assert_eq!(columns[0].description.as_deref(), Some("From the mapping"));
    // Mapping-sourced columns never pick up catalog-derived tests
    assert!(columns[0].tests.is_empty());
}

#[test]
fn test_schema_def_fallback_derives_tests() {
    let row = catalog_row("customers");
    let defs = vec![
        schema_def("customers", "id", true, false),
        schema_def("customers", "email", false, false),
        schema_def("customers", "notes", false, true),
    ];

    let columns = resolve_columns(&row, None, &defs).unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(
        columns[0].tests,
        vec![TestDefinition::unique(), TestDefinition::not_null()]
    );
    assert_eq!(columns[1].tests, vec![TestDefinition::not_null()]);
    assert!(columns[2].tests.is_empty());
}

#[test]
fn test_schema_def_fallback_filters_by_schema_and_table() {
    let row = catalog_row("customers");
    let mut other_schema = schema_def("customers", "id", true, false);
    other_schema.schema_name = "staging".to_string();
    let defs = vec![other_schema, schema_def("orders", "id", true, false)];

    assert!(resolve_columns(&row, None, &defs).is_none());
}

#[test]
fn test_descriptor_optional_externals() {
    let mut row = catalog_row("events");
    row.partition_by = Some("event_date".to_string());
    row.cluster_by = Some("tenant_id".to_string());
    row.refresh_frequency = Some("hourly".to_string());

    let descriptor = build_table_descriptor(&row, None);
    assert_eq!(
        descriptor.external.partitions,
        Some(vec![ms_core::PartitionSpec {
            name: "event_date".to_string(),
            data_type: "date".to_string(),
        }])
    );
    assert_eq!(
        descriptor.external.cluster_by,
        Some(vec!["tenant_id".to_string()])
    );
    assert_eq!(descriptor.external.refresh_frequency.as_deref(), Some("hourly"));
    assert!(descriptor.columns.is_none());
}
