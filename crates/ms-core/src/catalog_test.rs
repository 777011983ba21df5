use super::*;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_read_source_catalog_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "source_tables.csv",
        "table_name,description,location,file_format\n\
         customers,Customer master, s3://bucket/raw/customers/ ,CSV\n",
    );

    let rows = read_source_catalog(&path).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.table_name, "customers");
    assert_eq!(row.source_database, "default");
    assert_eq!(row.source_schema, "public");
    // Values are trimmed
    assert_eq!(row.location, "s3://bucket/raw/customers/");
    assert_eq!(row.partition_by, None);
}

#[test]
fn test_read_source_catalog_optional_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "source_tables.csv",
        "table_name,source_database,source_schema,location,file_format,partition_by,cluster_by,refresh_frequency\n\
         orders,raw,sales,s3://b/orders/,PARQUET,order_date,region,daily\n",
    );

    let rows = read_source_catalog(&path).unwrap();
    let row = &rows[0];
    assert_eq!(row.source_database, "raw");
    assert_eq!(row.source_schema, "sales");
    assert_eq!(row.partition_by.as_deref(), Some("order_date"));
    assert_eq!(row.cluster_by.as_deref(), Some("region"));
    assert_eq!(row.refresh_frequency.as_deref(), Some("daily"));
}

#[test]
fn test_read_source_catalog_missing_file() {
    let result = read_source_catalog(std::path::Path::new("/nonexistent/source_tables.csv"));
    assert!(matches!(result, Err(CoreError::CatalogNotFound { .. })));
}

#[test]
fn test_read_source_catalog_empty_table_name() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "source_tables.csv",
        "table_name,description\n  ,whoops\n",
    );

    let result = read_source_catalog(&path);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("C003"), "got: {}", err);
    assert!(err.to_string().contains("row 2"), "got: {}", err);
}

#[test]
fn test_parse_flag_coercion() {
    assert!(parse_flag(Some("true"), false));
    assert!(parse_flag(Some("True"), false));
    assert!(parse_flag(Some("TRUE"), false));
    assert!(!parse_flag(Some("false"), true));
    assert!(!parse_flag(Some("FALSE"), true));
    // Anything else falls back to the documented default
    assert!(parse_flag(Some("yes"), true));
    assert!(!parse_flag(Some("yes"), false));
    assert!(parse_flag(None, true));
    assert!(!parse_flag(None, false));
}

#[test]
fn test_read_schema_definitions_flags() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "schema_definitions.csv",
        "schema_name,table_name,column_name,data_type,description,is_nullable,is_primary_key,is_unique\n\
         raw_data,customers,id,bigint,Primary key,false,true,true\n\
         raw_data,customers,email,varchar,,false,,TRUE\n\
         raw_data,customers,notes,varchar,,,,\n",
    );

    let rows = read_schema_definitions(&path).unwrap();
    assert_eq!(rows.len(), 3);

    assert!(rows[0].is_primary_key);
    assert!(!rows[0].is_nullable);
    assert!(rows[0].is_unique);
    assert_eq!(rows[0].description.as_deref(), Some("Primary key"));

    assert!(!rows[1].is_primary_key);
    assert!(!rows[1].is_nullable);
    assert!(rows[1].is_unique);
    assert_eq!(rows[1].description, None);

    // Empty flags take their defaults
    assert!(rows[2].is_nullable);
    assert!(!rows[2].is_primary_key);
    assert!(!rows[2].is_unique);
}

#[test]
fn test_read_schema_definitions_skips_incomplete_rows() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "schema_definitions.csv",
        "schema_name,table_name,column_name,data_type\n\
         raw_data,customers,id,bigint\n\
         raw_data,,id,bigint\n\
         ,customers,id,bigint\n",
    );

    let rows = read_schema_definitions(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].column_name, "id");
}
