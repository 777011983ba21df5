use super::*;
use tempfile::TempDir;

fn descriptor(name: &str) -> SourceTableDescriptor {
    SourceTableDescriptor {
        name: name.to_string(),
        description: format!("{name} table"),
        external: ExternalSpec {
            location: format!("s3://bucket/raw/{name}/"),
            file_format: "CSV".to_string(),
            partitions: None,
            cluster_by: None,
            refresh_frequency: None,
        },
        columns: None,
    }
}

#[test]
fn test_load_or_default_missing_file() {
    let doc = SourceDocument::load_or_default(std::path::Path::new("/nonexistent/sources.yml"))
        .unwrap();
    assert_eq!(doc.version, 2);
    assert!(doc.sources.is_empty());
}

#[test]
fn test_entry_mut_creates_once() {
    let mut doc = SourceDocument::default();
    doc.entry_mut("analytics").tables.push(descriptor("a"));
    doc.entry_mut("analytics").tables.push(descriptor("b"));

    assert_eq!(doc.sources.len(), 1);
    assert_eq!(doc.sources[0].tables.len(), 2);
    assert_eq!(
        doc.sources[0].description,
        "External tables in analytics schema"
    );
}

#[test]
fn test_upsert_table_replaces_in_place() {
    let mut doc = SourceDocument::default();
    let entry = doc.entry_mut("analytics");
    entry.upsert_table(descriptor("customers"));
    entry.upsert_table(descriptor("orders"));

    let mut updated = descriptor("customers");
    updated.description = "refreshed".to_string();
    entry.upsert_table(updated);

    assert_eq!(entry.tables.len(), 2);
    // The sibling is untouched
    assert_eq!(entry.tables[0].name, "orders");
    // The re-merged table carries the new descriptor
    assert_eq!(entry.tables[1].name, "customers");
    assert_eq!(entry.tables[1].description, "refreshed");
}

#[test]
fn test_yaml_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("models/raw/analytics/sources.yml");

    let mut doc = SourceDocument::default();
    let entry = doc.entry_mut("analytics");
    let mut table = descriptor("customers");
    table.external.partitions = Some(vec![PartitionSpec {
        name: "load_date".to_string(),
        data_type: "date".to_string(),
    }]);
    table.external.cluster_by = Some(vec!["region".to_string()]);
    table.columns = Some(vec![ColumnDescriptor {
        name: "id".to_string(),
        data_type: "bigint".to_string(),
        tests: vec![TestDefinition::unique(), TestDefinition::not_null()],
        ..Default::default()
    }]);
    entry.upsert_table(table);

    doc.write(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("---\n"), "missing document start");
    assert!(content.contains("version: 2"));
    // Optional externals absent from the descriptor stay out of the file
    assert!(!content.contains("refresh_frequency"));

    let reloaded = SourceDocument::load_or_default(&path).unwrap();
    assert_eq!(reloaded.sources.len(), 1);
    let table = &reloaded.sources[0].tables[0];
    assert_eq!(
        table.external.partitions.as_ref().unwrap()[0],
        PartitionSpec {
            name: "load_date".to_string(),
            data_type: "date".to_string(),
        }
    );
    let columns = table.columns.as_ref().unwrap();
    assert_eq!(columns[0].tests.len(), 2);
}

#[test]
fn test_load_rejects_malformed_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sources.yml");
    std::fs::write(&path, "version: [not, a, number\n").unwrap();

    let err = SourceDocument::load_or_default(&path).unwrap_err();
    assert!(err.to_string().contains("S001"), "got: {}", err);
}
