use ingest_fallback::catalog::glue_registrar::{register_archive, CreateOutcome};
use ingest_fallback::catalog::table_definition::{
    ExternalTableDefinition, CSV_SERDE_LIBRARY, EXTERNAL_TABLE_TYPE,
};
use ingest_fallback::core::config::CatalogConfig;
use ingest_fallback::core::errors::CoreError;
use ingest_fallback::storage::fallback_archive::ArchivedObject;

use crate::support::InMemoryCatalog;

fn archived(key: &str) -> ArchivedObject {
    ArchivedObject {
        bucket: "pipe-bucket".to_string(),
        key: key.to_string(),
        bytes: 24,
    }
}

fn catalog_config() -> CatalogConfig {
    CatalogConfig {
        database: "fallback_database".to_string(),
        table: "fallback_table".to_string(),
    }
}

#[test]
fn definition_points_at_archived_object() {
    let object = archived("fallback/fallback_9.csv");
    let definition = ExternalTableDefinition::for_archive("fallback_table", &object);

    assert_eq!(definition.name, "fallback_table");
    assert_eq!(definition.table_type, EXTERNAL_TABLE_TYPE);
    assert_eq!(definition.location, "s3://pipe-bucket/fallback/fallback_9.csv");
    assert_eq!(definition.serde_library, CSV_SERDE_LIBRARY);
    assert_eq!(definition.field_delimiter, ",");

    let columns = definition
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.data_type.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(columns, vec![("col1", "string"), ("col2", "string")]);
}

#[tokio::test]
async fn second_registration_is_idempotent() {
    let catalog = InMemoryCatalog::default();
    let config = catalog_config();

    let first = register_archive(&catalog, &config, &archived("fallback/fallback_1.csv"))
        .await
        .unwrap();
    assert_eq!(first.database_outcome, CreateOutcome::Created);
    assert_eq!(first.table_outcome, CreateOutcome::Created);

    let second = register_archive(&catalog, &config, &archived("fallback/fallback_2.csv"))
        .await
        .unwrap();
    assert_eq!(second.database_outcome, CreateOutcome::AlreadyExists);
    assert_eq!(second.table_outcome, CreateOutcome::AlreadyExists);

    // 기존 테이블은 갱신하지 않으므로 첫 번째 위치가 그대로 남는다.
    let tables = catalog.tables.lock().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].1.location, "s3://pipe-bucket/fallback/fallback_1.csv");
}

#[tokio::test]
async fn other_catalog_failures_propagate() {
    let catalog = InMemoryCatalog {
        fail_tables_with: Some(
            "CreateTable 서비스 오류: code=AccessDeniedException".to_string(),
        ),
        ..InMemoryCatalog::default()
    };

    let error = register_archive(&catalog, &catalog_config(), &archived("fallback/fallback_3.csv"))
        .await
        .unwrap_err();

    assert!(matches!(error, CoreError::Aws(_)));
    assert!(catalog.databases.lock().unwrap().contains("fallback_database"));
}
