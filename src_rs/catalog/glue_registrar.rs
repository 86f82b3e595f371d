// 목적:
// - 폴백 객체를 Glue 카탈로그의 외부 테이블로 멱등 등록한다.
//
// 설명:
// - 데이터베이스 생성 -> 테이블 생성 순서로 처리한다.
// - "이미 존재함" 응답은 예외가 아니라 CreateOutcome::AlreadyExists 결과값으로 다룬다.
// - 그 밖의 오류는 그대로 전파한다. 기존 테이블의 스키마 호환성은 검사하지 않는다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 멱등 생성(Idempotent Create).
//
// 참조:
// - src_rs/catalog/table_definition.rs
// - src_rs/storage/aws.rs

use async_trait::async_trait;
use aws_sdk_glue::types::{Column, DatabaseInput, SerDeInfo, StorageDescriptor, TableInput};
use aws_sdk_glue::Client as GlueClient;
use serde::Serialize;
use tracing::info;

use crate::catalog::table_definition::ExternalTableDefinition;
use crate::core::config::{CatalogConfig, ObjectStoreConfig};
use crate::core::errors::{CoreError, CoreResult};
use crate::storage::aws::{load_sdk_config, map_sdk_error};
use crate::storage::fallback_archive::ArchivedObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRegistration {
    pub database: String,
    pub table: String,
    pub location: String,
    pub database_outcome: CreateOutcome,
    pub table_outcome: CreateOutcome,
}

/// 카탈로그 서비스의 생성 API 경계다.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn create_database(&self, name: &str) -> CoreResult<CreateOutcome>;

    async fn create_table(
        &self,
        database: &str,
        definition: &ExternalTableDefinition,
    ) -> CoreResult<CreateOutcome>;
}

/// 오케스트레이터가 호출하는 등록기 경계다.
#[async_trait]
pub trait CatalogRegistrar: Send + Sync {
    async fn register(&self, archived: &ArchivedObject) -> CoreResult<CatalogRegistration>;
}

/// 데이터베이스와 테이블을 차례로 멱등 생성한다.
pub async fn register_archive(
    api: &dyn CatalogApi,
    catalog: &CatalogConfig,
    archived: &ArchivedObject,
) -> CoreResult<CatalogRegistration> {
    let database_outcome = api.create_database(&catalog.database).await?;
    info!(database = %catalog.database, outcome = ?database_outcome, "카탈로그 데이터베이스 확인");

    let definition = ExternalTableDefinition::for_archive(&catalog.table, archived);
    let table_outcome = api.create_table(&catalog.database, &definition).await?;
    info!(
        database = %catalog.database,
        table = %catalog.table,
        location = %definition.location,
        outcome = ?table_outcome,
        "카탈로그 테이블 확인"
    );

    Ok(CatalogRegistration {
        database: catalog.database.clone(),
        table: catalog.table.clone(),
        location: definition.location,
        database_outcome,
        table_outcome,
    })
}

pub struct GlueCatalog {
    client: GlueClient,
}

impl GlueCatalog {
    pub fn new(client: GlueClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogApi for GlueCatalog {
    async fn create_database(&self, name: &str) -> CoreResult<CreateOutcome> {
        let database_input = DatabaseInput::builder()
            .name(name)
            .build()
            .map_err(|error| CoreError::InvalidInput(format!("DatabaseInput 생성 실패: {}", error)))?;

        match self
            .client
            .create_database()
            .database_input(database_input)
            .send()
            .await
        {
            Ok(_) => Ok(CreateOutcome::Created),
            Err(error)
                if error
                    .as_service_error()
                    .is_some_and(|service_error| service_error.is_already_exists_exception()) =>
            {
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(error) => Err(map_sdk_error("CreateDatabase", error)),
        }
    }

    async fn create_table(
        &self,
        database: &str,
        definition: &ExternalTableDefinition,
    ) -> CoreResult<CreateOutcome> {
        let table_input = to_table_input(definition)?;

        match self
            .client
            .create_table()
            .database_name(database)
            .table_input(table_input)
            .send()
            .await
        {
            Ok(_) => Ok(CreateOutcome::Created),
            Err(error)
                if error
                    .as_service_error()
                    .is_some_and(|service_error| service_error.is_already_exists_exception()) =>
            {
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(error) => Err(map_sdk_error("CreateTable", error)),
        }
    }
}

fn to_table_input(definition: &ExternalTableDefinition) -> CoreResult<TableInput> {
    let columns = definition
        .columns
        .iter()
        .map(|column| {
            Column::builder()
                .name(&column.name)
                .r#type(&column.data_type)
                .build()
                .map_err(|error| CoreError::InvalidInput(format!("Column 생성 실패: {}", error)))
        })
        .collect::<CoreResult<Vec<_>>>()?;

    let serde_info = SerDeInfo::builder()
        .serialization_library(&definition.serde_library)
        .parameters("field.delim", &definition.field_delimiter)
        .build();

    let storage_descriptor = StorageDescriptor::builder()
        .set_columns(Some(columns))
        .location(&definition.location)
        .input_format(&definition.input_format)
        .output_format(&definition.output_format)
        .serde_info(serde_info)
        .build();

    TableInput::builder()
        .name(&definition.name)
        .table_type(&definition.table_type)
        .parameters("classification", &definition.classification)
        .storage_descriptor(storage_descriptor)
        .build()
        .map_err(|error| CoreError::InvalidInput(format!("TableInput 생성 실패: {}", error)))
}

/// 호출마다 Glue 클라이언트를 만들어 등록을 수행한다.
pub struct GlueCatalogRegistrar {
    object_store: ObjectStoreConfig,
    catalog: CatalogConfig,
}

impl GlueCatalogRegistrar {
    pub fn new(object_store: ObjectStoreConfig, catalog: CatalogConfig) -> Self {
        Self {
            object_store,
            catalog,
        }
    }
}

#[async_trait]
impl CatalogRegistrar for GlueCatalogRegistrar {
    async fn register(&self, archived: &ArchivedObject) -> CoreResult<CatalogRegistration> {
        let sdk_config = load_sdk_config(&self.object_store).await?;
        let glue = GlueCatalog::new(GlueClient::new(&sdk_config));
        register_archive(&glue, &self.catalog, archived).await
    }
}
