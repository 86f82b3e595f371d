// 목적:
// - 기본 적재 실패 시 원본 레코드 집합을 CSV 객체로 S3에 보관한다.
//
// 설명:
// - 헤더를 포함한 원본 RowSet 전체를 필드 순서/값 그대로 다시 CSV로 인코딩한다.
// - 객체 키는 {prefix}/fallback_{unix초}.csv 형식이며 실행마다 다른 이름을 갖는다.
// - 업로드 실패는 여기서 잡지 않고 호출자에게 전파한다.
//
// 디자인 패턴:
// - 보상 작업(Compensating Action).
//
// 참조:
// - src_rs/storage/aws.rs
// - src_rs/catalog/glue_registrar.rs

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::core::config::ObjectStoreConfig;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::record::RowSet;
use crate::storage::aws::{create_s3_client, map_sdk_error};

pub const FALLBACK_CONTENT_TYPE: &str = "text/csv";

/// 보관이 끝난 객체의 위치다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivedObject {
    pub bucket: String,
    pub key: String,
    pub bytes: usize,
}

impl ArchivedObject {
    pub fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[async_trait]
pub trait FallbackArchive: Send + Sync {
    async fn archive(&self, rows: &RowSet) -> CoreResult<ArchivedObject>;
}

pub fn fallback_key(prefix: &str, at: DateTime<Utc>) -> String {
    let file_name = format!("fallback_{}.csv", at.timestamp());
    let prefix = prefix.trim_end_matches('/');

    if prefix.is_empty() {
        file_name
    } else {
        format!("{}/{}", prefix, file_name)
    }
}

/// 레코드 집합을 CSV 바이트로 인코딩한다. 필요한 경우에만 따옴표를 붙이고 행은 CRLF로 끝낸다.
pub fn encode_csv(rows: &RowSet) -> CoreResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    for (index, record) in rows.iter().enumerate() {
        writer.write_record(record).map_err(|error| {
            CoreError::Csv(format!("{}번째 레코드 인코딩 실패: {}", index + 1, error))
        })?;
    }

    writer
        .into_inner()
        .map_err(|error| CoreError::Csv(format!("CSV 버퍼 flush 실패: {}", error)))
}

pub struct S3FallbackArchive {
    config: ObjectStoreConfig,
}

impl S3FallbackArchive {
    pub fn new(config: ObjectStoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl FallbackArchive for S3FallbackArchive {
    async fn archive(&self, rows: &RowSet) -> CoreResult<ArchivedObject> {
        let key = fallback_key(&self.config.fallback_prefix, Utc::now());
        let body = encode_csv(rows)?;
        let bytes = body.len();

        let client = create_s3_client(&self.config).await?;
        client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .content_type(FALLBACK_CONTENT_TYPE)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|error| map_sdk_error("PutObject", error))?;

        let archived = ArchivedObject {
            bucket: self.config.bucket.clone(),
            key,
            bytes,
        };
        info!(location = %archived.location(), rows = rows.len(), bytes, "폴백 파일 업로드 완료");
        Ok(archived)
    }
}
