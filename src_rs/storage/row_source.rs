// 목적:
// - 로컬 파일 또는 S3 객체에서 CSV 레코드 집합을 읽는다.
//
// 설명:
// - 두 입력 모드 모두 같은 CSV 규칙(쉼표 구분, 큰따옴표 이스케이프)으로 파싱한다.
// - 첫 행을 헤더로 해석하지 않는다. 헤더 판별은 적재 경로의 책임이다.
// - 빈 줄은 버리지 않고 필드가 없는 레코드로 남긴다. 보관본이 원본 레코드 수를 유지해야 한다.
// - 읽은 결과는 메모리에 전부 적재된 RowSet으로 반환한다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 전략(Strategy) 선택.
//
// 참조:
// - src_rs/storage/aws.rs
// - src_rs/core/fallback_pipeline.rs

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::core::config::{AppConfig, InputMode, ObjectStoreConfig};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::record::RowSet;
use crate::storage::aws::{create_s3_client, map_sdk_error};

#[async_trait]
pub trait RowSource: Send + Sync {
    /// 입력 위치를 사람이 읽을 수 있는 형태로 돌려준다.
    fn describe(&self) -> String;

    async fn read_rows(&self) -> CoreResult<RowSet>;
}

/// CSV 바이트열을 레코드 집합으로 파싱한다.
pub fn parse_csv(input: &[u8]) -> CoreResult<RowSet> {
    let mut rows = RowSet::new();

    for (index, line) in split_records(input).into_iter().enumerate() {
        if line.is_empty() {
            rows.push(Vec::new());
            continue;
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(line);
        for result in csv_reader.records() {
            let record = result.map_err(|error| {
                CoreError::Csv(format!("{}번째 레코드 파싱 실패: {}", index + 1, error))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
    }

    Ok(rows)
}

/// 따옴표 밖의 줄 끝(`\r\n`, `\n`, `\r`)에서 레코드 단위로 자른다.
/// 빈 줄은 빈 조각으로 남고, 입력 끝의 종결자 하나는 레코드를 만들지 않는다.
fn split_records(input: &[u8]) -> Vec<&[u8]> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut index = 0;
    let mut in_quotes = false;
    let mut field_start = true;

    while index < input.len() {
        let byte = input[index];
        index += 1;

        if in_quotes {
            if byte == b'"' {
                if input.get(index) == Some(&b'"') {
                    index += 1;
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match byte {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b',' => field_start = true,
            b'\n' | b'\r' => {
                records.push(&input[start..index - 1]);
                if byte == b'\r' && input.get(index) == Some(&b'\n') {
                    index += 1;
                }
                start = index;
                field_start = true;
            }
            _ => field_start = false,
        }
    }

    if start < input.len() {
        records.push(&input[start..]);
    }
    records
}

pub struct LocalCsvSource {
    path: PathBuf,
}

impl LocalCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for LocalCsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_rows(&self) -> CoreResult<RowSet> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|error| {
            CoreError::Io(format!("{} 읽기 실패: {}", self.path.display(), error))
        })?;

        let rows = parse_csv(bytes.as_slice())?;
        info!(source = %self.describe(), rows = rows.len(), "로컬 CSV 읽기 완료");
        Ok(rows)
    }
}

pub struct S3CsvSource {
    config: ObjectStoreConfig,
}

impl S3CsvSource {
    pub fn new(config: ObjectStoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RowSource for S3CsvSource {
    fn describe(&self) -> String {
        format!("s3://{}/{}", self.config.bucket, self.config.input_key)
    }

    async fn read_rows(&self) -> CoreResult<RowSet> {
        let client = create_s3_client(&self.config).await?;

        let output = client
            .get_object()
            .bucket(&self.config.bucket)
            .key(&self.config.input_key)
            .send()
            .await
            .map_err(|error| map_sdk_error("GetObject", error))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|error| CoreError::Aws(format!("GetObject 본문 읽기 실패: {}", error)))?
            .into_bytes();

        let content = std::str::from_utf8(&body).map_err(|error| {
            CoreError::Io(format!("{} UTF-8 디코딩 실패: {}", self.describe(), error))
        })?;

        let rows = parse_csv(content.as_bytes())?;
        info!(source = %self.describe(), rows = rows.len(), "S3 CSV 읽기 완료");
        Ok(rows)
    }
}

/// 설정된 입력 모드에 맞는 소스를 만든다.
pub fn source_for(config: &AppConfig) -> Box<dyn RowSource> {
    match config.input_mode {
        InputMode::Local => Box::new(LocalCsvSource::new(config.local_input_path.clone())),
        InputMode::S3 => Box::new(S3CsvSource::new(config.object_store.clone())),
    }
}
