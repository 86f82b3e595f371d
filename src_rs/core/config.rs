// 목적:
// - 실행 설정을 한 번 구성해 각 컴포넌트에 명시적으로 전달한다.
//
// 설명:
// - 환경 변수(또는 주입된 조회 함수)에서 입력 모드, S3, Postgres, Glue 설정을 읽는다.
// - 전역 상태 없이 AppConfig 값 하나로 실행 전체를 구동한다.
// - PG_CONN 검증은 기본 적재 시점으로 미룬다. 빈 값은 적재 실패로 처리되어 폴백으로 이어진다.
//
// 디자인 패턴:
// - 설정 객체(Configuration Object) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/fallback_pipeline.rs
// - src_rs/index/sql.rs

use std::path::PathBuf;
use std::str::FromStr;

use crate::core::errors::{CoreError, CoreResult};
use crate::index::sql::validate_identifier;

pub const DEFAULT_LOCAL_INPUT_PATH: &str = "app/sample/data.csv";
pub const DEFAULT_S3_KEY: &str = "sample-data.csv";
pub const DEFAULT_FALLBACK_PREFIX: &str = "fallback";
pub const DEFAULT_PG_TABLE: &str = "mytable";
pub const DEFAULT_PG_CONNECT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PG_STATEMENT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_GLUE_DATABASE: &str = "fallback_database";
pub const DEFAULT_GLUE_TABLE: &str = "fallback_table";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Local,
    S3,
}

impl FromStr for InputMode {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(InputMode::Local),
            "s3" | "object-store" => Ok(InputMode::S3),
            other => Err(CoreError::InvalidConfig(format!(
                "INPUT_MODE는 local 또는 s3여야 합니다: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    pub bucket: String,
    pub input_key: String,
    pub fallback_prefix: String,
    pub region: String,
    pub endpoint_url: Option<String>,
}

#[derive(Clone)]
pub struct PostgresConfig {
    pub dsn: String,
    pub table: String,
    pub connect_timeout_ms: u64,
    pub statement_timeout_ms: u64,
}

// dsn에는 비밀번호가 들어 있으므로 Debug 출력에서 가린다.
impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("dsn", &"***")
            .field("table", &self.table)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("statement_timeout_ms", &self.statement_timeout_ms)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub database: String,
    pub table: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_mode: InputMode,
    pub local_input_path: PathBuf,
    pub object_store: ObjectStoreConfig,
    pub postgres: PostgresConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽는다.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 조회 함수로부터 설정을 구성한다. 빈 문자열은 미설정으로 취급한다.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let read_or = |key: &str, default: &str| read(key).unwrap_or_else(|| default.to_string());

        let input_mode = match read("INPUT_MODE") {
            Some(value) => value.parse::<InputMode>()?,
            None => InputMode::Local,
        };

        let bucket = read("S3_BUCKET").ok_or_else(|| {
            CoreError::InvalidConfig(
                "S3_BUCKET은 비어 있을 수 없습니다 (폴백 보관 위치로도 사용됩니다)".to_string(),
            )
        })?;

        let object_store = ObjectStoreConfig {
            bucket,
            input_key: read_or("S3_KEY", DEFAULT_S3_KEY),
            fallback_prefix: read_or("FALLBACK_PREFIX", DEFAULT_FALLBACK_PREFIX),
            region: read_or("AWS_REGION", DEFAULT_REGION),
            endpoint_url: read("AWS_ENDPOINT_URL"),
        };

        let postgres = PostgresConfig {
            dsn: read("PG_CONN").unwrap_or_default(),
            table: read_or("PG_TABLE", DEFAULT_PG_TABLE),
            connect_timeout_ms: parse_millis(
                read("PG_CONNECT_TIMEOUT_MS"),
                "PG_CONNECT_TIMEOUT_MS",
                DEFAULT_PG_CONNECT_TIMEOUT_MS,
            )?,
            statement_timeout_ms: parse_millis(
                read("PG_STATEMENT_TIMEOUT_MS"),
                "PG_STATEMENT_TIMEOUT_MS",
                DEFAULT_PG_STATEMENT_TIMEOUT_MS,
            )?,
        };

        let catalog = CatalogConfig {
            database: read_or("GLUE_DATABASE", DEFAULT_GLUE_DATABASE),
            table: read_or("GLUE_TABLE", DEFAULT_GLUE_TABLE),
        };

        validate_identifier(&postgres.table, "PG_TABLE")?;
        validate_identifier(&catalog.database, "GLUE_DATABASE")?;
        validate_identifier(&catalog.table, "GLUE_TABLE")?;

        Ok(Self {
            input_mode,
            local_input_path: PathBuf::from(read_or("LOCAL_INPUT_PATH", DEFAULT_LOCAL_INPUT_PATH)),
            object_store,
            postgres,
            catalog,
        })
    }
}

fn parse_millis(value: Option<String>, field_name: &str, default: u64) -> CoreResult<u64> {
    let Some(raw) = value else {
        return Ok(default);
    };

    let parsed = raw.parse::<u64>().map_err(|error| {
        CoreError::InvalidConfig(format!("{}는 정수여야 합니다: {} ({})", field_name, raw, error))
    })?;

    if parsed == 0 {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 1 이상이어야 합니다",
            field_name
        )));
    }

    Ok(parsed)
}
