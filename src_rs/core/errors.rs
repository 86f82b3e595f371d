// 목적:
// - Rust 코어 계층의 표준 오류 타입과 종료 코드 규칙을 정의한다.
//
// 설명:
// - 설정/입출력/CSV/AWS 오류를 명시적으로 구분한다.
// - 기본 적재(Postgres) 실패는 별도 타입으로 분리해 오케스트레이터가 값으로 분기한다.
// - 실행 단계(Phase)와 원인 오류를 묶어 프로세스 종료 코드로 변환한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/fallback_pipeline.rs
// - src_rs/index/postgres_repo.rs

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_MISSING_CREDENTIALS: u8 = 2;
pub const EXIT_AWS_CLIENT_ERROR: u8 = 3;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("파일 입출력에 실패했습니다: {0}")]
    Io(String),
    #[error("CSV 처리에 실패했습니다: {0}")]
    Csv(String),
    #[error("AWS 자격 증명을 찾을 수 없습니다: {0}")]
    MissingCredentials(String),
    #[error("AWS 요청에 실패했습니다: {0}")]
    Aws(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// 기본 적재 경로의 실패 유형이다. 어떤 변형이든 폴백 경로로 전환된다.
#[derive(Debug, Error)]
pub enum PrimaryWriteError {
    #[error("Postgres 설정이 유효하지 않습니다: {0}")]
    Config(String),
    #[error("Postgres 연결 실패: {0}")]
    Connect(String),
    #[error("Postgres 연결 시간 초과: timeout_ms={timeout_ms}")]
    ConnectTimeout { timeout_ms: u64 },
    #[error("{row}번째 행에 값이 없어 적재할 수 없습니다")]
    EmptyRecord { row: usize },
    #[error("{row}번째 행 insert 실패: {message}")]
    Insert { row: usize, message: String },
    #[error("트랜잭션 커밋 실패: {0}")]
    Commit(String),
}

/// 실행이 중단될 수 있는 단계다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Reading,
    Archiving,
    Registering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Reading => "reading",
            Phase::Archiving => "archiving",
            Phase::Registering => "registering",
        };
        f.write_str(name)
    }
}

/// 오케스트레이터 밖으로 전파되는 치명 오류다.
#[derive(Debug, Error)]
#[error("{phase} 단계에서 실행이 중단되었습니다: {source}")]
pub struct RunError {
    pub phase: Phase,
    #[source]
    pub source: CoreError,
}

impl RunError {
    pub fn new(phase: Phase, source: CoreError) -> Self {
        Self { phase, source }
    }

    /// 읽기 단계의 자격 증명/AWS 오류만 별도 종료 코드를 가진다.
    pub fn exit_code(&self) -> u8 {
        match (self.phase, &self.source) {
            (Phase::Reading, CoreError::MissingCredentials(_)) => EXIT_MISSING_CREDENTIALS,
            (Phase::Reading, CoreError::Aws(_)) => EXIT_AWS_CLIENT_ERROR,
            _ => EXIT_FAILURE,
        }
    }
}
