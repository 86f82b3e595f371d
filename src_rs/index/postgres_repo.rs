// 목적:
// - PostgreSQL 기본 적재 경로를 담당한다.
//
// 설명:
// - 호출마다 연결 하나를 열고 트랜잭션 하나로 전체 행을 insert한 뒤 마지막에 한 번 커밋한다.
// - 헤더 행은 건너뛰고, 두 번째 필드가 없으면 col2는 NULL로 바인딩한다.
// - 중간 실패 시 커밋하지 않으므로 앞선 행도 남지 않는다. 재시도는 하지 않는다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/sql.rs
// - src_rs/core/record.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};
use tracing::{debug, info, warn};

use crate::core::config::PostgresConfig;
use crate::core::errors::PrimaryWriteError;
use crate::core::record::{classify_record, RowDisposition, RowSet};
use crate::index::sql::{insert_statement, statement_timeout_statement};

/// insert 대상으로 확정된 한 행이다. row는 입력 기준 1부터 센 위치다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertRow<'a> {
    pub row: usize,
    pub col1: &'a str,
    pub col2: Option<&'a str>,
}

#[async_trait]
pub trait PrimarySink: Send + Sync {
    /// 성공 시 실제 insert한 행 수를 반환한다.
    async fn write_rows(&self, rows: &RowSet) -> Result<u64, PrimaryWriteError>;
}

/// 헤더를 제외한 insert 목록을 만든다. 필드가 없는 레코드는 적재 실패다.
pub fn plan_inserts(rows: &RowSet) -> Result<Vec<InsertRow<'_>>, PrimaryWriteError> {
    let mut planned = Vec::with_capacity(rows.len());

    for (index, record) in rows.iter().enumerate() {
        match classify_record(record) {
            RowDisposition::Header => continue,
            RowDisposition::Empty => return Err(PrimaryWriteError::EmptyRecord { row: index + 1 }),
            RowDisposition::Insert { col1, col2 } => planned.push(InsertRow {
                row: index + 1,
                col1,
                col2,
            }),
        }
    }

    Ok(planned)
}

pub struct PostgresRepository {
    config: PostgresConfig,
}

impl PostgresRepository {
    pub fn new(config: PostgresConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<PgConnection, PrimaryWriteError> {
        if self.config.dsn.trim().is_empty() {
            return Err(PrimaryWriteError::Config(
                "PG_CONN은 비어 있을 수 없습니다".to_string(),
            ));
        }

        let timeout_ms = self.config.connect_timeout_ms.max(1);
        let mut connection = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            PgConnection::connect(&self.config.dsn),
        )
        .await
        .map_err(|_| PrimaryWriteError::ConnectTimeout { timeout_ms })?
        .map_err(|error| PrimaryWriteError::Connect(error.to_string()))?;

        let timeout_statement = statement_timeout_statement(self.config.statement_timeout_ms);
        sqlx::query(&timeout_statement)
            .execute(&mut connection)
            .await
            .map_err(|error| {
                PrimaryWriteError::Connect(format!("statement_timeout 설정 실패: {}", error))
            })?;

        Ok(connection)
    }
}

#[async_trait]
impl PrimarySink for PostgresRepository {
    async fn write_rows(&self, rows: &RowSet) -> Result<u64, PrimaryWriteError> {
        let planned = plan_inserts(rows)?;
        let mut connection = self.connect().await?;
        let sql = insert_statement(&self.config.table);

        let mut transaction = connection
            .begin()
            .await
            .map_err(|error| PrimaryWriteError::Connect(format!("트랜잭션 시작 실패: {}", error)))?;

        let mut inserted = 0u64;
        for insert in &planned {
            sqlx::query(&sql)
                .bind(insert.col1)
                .bind(insert.col2)
                .execute(&mut *transaction)
                .await
                .map_err(|error| PrimaryWriteError::Insert {
                    row: insert.row,
                    message: error.to_string(),
                })?;
            inserted += 1;
        }

        transaction
            .commit()
            .await
            .map_err(|error| PrimaryWriteError::Commit(error.to_string()))?;

        if let Err(error) = connection.close().await {
            warn!(%error, "Postgres 연결 종료 실패");
        }

        debug!(table = %self.config.table, skipped = rows.len() - planned.len(), "헤더 행 제외");
        info!(table = %self.config.table, rows = inserted, "Postgres insert 완료");
        Ok(inserted)
    }
}
