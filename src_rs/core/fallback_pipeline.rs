// 목적:
// - 적재/폴백 제어 흐름을 실행한다.
//
// 설명:
// - 읽기 -> Postgres 적재 시도 -> (실패 시) S3 보관 -> Glue 등록 순서로 처리한다.
// - 기본 적재 실패만 폴백으로 전환하며, 그 외 모든 오류는 단계 정보와 함께 종료로 이어진다.
// - 폴백 경로에는 헤더를 포함한 원본 RowSet 전체를 넘긴다.
// - 각 단계는 이전 단계가 끝난 뒤에만 시작한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 상태 기계(State Machine).
//
// 참조:
// - src_rs/storage/row_source.rs
// - src_rs/index/postgres_repo.rs
// - src_rs/storage/fallback_archive.rs
// - src_rs/catalog/glue_registrar.rs

use serde::Serialize;
use tracing::{error, info};

use crate::catalog::glue_registrar::{CatalogRegistrar, CatalogRegistration, GlueCatalogRegistrar};
use crate::core::config::AppConfig;
use crate::core::errors::{CoreError, Phase, RunError};
use crate::index::postgres_repo::{PostgresRepository, PrimarySink};
use crate::storage::fallback_archive::{FallbackArchive, S3FallbackArchive};
use crate::storage::row_source::{source_for, RowSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Reading,
    WritingPrimary,
    Done,
    Archiving,
    Registering,
    DoneFallback,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingPath {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub path: LandingPath,
    pub final_state: PipelineState,
    pub rows_read: usize,
    pub rows_inserted: u64,
    pub primary_error: Option<String>,
    pub archived_location: Option<String>,
    pub catalog: Option<CatalogRegistration>,
}

pub struct PipelineComponents<'a> {
    pub source: &'a dyn RowSource,
    pub primary: &'a dyn PrimarySink,
    pub archive: &'a dyn FallbackArchive,
    pub catalog: &'a dyn CatalogRegistrar,
}

/// 설정으로 실제 컴포넌트를 구성해 한 번 실행한다.
pub async fn run(config: &AppConfig) -> Result<RunOutcome, RunError> {
    let source = source_for(config);
    let primary = PostgresRepository::new(config.postgres.clone());
    let archive = S3FallbackArchive::new(config.object_store.clone());
    let catalog = GlueCatalogRegistrar::new(config.object_store.clone(), config.catalog.clone());

    execute_pipeline(PipelineComponents {
        source: source.as_ref(),
        primary: &primary,
        archive: &archive,
        catalog: &catalog,
    })
    .await
}

/// 주어진 컴포넌트로 적재/폴백 흐름을 실행한다.
pub async fn execute_pipeline(
    components: PipelineComponents<'_>,
) -> Result<RunOutcome, RunError> {
    enter(PipelineState::Reading);
    let rows = components
        .source
        .read_rows()
        .await
        .map_err(|source| fatal(Phase::Reading, source))?;
    info!(source = %components.source.describe(), rows = rows.len(), "입력 읽기 완료");

    enter(PipelineState::WritingPrimary);
    let primary_error = match components.primary.write_rows(&rows).await {
        Ok(inserted) => {
            info!(rows = inserted, "Postgres 적재 성공");
            enter(PipelineState::Done);
            return Ok(RunOutcome {
                path: LandingPath::Primary,
                final_state: PipelineState::Done,
                rows_read: rows.len(),
                rows_inserted: inserted,
                primary_error: None,
                archived_location: None,
                catalog: None,
            });
        }
        Err(primary_error) => {
            error!(error = %primary_error, "데이터 insert 실패, 폴백 경로로 전환");
            primary_error.to_string()
        }
    };

    enter(PipelineState::Archiving);
    let archived = components
        .archive
        .archive(&rows)
        .await
        .map_err(|source| fatal(Phase::Archiving, source))?;

    enter(PipelineState::Registering);
    let registration = components
        .catalog
        .register(&archived)
        .await
        .map_err(|source| fatal(Phase::Registering, source))?;

    enter(PipelineState::DoneFallback);
    Ok(RunOutcome {
        path: LandingPath::Fallback,
        final_state: PipelineState::DoneFallback,
        rows_read: rows.len(),
        rows_inserted: 0,
        primary_error: Some(primary_error),
        archived_location: Some(archived.location()),
        catalog: Some(registration),
    })
}

fn enter(state: PipelineState) {
    info!(state = ?state, "파이프라인 상태 전이");
}

fn fatal(phase: Phase, source: CoreError) -> RunError {
    enter(PipelineState::Fatal);
    let run_error = RunError::new(phase, source);
    error!(phase = %phase, exit_code = run_error.exit_code(), error = %run_error.source, "실행 실패");
    run_error
}
