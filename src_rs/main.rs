// 목적:
// - CSV 적재/폴백 실행 바이너리의 진입점을 제공한다.
//
// 설명:
// - 로깅 초기화 -> 환경 변수 설정 로드 -> 파이프라인 1회 실행 -> 종료 코드 반환 순서로 동작한다.
// - 성공 시 실행 결과를 JSON 한 줄로 표준 출력에 쓴다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/fallback_pipeline.rs
// - src_rs/core/errors.rs

use std::process::ExitCode;

use tokio::runtime::{Builder, Runtime};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use ingest_fallback::core::config::AppConfig;
use ingest_fallback::core::errors::{EXIT_FAILURE, EXIT_OK};
use ingest_fallback::core::fallback_pipeline::run;

fn main() -> ExitCode {
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!(%error, "설정 로드 실패");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    info!(
        input_mode = ?config.input_mode,
        bucket = %config.object_store.bucket,
        table = %config.postgres.table,
        "설정 로드 완료"
    );

    let runtime = match create_runtime() {
        Ok(runtime) => runtime,
        Err(message) => {
            error!(error = %message, "런타임 생성 실패");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match runtime.block_on(run(&config)) {
        Ok(outcome) => {
            match serde_json::to_string(&outcome) {
                Ok(line) => println!("{}", line),
                Err(error) => warn!(%error, "실행 결과 직렬화 실패"),
            }
            ExitCode::from(EXIT_OK)
        }
        Err(run_error) => ExitCode::from(run_error.exit_code()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// 작업은 한 번에 하나씩 순차 실행되므로 단일 스레드 런타임으로 충분하다.
fn create_runtime() -> Result<Runtime, String> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| format!("Tokio 런타임 생성 실패: {}", error))
}
