// 목적:
// - CSV 적재/폴백 런타임 라이브러리의 진입점을 제공한다.
//
// 설명:
// - CSV 행 집합을 Postgres에 적재하고, 실패하면 S3에 보관한 뒤 Glue 카탈로그에 등록한다.
// - 바이너리(src_rs/main.rs)는 이 라이브러리의 파이프라인을 한 번 실행하고 종료한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(core/index/storage/catalog).
//
// 참조:
// - src_rs/core/fallback_pipeline.rs
// - src_rs/main.rs

pub mod catalog;
pub mod core;
pub mod index;
pub mod storage;
