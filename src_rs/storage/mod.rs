// 목적:
// - 객체 저장소(S3) 계층 모듈을 선언한다.
//
// 설명:
// - 입력 읽기와 폴백 보관을 분리하고, 공통 SDK 설정/오류 변환은 aws 모듈에 둔다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/storage/aws.rs
// - src_rs/storage/row_source.rs
// - src_rs/storage/fallback_archive.rs

pub mod aws;
pub mod fallback_archive;
pub mod row_source;
