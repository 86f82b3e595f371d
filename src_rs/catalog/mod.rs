// 목적:
// - 메타데이터 카탈로그(Glue) 계층 모듈을 선언한다.
//
// 설명:
// - 외부 테이블 정의 생성과 멱등 등록 로직을 분리한다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/catalog/table_definition.rs
// - src_rs/catalog/glue_registrar.rs

pub mod glue_registrar;
pub mod table_definition;
