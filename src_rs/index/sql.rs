// 목적:
// - SQL 관련 공통 유틸리티를 제공한다.
//
// 설명:
// - 동적 테이블명/카탈로그명 검증과 적재용 SQL 문 생성을 담당한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/index/postgres_repo.rs
// - src_rs/core/config.rs

use crate::core::errors::{CoreError, CoreResult};

/// 식별자의 허용 문자를 검증한다.
pub fn validate_identifier(value: &str, field_name: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 비어 있을 수 없습니다",
            field_name
        )));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(CoreError::InvalidConfig(format!(
            "{}에는 영문/숫자/밑줄만 사용할 수 있습니다: {}",
            field_name, value
        )));
    }

    Ok(())
}

/// 두 컬럼(col1, col2) 고정 insert 문을 만든다. 테이블명은 검증된 값이어야 한다.
pub fn insert_statement(table: &str) -> String {
    format!("INSERT INTO {}(col1, col2) VALUES ($1, $2)", table)
}

pub fn statement_timeout_statement(timeout_ms: u64) -> String {
    format!("SET statement_timeout = {}", timeout_ms.max(1))
}
