// 목적:
// - CSV 레코드/행 집합 모델과 헤더 판별 규칙을 정의한다.
//
// 설명:
// - 레코드는 순서가 있는 문자열 필드 목록이며 길이는 보장되지 않는다.
// - 헤더 판별은 Postgres 적재 경로에만 적용되고 폴백 보관본에는 적용되지 않는다.
//
// 디자인 패턴:
// - 값 객체(Value Object) + 순수 함수 분류.
//
// 참조:
// - src_rs/index/postgres_repo.rs
// - src_rs/storage/fallback_archive.rs

pub type Record = Vec<String>;

/// 한 번의 실행에서 읽은 전체 레코드 집합이다. 읽은 뒤에는 변경하지 않는다.
pub type RowSet = Vec<Record>;

pub const HEADER_PREFIX: &str = "col";

/// 기본 적재 경로에서 레코드를 어떻게 다룰지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDisposition<'a> {
    Header,
    Empty,
    Insert {
        col1: &'a str,
        col2: Option<&'a str>,
    },
}

/// 첫 필드를 소문자로 바꿨을 때 "col"로 시작하면 헤더로 본다.
pub fn is_header_row(record: &[String]) -> bool {
    record
        .first()
        .map(|first| first.to_lowercase().starts_with(HEADER_PREFIX))
        .unwrap_or(false)
}

pub fn classify_record(record: &[String]) -> RowDisposition<'_> {
    if is_header_row(record) {
        return RowDisposition::Header;
    }

    match record {
        [] => RowDisposition::Empty,
        [col1] => RowDisposition::Insert {
            col1: col1.as_str(),
            col2: None,
        },
        [col1, col2, ..] => RowDisposition::Insert {
            col1: col1.as_str(),
            col2: Some(col2.as_str()),
        },
    }
}
