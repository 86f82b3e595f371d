// 목적:
// - 폴백 객체를 가리키는 외부 테이블 정의를 만든다.
//
// 설명:
// - 컬럼은 col1/col2 두 개의 string으로 고정한다.
// - 보관 파일이 CSV이므로 텍스트 입력 포맷과 LazySimpleSerDe(쉼표 구분)를 선언한다.
//
// 디자인 패턴:
// - 값 객체(Value Object).
//
// 참조:
// - src_rs/catalog/glue_registrar.rs

use serde::Serialize;

use crate::storage::fallback_archive::ArchivedObject;

pub const EXTERNAL_TABLE_TYPE: &str = "EXTERNAL_TABLE";
pub const TEXT_INPUT_FORMAT: &str = "org.apache.hadoop.mapred.TextInputFormat";
pub const TEXT_OUTPUT_FORMAT: &str = "org.apache.hadoop.hive.ql.io.HiveIgnoreKeyTextOutputFormat";
pub const CSV_SERDE_LIBRARY: &str = "org.apache.hadoop.hive.serde2.lazy.LazySimpleSerDe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalTableDefinition {
    pub name: String,
    pub table_type: String,
    pub location: String,
    pub columns: Vec<ColumnDefinition>,
    pub input_format: String,
    pub output_format: String,
    pub serde_library: String,
    pub field_delimiter: String,
    pub classification: String,
}

impl ExternalTableDefinition {
    pub fn for_archive(table_name: &str, archived: &ArchivedObject) -> Self {
        let columns = ["col1", "col2"]
            .iter()
            .map(|name| ColumnDefinition {
                name: name.to_string(),
                data_type: "string".to_string(),
            })
            .collect();

        Self {
            name: table_name.to_string(),
            table_type: EXTERNAL_TABLE_TYPE.to_string(),
            location: archived.location(),
            columns,
            input_format: TEXT_INPUT_FORMAT.to_string(),
            output_format: TEXT_OUTPUT_FORMAT.to_string(),
            serde_library: CSV_SERDE_LIBRARY.to_string(),
            field_delimiter: ",".to_string(),
            classification: "csv".to_string(),
        }
    }
}
