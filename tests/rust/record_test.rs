use rstest::rstest;

use ingest_fallback::core::errors::PrimaryWriteError;
use ingest_fallback::core::record::{classify_record, is_header_row, RowDisposition};
use ingest_fallback::index::postgres_repo::{plan_inserts, InsertRow};
use ingest_fallback::index::sql::{
    insert_statement, statement_timeout_statement, validate_identifier,
};

use crate::support::{rows, sample_rows};

#[rstest]
#[case(&["col1", "col2"], true)]
#[case(&["COL1"], true)]
#[case(&["Column name"], true)]
#[case(&["colour"], true)]
#[case(&[" col1"], false)]
#[case(&["a", "col"], false)]
#[case(&["co"], false)]
#[case(&[""], false)]
fn header_rule_checks_first_field_prefix(#[case] fields: &[&str], #[case] expected: bool) {
    let record = fields.iter().map(|field| field.to_string()).collect::<Vec<_>>();
    assert_eq!(is_header_row(&record), expected);
}

#[test]
fn empty_record_is_not_header() {
    assert!(!is_header_row(&[]));
    assert_eq!(classify_record(&[]), RowDisposition::Empty);
}

#[test]
fn single_field_binds_null_second_column() {
    let record = vec!["x".to_string()];
    assert_eq!(
        classify_record(&record),
        RowDisposition::Insert {
            col1: "x",
            col2: None
        }
    );
}

#[test]
fn extra_fields_beyond_second_are_ignored() {
    let record = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(
        classify_record(&record),
        RowDisposition::Insert {
            col1: "a",
            col2: Some("b")
        }
    );
}

#[test]
fn plan_skips_header_and_keeps_input_positions() {
    let input = sample_rows();
    let planned = plan_inserts(&input).unwrap();

    assert_eq!(
        planned,
        vec![
            InsertRow {
                row: 2,
                col1: "a",
                col2: Some("1")
            },
            InsertRow {
                row: 3,
                col1: "b",
                col2: Some("2")
            },
        ]
    );
}

#[test]
fn plan_rejects_record_without_fields() {
    let mut input = rows(&[&["a", "1"]]);
    input.push(Vec::new());

    let error = plan_inserts(&input).unwrap_err();
    assert!(matches!(error, PrimaryWriteError::EmptyRecord { row: 2 }));
}

#[test]
fn insert_statement_targets_two_columns() {
    assert_eq!(
        insert_statement("mytable"),
        "INSERT INTO mytable(col1, col2) VALUES ($1, $2)"
    );
    assert_eq!(statement_timeout_statement(0), "SET statement_timeout = 1");
}

#[rstest]
#[case("mytable", true)]
#[case("fallback_table_2", true)]
#[case("", false)]
#[case("my-table", false)]
#[case("t; DROP TABLE x", false)]
fn identifier_guard(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(validate_identifier(value, "PG_TABLE").is_ok(), valid);
}
