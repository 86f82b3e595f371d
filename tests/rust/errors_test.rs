use rstest::rstest;

use ingest_fallback::core::errors::{
    CoreError, Phase, PrimaryWriteError, RunError, EXIT_AWS_CLIENT_ERROR, EXIT_FAILURE,
    EXIT_MISSING_CREDENTIALS,
};

#[rstest]
#[case(Phase::Reading, CoreError::MissingCredentials("none".into()), EXIT_MISSING_CREDENTIALS)]
#[case(Phase::Reading, CoreError::Aws("NoSuchKey".into()), EXIT_AWS_CLIENT_ERROR)]
#[case(Phase::Reading, CoreError::Io("missing".into()), EXIT_FAILURE)]
#[case(Phase::Reading, CoreError::Csv("bad quote".into()), EXIT_FAILURE)]
#[case(Phase::Archiving, CoreError::MissingCredentials("none".into()), EXIT_FAILURE)]
#[case(Phase::Archiving, CoreError::Aws("AccessDenied".into()), EXIT_FAILURE)]
#[case(Phase::Registering, CoreError::Aws("AccessDeniedException".into()), EXIT_FAILURE)]
fn exit_code_depends_on_phase_and_cause(
    #[case] phase: Phase,
    #[case] source: CoreError,
    #[case] expected: u8,
) {
    assert_eq!(RunError::new(phase, source).exit_code(), expected);
}

#[test]
fn run_error_message_names_phase() {
    let error = RunError::new(Phase::Archiving, CoreError::Aws("PutObject 실패".into()));
    let message = error.to_string();
    assert!(message.starts_with("archiving"));
    assert!(message.contains("PutObject 실패"));
}

#[test]
fn primary_errors_carry_row_position() {
    let error = PrimaryWriteError::Insert {
        row: 7,
        message: "value too long".into(),
    };
    assert_eq!(error.to_string(), "7번째 행 insert 실패: value too long");
}
