use std::path::Path;

use bench_report::{BenchReportError, REPORT_FILE, RunConfig};

#[test]
fn commit_is_taken_from_the_single_positional_argument() {
    let config = RunConfig::from_args(&["write_parser_benchmark_to_csv", "abc123"]).expect("cfg");
    assert_eq!(config.commit, "abc123");
    assert_eq!(config.report_path, Path::new(REPORT_FILE));
}

#[test]
fn missing_commit_is_an_argument_error() {
    let err = RunConfig::from_args(&["write_parser_benchmark_to_csv"]).unwrap_err();
    assert!(matches!(err, BenchReportError::Argument(_)));
}

#[test]
fn extra_arguments_are_rejected() {
    let err =
        RunConfig::from_args(&["write_parser_benchmark_to_csv", "abc123", "extra"]).unwrap_err();
    assert!(matches!(err, BenchReportError::Argument(_)));
}
