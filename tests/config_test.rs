// tests/config_test.rs — Integration test: config files drive grader construction

use std::io::Write;

use tooljudge::core::types::MetricType;
use tooljudge::evaluator::ToolCallSequenceGrader;
use tooljudge::infra::config::Config;
use tooljudge::infra::errors::JudgeError;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
[grader]
metric_type = "precision"
match_arguments = true

[runner]
max_concurrency = 8
"#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.runner.max_concurrency, 8);

    let grader = ToolCallSequenceGrader::from_config(&config.grader).unwrap();
    assert_eq!(grader.metric_type(), MetricType::Precision);
    assert!(grader.match_arguments());
}

#[test]
fn test_bad_metric_fails_at_construction() {
    let file = write_config("[grader]\nmetric_type = \"accuracy\"\n");
    let config = Config::load_from(file.path()).unwrap();

    let err = ToolCallSequenceGrader::from_config(&config.grader).unwrap_err();
    assert!(matches!(err, JudgeError::InvalidMetric { ref value } if value == "accuracy"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let file = write_config("[grader\nmetric_type = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_zero_concurrency_rejected() {
    let file = write_config("[runner]\nmax_concurrency = 0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, JudgeError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, JudgeError::Io(_)));
}
