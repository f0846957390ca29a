use std::io::Write;

use sdnscreen::{
    screen_files, screener_from_config, ConfigLoadError, MatchError, ScreenConfig,
    ScreenRunError, SourceError,
};
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

const QUERY: &str = r#"{ "name": { "first": "John", "last": "Smith" } }"#;

#[test]
fn missing_config_file_is_a_read_error() {
    let candidates = temp_file("[]");
    let query = temp_file(QUERY);
    let err = screen_files("/nonexistent/screen.yaml", candidates.path(), query.path())
        .expect_err("config should be missing");
    assert!(matches!(
        err,
        ScreenRunError::Config(ConfigLoadError::FileRead(_))
    ));
}

#[test]
fn unsupported_config_version_is_rejected() {
    let config = temp_file("version: \"3\"\n");
    let candidates = temp_file("[]");
    let query = temp_file(QUERY);
    let err = screen_files(config.path(), candidates.path(), query.path())
        .expect_err("version should be rejected");
    assert!(matches!(
        err,
        ScreenRunError::Config(ConfigLoadError::UnsupportedVersion(_))
    ));
}

#[test]
fn invalid_similarity_scale_is_rejected() {
    let config = ScreenConfig::from_yaml("similarity:\n  prefix_scale: -0.1\n");
    assert!(matches!(config, Err(ConfigLoadError::Validation(_))));
}

#[test]
fn out_of_range_threshold_is_rejected_before_screening() {
    let mut config = ScreenConfig::default();
    config.search.threshold = 250;
    let err = screener_from_config(config).expect_err("threshold should be rejected");
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn malformed_query_is_a_parse_error() {
    let config = temp_file("version: \"1.0\"\n");
    let candidates = temp_file("[]");
    let query = temp_file("{ \"name\": ");
    let err = screen_files(config.path(), candidates.path(), query.path())
        .expect_err("query should not parse");
    assert!(matches!(err, ScreenRunError::QueryParse(_)));
}

#[test]
fn missing_query_file_is_a_read_error() {
    let config = temp_file("version: \"1.0\"\n");
    let candidates = temp_file("[]");
    let err = screen_files(config.path(), candidates.path(), "/nonexistent/query.json")
        .expect_err("query should be missing");
    assert!(matches!(err, ScreenRunError::QueryRead(_)));
}

#[test]
fn missing_candidate_file_is_a_source_error() {
    let config = temp_file("version: \"1.0\"\n");
    let query = temp_file(QUERY);
    let err = screen_files(config.path(), "/nonexistent/list.json", query.path())
        .expect_err("candidates should be missing");
    assert!(matches!(
        err,
        ScreenRunError::Match(MatchError::Source(SourceError::Io { .. }))
    ));
}

#[test]
fn malformed_candidate_file_is_a_source_error() {
    let config = temp_file("version: \"1.0\"\n");
    let candidates = temp_file("{ \"not\": \"an array\" }");
    let query = temp_file(QUERY);
    let err = screen_files(config.path(), candidates.path(), query.path())
        .expect_err("candidates should not parse");
    assert!(matches!(
        err,
        ScreenRunError::Match(MatchError::Source(SourceError::Json(_)))
    ));
}
