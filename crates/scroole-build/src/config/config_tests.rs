#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn ScrooleConfig___default___has_expected_values() {
    let config = ScrooleConfig::default();

    assert_eq!(config.source_dir, PathBuf::from("src/main/scroole"));
    assert_eq!(
        config.output_dir,
        PathBuf::from("target/generated-sources/scroole")
    );
    assert_eq!(config.log_level, "info");
    assert!(!config.keep_going);
}

#[test]
fn ScrooleConfig___from_empty_toml___returns_defaults() {
    let config = ScrooleConfig::from_toml("").unwrap();

    assert_eq!(config, ScrooleConfig::new());
}

#[test]
fn ScrooleConfig___from_toml___parses_every_key() {
    let toml = r#"
source_dir = "declarations"
output_dir = "build/java"
log_level = "debug"
keep_going = true
"#;

    let config = ScrooleConfig::from_toml(toml).unwrap();

    assert_eq!(config.source_dir, PathBuf::from("declarations"));
    assert_eq!(config.output_dir, PathBuf::from("build/java"));
    assert_eq!(config.log_level, "debug");
    assert!(config.keep_going);
}

#[test]
fn ScrooleConfig___from_toml___partial_keeps_other_defaults() {
    let config = ScrooleConfig::from_toml(r#"output_dir = "gen""#).unwrap();

    assert_eq!(config.output_dir, PathBuf::from("gen"));
    assert_eq!(config.source_dir, PathBuf::from("src/main/scroole"));
}

#[test]
fn ScrooleConfig___from_toml___unknown_key___is_config_error() {
    let err = ScrooleConfig::from_toml(r#"sauce_dir = "typo""#).unwrap_err();

    assert!(matches!(err, BuildError::Config(_)));
}

#[test]
fn ScrooleConfig___from_toml___wrong_type___is_config_error() {
    let err = ScrooleConfig::from_toml("keep_going = \"yes\"").unwrap_err();

    assert!(matches!(err, BuildError::Config(_)));
}

#[test_case(r#"source_dir = """#, "source_dir" ; "empty source dir")]
#[test_case(r#"output_dir = """#, "output_dir" ; "empty output dir")]
#[test_case(r#"log_level = "loud""#, "log_level" ; "unknown log level")]
fn ScrooleConfig___validate___rejects_invalid_value(toml: &str, key: &str) {
    let err = ScrooleConfig::from_toml(toml).unwrap_err();

    assert!(
        err.to_string().contains(key),
        "error {err} should mention {key}"
    );
}

#[test_case("trace")]
#[test_case("DEBUG")]
#[test_case("warn")]
#[test_case("off")]
fn ScrooleConfig___validate___accepts_log_level(level: &str) {
    let config = ScrooleConfig {
        log_level: level.to_string(),
        ..ScrooleConfig::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn ScrooleConfig___failure_policy___follows_keep_going() {
    let mut config = ScrooleConfig::default();
    assert_eq!(config.failure_policy(), FailurePolicy::Abort);

    config.keep_going = true;
    assert_eq!(config.failure_policy(), FailurePolicy::Skip);
}

#[test]
fn ScrooleConfig___from_file___missing_file___is_io_error() {
    let err = ScrooleConfig::from_file("definitely/not/here/scroole.toml").unwrap_err();

    assert!(matches!(err, BuildError::Io { .. }));
}

#[test]
fn ScrooleConfig___load___explicit_missing_path___fails() {
    let result = ScrooleConfig::load(Some(Path::new("definitely/not/here.toml")));

    assert!(result.is_err());
}

#[test]
fn ScrooleConfig___serialize___roundtrips_through_toml() {
    let config = ScrooleConfig {
        keep_going: true,
        ..ScrooleConfig::default()
    };

    let text = toml::to_string(&config).unwrap();
    let parsed = ScrooleConfig::from_toml(&text).unwrap();

    assert_eq!(parsed, config);
}
