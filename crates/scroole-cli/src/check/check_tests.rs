#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn source_with(files: &[(&str, &str)]) -> (TempDir, ScrooleConfig) {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("scroole");
    fs::create_dir_all(&source).unwrap();
    for (name, content) in files {
        fs::write(source.join(name), content).unwrap();
    }
    let config = ScrooleConfig {
        source_dir: source,
        output_dir: temp.path().join("generated"),
        ..ScrooleConfig::default()
    };
    (temp, config)
}

#[test]
fn run___valid_declarations___succeeds_without_writing() {
    let (_temp, config) = source_with(&[("A.scroole", "x: int\n"), ("B.scroole", "y: long\n")]);
    let output = config.output_dir.clone();

    run(config, None).unwrap();

    assert!(!output.exists());
}

#[test]
fn run___invalid_declaration___fails() {
    let (_temp, config) = source_with(&[("A.scroole", "x: int\n"), ("B.scroole", "y: void\n")]);

    let err = run(config, None).unwrap_err();

    assert_eq!(err.to_string(), "1 of 2 declaration(s) failed");
}

#[test]
fn run___output_path_is_a_file___still_checks_source() {
    let (_temp, config) = source_with(&[("A.scroole", "x: int\n")]);
    fs::write(&config.output_dir, "occupied").unwrap();

    run(config, None).unwrap();
}

#[test]
fn run___missing_source___names_source_directory() {
    let (temp, mut config) = source_with(&[]);
    config.source_dir = temp.path().join("missing");

    let err = run(config, None).unwrap_err();

    assert_eq!(err.to_string(), "Invalid source directory");
}
