#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn config_for(temp: &TempDir) -> ScrooleConfig {
    ScrooleConfig {
        source_dir: temp.path().join("scroole"),
        output_dir: temp.path().join("generated"),
        ..ScrooleConfig::default()
    }
}

#[test]
fn resolve___no_overrides___keeps_config() {
    let config = ScrooleConfig::default();

    let resolved = resolve(config.clone(), None, None, false).unwrap();

    assert_eq!(resolved, config);
}

#[test]
fn resolve___flags___override_file_values() {
    let config = ScrooleConfig::default();

    let resolved = resolve(
        config,
        Some(PathBuf::from("decls")),
        Some(PathBuf::from("out")),
        true,
    )
    .unwrap();

    assert_eq!(resolved.source_dir, PathBuf::from("decls"));
    assert_eq!(resolved.output_dir, PathBuf::from("out"));
    assert!(resolved.keep_going);
}

#[test]
fn resolve___keep_going_from_file___survives_absent_flag() {
    let config = ScrooleConfig {
        keep_going: true,
        ..ScrooleConfig::default()
    };

    let resolved = resolve(config, None, None, false).unwrap();

    assert!(resolved.keep_going);
}

#[test]
fn resolve___empty_source_override___is_rejected() {
    let result = resolve(ScrooleConfig::default(), Some(PathBuf::new()), None, false);

    assert!(result.is_err());
}

#[test]
fn run___valid_tree___writes_java_files() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);
    fs::create_dir_all(config.source_dir.join("com/example")).unwrap();
    fs::write(
        config.source_dir.join("com/example/Person.scroole"),
        "name: String\nage: int\n",
    )
    .unwrap();

    run(config.clone(), None, None, false).unwrap();

    let java =
        fs::read_to_string(config.output_dir.join("com/example/Person.java")).unwrap();
    assert!(java.starts_with("package com.example;\n"));
}

#[test]
fn run___failing_declaration___returns_error() {
    let temp = TempDir::new().unwrap();
    let config = config_for(&temp);
    fs::create_dir_all(&config.source_dir).unwrap();
    fs::write(config.source_dir.join("Broken.scroole"), "just words\n").unwrap();

    let err = run(config, None, None, false).unwrap_err();

    assert!(err.to_string().contains("nothing was written"));
}

#[test]
fn run___missing_source_directory___returns_error() {
    let temp = TempDir::new().unwrap();

    let result = run(config_for(&temp), None, None, false);

    assert!(result.is_err());
}
