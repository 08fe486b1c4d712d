#![allow(non_snake_case)]

use super::*;

#[test]
fn BuildError___source_dir_not_found___names_path() {
    let err = BuildError::SourceDirNotFound(PathBuf::from("missing/dir"));

    assert_eq!(
        err.to_string(),
        "source directory does not exist: \"missing/dir\""
    );
}

#[test]
fn BuildError___unit___prefixes_target() {
    let err = BuildError::Unit {
        target: "com.example.Person".to_string(),
        source: ScrooleError::UnsupportedTypeCategory("void".to_string()),
    };

    assert_eq!(
        err.to_string(),
        "com.example.Person: unsupported type category: void"
    );
    assert_eq!(err.target(), Some("com.example.Person"));
}

#[test]
fn BuildError___unit___exposes_core_error_as_source() {
    use std::error::Error;

    let err = BuildError::Unit {
        target: "A".to_string(),
        source: ScrooleError::UnsupportedTypeCategory("void".to_string()),
    };

    let source = err.source().unwrap();

    assert_eq!(source.to_string(), "unsupported type category: void");
}

#[test]
fn BuildError___io___keeps_path() {
    let err = BuildError::io(
        "out/A.java",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );

    assert!(matches!(&err, BuildError::Io { path, .. } if path == &PathBuf::from("out/A.java")));
    assert!(err.to_string().contains("denied"));
    assert_eq!(err.target(), None);
}

#[test]
fn BuildError___from_pattern_error___is_pattern() {
    let pattern_error = glob::Pattern::new("a***b").unwrap_err();

    let err: BuildError = pattern_error.into();

    assert!(matches!(err, BuildError::Pattern(_)));
}

#[test]
fn BuildError___config___formats_message() {
    let err = BuildError::Config("output_dir cannot be empty".to_string());

    assert_eq!(
        err.to_string(),
        "configuration error: output_dir cannot be empty"
    );
}
