//! Integration tests for batch generation over real directories.

#![allow(non_snake_case)]

use scroole_build::{BuildError, FailurePolicy, ScrooleConfig, SourceTree};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SIMPLE: &str = "\
# A simple class.

name: java.lang.String
count: int
";

/// Helper to create a declaration file, including missing parent directories.
fn create_declaration(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

struct Dirs {
    _temp: TempDir,
    source: PathBuf,
    output: PathBuf,
}

fn dirs() -> Dirs {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("scroole");
    let output = temp.path().join("generated");
    fs::create_dir_all(&source).unwrap();
    fs::create_dir_all(&output).unwrap();
    Dirs {
        _temp: temp,
        source,
        output,
    }
}

// =============================================================================
// Generation
// =============================================================================

mod generation {
    use super::*;

    #[test]
    fn generate_all___class_without_package___has_no_package_line() {
        let dirs = dirs();
        create_declaration(&dirs.source, "Simple.scroole", SIMPLE);
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        let report = tree.generate_all(FailurePolicy::Abort).unwrap();

        assert_eq!(report.written, vec![dirs.output.join("Simple.java")]);
        let java = fs::read_to_string(dirs.output.join("Simple.java")).unwrap();
        assert!(!java.contains("package"));
        assert!(java.starts_with("/**\n * A simple class.\n */\npublic class Simple {\n"));
    }

    #[test]
    fn generate_all___class_in_subdirectory___declares_package() {
        let dirs = dirs();
        create_declaration(&dirs.source, "sub/Simple.scroole", SIMPLE);
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        tree.generate_all(FailurePolicy::Abort).unwrap();

        let java = fs::read_to_string(dirs.output.join("sub").join("Simple.java")).unwrap();
        assert!(java.starts_with("package sub;"));
    }

    #[test]
    fn generate_all___several_files___writes_one_java_file_each() {
        let dirs = dirs();
        create_declaration(&dirs.source, "Simple.scroole", SIMPLE);
        create_declaration(&dirs.source, "Simple2.scroole", SIMPLE);
        create_declaration(&dirs.source, "a/b/Nested.scroole", SIMPLE);
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        let report = tree.generate_all(FailurePolicy::Abort).unwrap();

        assert!(report.is_success());
        assert_eq!(report.written.len(), 3);
        assert!(dirs.output.join("Simple.java").exists());
        assert!(dirs.output.join("Simple2.java").exists());
        assert!(dirs.output.join("a/b/Nested.java").exists());
    }

    #[test]
    fn generate_all___missing_output_directory___is_created() {
        let dirs = dirs();
        create_declaration(&dirs.source, "Simple.scroole", SIMPLE);
        let missing = dirs.output.join("not-existing");
        let tree = SourceTree::new(&dirs.source, &missing).unwrap();

        tree.generate_all(FailurePolicy::Abort).unwrap();

        assert!(missing.join("Simple.java").exists());
    }

    #[test]
    fn generate_all___other_files___are_ignored() {
        let dirs = dirs();
        create_declaration(&dirs.source, "Simple.scroole", SIMPLE);
        create_declaration(&dirs.source, "README.md", "not a declaration");
        fs::create_dir_all(dirs.source.join("folder.scroole")).unwrap();
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        let units = tree.discover().unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].target, "Simple");
    }

    #[test]
    fn generate_all___empty_source_tree___writes_nothing() {
        let dirs = dirs();
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        let report = tree.generate_all(FailurePolicy::Abort).unwrap();

        assert!(report.is_success());
        assert!(report.written.is_empty());
    }

    #[test]
    fn discover___root_with_leading_current_dir___keeps_package() {
        let temp = TempDir::new_in(".").unwrap();
        let name = temp.path().file_name().unwrap();
        let source = Path::new(".").join(name).join("scroole");
        create_declaration(&source, "com/example/Person.scroole", SIMPLE);
        let tree = SourceTree::new(&source, Path::new(".").join(name).join("generated")).unwrap();

        let units = tree.discover().unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].target, "com.example.Person");
    }

    #[test]
    fn discover___sorts_by_target_name() {
        let dirs = dirs();
        create_declaration(&dirs.source, "z/Last.scroole", SIMPLE);
        create_declaration(&dirs.source, "First.scroole", SIMPLE);
        create_declaration(&dirs.source, "m/Middle.scroole", SIMPLE);
        let tree = SourceTree::new(&dirs.source, &dirs.output).unwrap();

        let targets: Vec<String> = tree
            .discover()
            .unwrap()
            .into_iter()
            .map(|unit| unit.target)
            .collect();

        assert_eq!(targets, vec!["First", "m.Middle", "z.Last"]);
    }
}

// =============================================================================
// Failure policies
// =============================================================================

mod failures {
    use super::*;

    fn tree_with_one_broken_unit(dirs: &Dirs) -> SourceTree {
        create_declaration(&dirs.source, "Good.scroole", SIMPLE);
        create_declaration(&dirs.source, "Bad.scroole", "value: java.util.List<String\n");
        SourceTree::new(&dirs.source, &dirs.output).unwrap()
    }

    #[test]
    fn generate_all___abort___writes_nothing() {
        let dirs = dirs();
        let tree = tree_with_one_broken_unit(&dirs);

        let report = tree.generate_all(FailurePolicy::Abort).unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].target(), Some("Bad"));
        assert!(!dirs.output.join("Good.java").exists());
    }

    #[test]
    fn generate_all___skip___writes_successful_units() {
        let dirs = dirs();
        let tree = tree_with_one_broken_unit(&dirs);

        let report = tree.generate_all(FailurePolicy::Skip).unwrap();

        assert_eq!(report.written, vec![dirs.output.join("Good.java")]);
        assert_eq!(report.failures.len(), 1);
        assert!(!dirs.output.join("Bad.java").exists());
    }

    #[test]
    fn check___reports_failures_without_writing() {
        let dirs = dirs();
        let tree = tree_with_one_broken_unit(&dirs);

        let report = tree.check().unwrap();

        assert_eq!(report.passed, vec!["Good".to_string()]);
        assert_eq!(report.failures.len(), 1);
        assert!(fs::read_dir(&dirs.output).unwrap().next().is_none());
    }
}

// =============================================================================
// Root validation
// =============================================================================

mod validation {
    use super::*;

    #[test]
    fn SourceTree___missing_source_dir___is_source_dir_not_found() {
        let dirs = dirs();

        let err = SourceTree::new(dirs.source.join("missing"), &dirs.output).unwrap_err();

        assert!(matches!(err, BuildError::SourceDirNotFound(_)));
    }

    #[test]
    fn SourceTree___source_is_file___is_not_a_directory() {
        let dirs = dirs();
        let file = create_declaration(&dirs.source, "Simple.scroole", SIMPLE);

        let err = SourceTree::new(&file, &dirs.output).unwrap_err();

        assert!(matches!(err, BuildError::NotADirectory(path) if path == file));
    }

    #[test]
    fn SourceTree___output_is_file___is_not_a_directory() {
        let dirs = dirs();
        let file = dirs.output.join("occupied");
        fs::write(&file, "").unwrap();

        let err = SourceTree::new(&dirs.source, &file).unwrap_err();

        assert!(matches!(err, BuildError::NotADirectory(path) if path == file));
    }

    #[test]
    fn SourceTree___for_check_with_output_file___validates_source_only() {
        let dirs = dirs();
        create_declaration(&dirs.source, "Simple.scroole", SIMPLE);
        let file = dirs.output.join("occupied");
        fs::write(&file, "").unwrap();

        let report = SourceTree::for_check(&dirs.source, &file)
            .unwrap()
            .check()
            .unwrap();

        assert_eq!(report.passed, vec!["Simple".to_string()]);
    }

    #[test]
    fn SourceTree___for_check_missing_source___is_source_dir_not_found() {
        let dirs = dirs();

        let err = SourceTree::for_check(dirs.source.join("missing"), &dirs.output).unwrap_err();

        assert!(matches!(err, BuildError::SourceDirNotFound(_)));
    }

    #[test]
    fn ScrooleConfig___source_tree___uses_configured_roots() {
        let dirs = dirs();
        let config = ScrooleConfig {
            source_dir: dirs.source.clone(),
            output_dir: dirs.output.clone(),
            ..ScrooleConfig::default()
        };

        let tree = config.source_tree().unwrap();

        assert_eq!(tree.source_dir(), dirs.source.as_path());
        assert_eq!(tree.output_dir(), dirs.output.as_path());
    }

    #[test]
    fn ScrooleConfig___from_file___reads_toml() {
        let dirs = dirs();
        let path = dirs.source.join("scroole.toml");
        fs::write(&path, "keep_going = true\n").unwrap();

        let config = ScrooleConfig::from_file(&path).unwrap();

        assert!(config.keep_going);
    }
}
