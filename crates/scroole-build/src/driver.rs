//! Batch generation over a tree of declaration files.
//!
//! A [`SourceTree`] pairs a source root holding `*.scroole` declarations with an
//! output root for the generated `*.java` files. The path of a declaration
//! relative to the source root names its class:
//!
//! ```text
//! src/main/scroole/com/example/Person.scroole
//!   -> target    com.example.Person
//!   -> output    target/generated-sources/scroole/com/example/Person.java
//! ```
//!
//! Units are parsed and generated in parallel. Nothing is written until every
//! unit has been rendered, so a failing unit under [`FailurePolicy::Abort`]
//! leaves the output root untouched.

use crate::error::{BuildError, BuildResult};
use rayon::prelude::*;
use scroole_core::model::NAMESPACE_SEPARATOR;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Suffix of declaration files.
pub const SOURCE_EXTENSION: &str = "scroole";

/// Suffix of generated files.
pub const OUTPUT_EXTENSION: &str = "java";

/// What to do when some units fail to parse or generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Write nothing if any unit fails.
    #[default]
    Abort,
    /// Write every unit that succeeded and report the rest.
    Skip,
}

/// A discovered declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Fully-qualified class name derived from the relative path.
    pub target: String,
    /// Path of the declaration file.
    pub path: PathBuf,
}

/// Outcome of [`SourceTree::generate_all`].
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, in target order.
    pub written: Vec<PathBuf>,
    /// Units that failed, in target order.
    pub failures: Vec<BuildError>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of [`SourceTree::check`].
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Targets that parsed and generated.
    pub passed: Vec<String>,
    /// Units that failed, in target order.
    pub failures: Vec<BuildError>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A source root of declarations and the output root they generate into.
#[derive(Debug, Clone)]
pub struct SourceTree {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl SourceTree {
    /// Validate both roots.
    ///
    /// The source root must be an existing directory. The output root may be
    /// missing and is created on write, but if it exists it must be a directory.
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> BuildResult<Self> {
        let tree = Self::for_check(source_dir, output_dir)?;
        if tree.output_dir.exists() && !tree.output_dir.is_dir() {
            return Err(BuildError::NotADirectory(tree.output_dir));
        }
        Ok(tree)
    }

    /// Validate the source root only.
    ///
    /// For [`check`](Self::check) and [`discover`](Self::discover), which never
    /// touch the output root.
    pub fn for_check(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> BuildResult<Self> {
        let source_dir = source_dir.into();

        if !source_dir.exists() {
            return Err(BuildError::SourceDirNotFound(source_dir));
        }
        if !source_dir.is_dir() {
            return Err(BuildError::NotADirectory(source_dir));
        }

        Ok(Self {
            source_dir,
            output_dir: output_dir.into(),
        })
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Find every declaration below the source root, sorted by target name.
    pub fn discover(&self) -> BuildResult<Vec<SourceUnit>> {
        let root = self
            .source_dir
            .to_str()
            .ok_or_else(|| BuildError::InvalidPath(self.source_dir.clone()))?;
        let pattern = format!(
            "{}/**/*.{SOURCE_EXTENSION}",
            glob::Pattern::escape(root.trim_end_matches(['/', '\\']))
        );

        let mut units = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            let target = target_name(relative_to_root(&path, &self.source_dir)?)?;
            units.push(SourceUnit { target, path });
        }

        units.sort_by(|a, b| a.target.cmp(&b.target));
        tracing::debug!(
            "Discovered {} declaration(s) in {:?}",
            units.len(),
            self.source_dir
        );
        Ok(units)
    }

    /// Where the class `target` is written.
    pub fn output_path(&self, target: &str) -> PathBuf {
        let mut path = self.output_dir.clone();
        let mut segments = target.split(NAMESPACE_SEPARATOR).peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.{OUTPUT_EXTENSION}"));
            }
        }
        path
    }

    /// Parse and generate every unit, then write the results.
    ///
    /// Only I/O failures while writing are returned as `Err`. Unit failures are
    /// collected in the report; under [`FailurePolicy::Abort`] they also keep
    /// every other unit from being written.
    pub fn generate_all(&self, policy: FailurePolicy) -> BuildResult<GenerationReport> {
        let rendered = self.render_all()?;
        let mut report = GenerationReport::default();
        let mut outputs = Vec::new();

        for (unit, result) in rendered {
            match result {
                Ok(code) => outputs.push((unit, code)),
                Err(e) => {
                    tracing::warn!("Failed {:?}: {}", unit.path, e);
                    report.failures.push(e);
                }
            }
        }

        if policy == FailurePolicy::Abort && !report.is_success() {
            tracing::warn!(
                "Aborting: {} of {} unit(s) failed, nothing written",
                report.failures.len(),
                report.failures.len() + outputs.len()
            );
            return Ok(report);
        }

        for (unit, code) in outputs {
            let path = self.output_path(&unit.target);
            write_file(&path, &code)?;
            tracing::debug!("Wrote {:?}", path);
            report.written.push(path);
        }

        tracing::info!(
            "Generated {} file(s) into {:?}",
            report.written.len(),
            self.output_dir
        );
        Ok(report)
    }

    /// Parse and generate every unit in memory without writing anything.
    pub fn check(&self) -> BuildResult<CheckReport> {
        let mut report = CheckReport::default();
        for (unit, result) in self.render_all()? {
            match result {
                Ok(_) => report.passed.push(unit.target),
                Err(e) => report.failures.push(e),
            }
        }
        tracing::info!(
            "Checked {} unit(s), {} failed",
            report.passed.len() + report.failures.len(),
            report.failures.len()
        );
        Ok(report)
    }

    fn render_all(&self) -> BuildResult<Vec<(SourceUnit, BuildResult<String>)>> {
        let units = self.discover()?;
        tracing::info!(
            "Generating {} unit(s) from {:?}",
            units.len(),
            self.source_dir
        );

        Ok(units
            .into_par_iter()
            .map(|unit| {
                let result = render_unit(&unit);
                (unit, result)
            })
            .collect())
    }
}

fn render_unit(unit: &SourceUnit) -> BuildResult<String> {
    tracing::debug!("Generating {} from {:?}", unit.target, unit.path);
    let text = fs::read_to_string(&unit.path).map_err(|e| BuildError::io(&unit.path, e))?;
    generate_unit(&unit.target, &text)
}

fn write_file(path: &Path, code: &str) -> BuildResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::io(parent, e))?;
    }
    fs::write(path, code).map_err(|e| BuildError::io(path, e))
}

/// Strip the source root from a discovered path.
///
/// Glob drops `.` components from the root it walks, so a root like `./src`
/// is matched both as given and with those components removed.
fn relative_to_root<'a>(path: &'a Path, root: &Path) -> BuildResult<&'a Path> {
    if let Ok(relative) = path.strip_prefix(root) {
        return Ok(relative);
    }
    let normalized: PathBuf = root
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    path.strip_prefix(&normalized)
        .map_err(|_| BuildError::InvalidPath(path.to_path_buf()))
}

/// Parse and generate one declaration.
pub fn generate_unit(target: &str, declaration_text: &str) -> BuildResult<String> {
    let unit_error = |source| BuildError::Unit {
        target: target.to_string(),
        source,
    };

    let class = scroole_core::parse(target, declaration_text).map_err(unit_error)?;
    scroole_core::generate(&class).map_err(unit_error)
}

/// Derive a target name from a declaration path relative to the source root.
///
/// `com/example/Person.scroole` becomes `com.example.Person`.
pub fn target_name(relative: &Path) -> BuildResult<String> {
    let invalid = || BuildError::InvalidPath(relative.to_path_buf());

    let stem = relative
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(invalid)?;
    let mut segments = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(name) => segments.push(name.to_str().ok_or_else(invalid)?),
                Component::CurDir => {}
                _ => return Err(invalid()),
            }
        }
    }
    segments.push(stem);

    let separator = NAMESPACE_SEPARATOR.to_string();
    Ok(segments.join(separator.as_str()))
}
