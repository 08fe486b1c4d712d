//! Generate command implementation

use anyhow::{Context, Result};
use scroole_build::ScrooleConfig;
use std::path::PathBuf;

/// Apply command line overrides to a loaded configuration.
pub fn resolve(
    mut config: ScrooleConfig,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    keep_going: bool,
) -> Result<ScrooleConfig> {
    if let Some(source) = source {
        config.source_dir = source;
    }
    if let Some(output) = output {
        config.output_dir = output;
    }
    config.keep_going |= keep_going;

    config.validate()?;
    Ok(config)
}

/// Generate command implementation
pub fn run(
    config: ScrooleConfig,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    keep_going: bool,
) -> Result<()> {
    let config = resolve(config, source, output, keep_going)?;

    println!(
        "Generating Java sources: {} -> {}",
        config.source_dir.display(),
        config.output_dir.display()
    );

    let tree = config
        .source_tree()
        .context("Invalid source or output directory")?;
    let report = tree
        .generate_all(config.failure_policy())
        .context("Failed to write generated sources")?;

    for path in &report.written {
        println!("✓ {}", path.display());
    }
    for failure in &report.failures {
        eprintln!("✗ {failure}");
    }

    if !report.is_success() {
        if report.written.is_empty() {
            anyhow::bail!(
                "{} declaration(s) failed, nothing was written",
                report.failures.len()
            );
        }
        anyhow::bail!(
            "{} declaration(s) failed, {} file(s) written",
            report.failures.len(),
            report.written.len()
        );
    }

    println!("\nGenerated {} file(s)", report.written.len());
    Ok(())
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
