//! Check command implementation

use crate::generate::resolve;
use anyhow::{Context, Result};
use scroole_build::ScrooleConfig;
use std::path::PathBuf;

/// Check command implementation
pub fn run(config: ScrooleConfig, source: Option<PathBuf>) -> Result<()> {
    let config = resolve(config, source, None, false)?;

    println!("Checking declarations in {}", config.source_dir.display());

    let tree = config.check_tree().context("Invalid source directory")?;
    let report = tree.check()?;

    for target in &report.passed {
        println!("✓ {target}");
    }
    for failure in &report.failures {
        eprintln!("✗ {failure}");
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} declaration(s) failed",
            report.failures.len(),
            report.failures.len() + report.passed.len()
        );
    }

    println!("\nAll {} declaration(s) are valid!", report.passed.len());
    Ok(())
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
