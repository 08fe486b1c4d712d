//! Describe command implementation

use anyhow::{Context, Result};
use scroole_build::driver::SOURCE_EXTENSION;
use std::path::Path;

/// Target name of a standalone file: its name without the suffix.
fn default_target(file: &Path) -> Result<String> {
    let stem = file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Cannot derive a class name from {file:?}"))?;
    Ok(stem.to_string())
}

/// Render one declaration as JSON or as Java source.
pub fn render(target: &str, declaration_text: &str, json: bool) -> Result<String> {
    let class = scroole_core::parse(target, declaration_text)
        .with_context(|| format!("Failed to parse {target}"))?;

    if json {
        serde_json::to_string_pretty(&class).context("Failed to serialize description")
    } else {
        scroole_core::generate(&class).with_context(|| format!("Failed to generate {target}"))
    }
}

/// Describe command implementation
pub fn run(file: &Path, name: Option<String>, json: bool) -> Result<()> {
    if file.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        tracing::warn!("{:?} does not have the .{} suffix", file, SOURCE_EXTENSION);
    }

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read declaration: {file:?}"))?;
    let target = match name {
        Some(name) => name,
        None => default_target(file)?,
    };

    let rendered = render(&target, &text, json)?;
    print!("{rendered}");
    if json {
        println!();
    }
    Ok(())
}
