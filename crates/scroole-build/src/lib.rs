//! scroole-build - Source tree driver for Scroole
//!
//! This crate provides:
//! - [`SourceTree`] discovery of `*.scroole` declarations and batch generation
//! - [`ScrooleConfig`] loaded from `scroole.toml`
//! - [`BuildError`] for everything that can fail around the core
//!
//! ```no_run
//! use scroole_build::{FailurePolicy, SourceTree};
//!
//! let tree = SourceTree::new("src/main/scroole", "target/generated-sources/scroole")?;
//! let report = tree.generate_all(FailurePolicy::Abort)?;
//! println!("wrote {} file(s)", report.written.len());
//! # Ok::<(), scroole_build::BuildError>(())
//! ```

pub mod config;
pub mod driver;
mod error;

pub use config::{CONFIG_FILE_NAME, ScrooleConfig};
pub use driver::{
    CheckReport, FailurePolicy, GenerationReport, SourceTree, SourceUnit, generate_unit,
    target_name,
};
pub use error::{BuildError, BuildResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BuildError, BuildResult, FailurePolicy, GenerationReport, ScrooleConfig, SourceTree,
    };
}
