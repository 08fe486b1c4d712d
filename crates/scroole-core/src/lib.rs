//! scroole-core - Value-object declarations to Java source
//!
//! This crate provides the two stages of a Scroole build:
//! - [`parse`] turns declaration text into a [`ClassDescription`]
//! - [`generate`] renders a [`ClassDescription`] as Java source
//!
//! Both stages are pure functions: no I/O, no shared state. Independent
//! declarations can be processed in parallel without coordination.
//!
//! ```rust
//! let class = scroole_core::parse("com.example.Person", "# A person.\n\nname: String\n")?;
//! let java = scroole_core::generate(&class)?;
//!
//! assert!(java.contains("public class Person {"));
//! # Ok::<(), scroole_core::ScrooleError>(())
//! ```

pub mod codegen;
pub mod contract;
mod error;
pub mod model;
mod parser;
pub mod types;

pub use error::{ScrooleError, ScrooleResult};
pub use model::{ClassDescription, FieldDescription};
pub use parser::{parse, split_target_name};
pub use types::{ReferenceType, ScalarKind, TypeCategory, classify};

/// Render a [`ClassDescription`] as Java source.
///
/// # Errors
///
/// Propagates type classification errors for any field.
pub fn generate(class: &ClassDescription) -> ScrooleResult<String> {
    codegen::generate_java(class)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescription, FieldDescription, ScrooleError, ScrooleResult, TypeCategory, classify,
        generate, parse,
    };
}
