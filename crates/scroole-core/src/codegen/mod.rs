//! Code generation from class descriptions.
//!
//! This module renders a [`ClassDescription`](crate::model::ClassDescription)
//! as the Java source of an immutable value class.
//!
//! # Generated Members
//!
//! In order:
//!
//! - `private final` fields, one per declared field
//! - a public constructor assigning every field
//! - one `getX()` accessor per field
//! - `hashCode()` accumulating `result = 31 * result + contribution`
//! - `equals(Object)` conjoining one comparison per field
//! - a private null-safe `equals(Object, Object)` helper, only when a field
//!   has a reference type
//!
//! Per-field hash contributions and comparisons are chosen by
//! [`crate::contract::HashStrategy`] and [`crate::contract::EqualityStrategy`].
//!
//! # Examples
//!
//! ```rust
//! use scroole_core::{generate, parse};
//!
//! let class = parse("com.example.Point", "x: int\ny: int\n").unwrap();
//! let java = generate(&class).unwrap();
//!
//! assert!(java.starts_with("package com.example;\n"));
//! assert!(java.contains("  public int getX() {\n"));
//! assert!(java.contains("    return x == that.x\n            && y == that.y;\n"));
//! ```
//!
//! # See Also
//!
//! - [`imports`] for shortest-name rendering and imports
//! - [`naming`] for accessor names
//! - [`java`] for the emitter itself

pub mod imports;
pub mod java;
pub mod naming;

pub use java::generate_java;
