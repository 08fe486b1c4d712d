//! Data model shared by the parser and the code generator.
//!
//! - [`ClassDescription`]: one value class with its package, name, docs and fields
//! - [`FieldDescription`]: one field with its name, type descriptor and docs
//!
//! Both are plain immutable values. A description is built once by
//! [`crate::parse`], read once by [`crate::generate`], then dropped.
//!
//! # Examples
//!
//! ```
//! use scroole_core::model::{ClassDescription, FieldDescription};
//!
//! let class = ClassDescription::new(
//!     "com.example",
//!     "Point",
//!     "A point.",
//!     vec![
//!         FieldDescription::new("x", "int", ""),
//!         FieldDescription::new("y", "int", ""),
//!     ],
//! );
//!
//! assert_eq!(class.qualified_name(), "com.example.Point");
//! ```

use serde::Serialize;

/// Marker that starts a documentation line in the declaration grammar.
pub const COMMENT_MARKER: char = '#';

/// Separator between a field name and its type descriptor.
pub const TYPE_SEPARATOR: char = ':';

/// Separator between namespace segments of a target name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// A single field of a value class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescription {
    /// Field name, non-empty.
    pub name: String,

    /// Type descriptor as written, non-empty.
    pub type_descriptor: String,

    /// Documentation, possibly empty. Lines are joined with `\n`.
    pub documentation: String,
}

impl FieldDescription {
    pub fn new(name: &str, type_descriptor: &str, documentation: &str) -> Self {
        Self {
            name: name.to_string(),
            type_descriptor: type_descriptor.to_string(),
            documentation: documentation.to_string(),
        }
    }
}

/// A value class to be generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassDescription {
    /// Package, empty for the default package.
    pub package_name: String,

    /// Simple class name, non-empty.
    pub simple_name: String,

    /// Class documentation, possibly empty.
    pub documentation: String,

    /// Fields in declaration order.
    pub fields: Vec<FieldDescription>,
}

impl ClassDescription {
    pub fn new(
        package_name: &str,
        simple_name: &str,
        documentation: &str,
        fields: Vec<FieldDescription>,
    ) -> Self {
        Self {
            package_name: package_name.to_string(),
            simple_name: simple_name.to_string(),
            documentation: documentation.to_string(),
            fields,
        }
    }

    /// The fully-qualified class name.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.simple_name.clone()
        } else {
            format!(
                "{}{NAMESPACE_SEPARATOR}{}",
                self.package_name, self.simple_name
            )
        }
    }

    /// Render the description back into declaration text.
    ///
    /// Parsing the result with [`crate::parse`] and [`Self::qualified_name`]
    /// yields an equal description, provided no documentation starts with an
    /// empty line.
    pub fn to_declaration(&self) -> String {
        let mut text = String::new();

        if !self.documentation.is_empty() {
            push_doc_lines(&mut text, &self.documentation);
            text.push('\n');
        }

        for field in &self.fields {
            push_doc_lines(&mut text, &field.documentation);
            text.push_str(&format!(
                "{}{TYPE_SEPARATOR} {}\n",
                field.name, field.type_descriptor
            ));
        }

        text
    }
}

fn push_doc_lines(text: &mut String, documentation: &str) {
    if documentation.is_empty() {
        return;
    }
    for line in documentation.split('\n') {
        text.push(COMMENT_MARKER);
        if !line.is_empty() {
            text.push(' ');
            text.push_str(line);
        }
        text.push('\n');
    }
}
