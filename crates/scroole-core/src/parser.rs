//! Parser for the Scroole declaration language.
//!
//! # Grammar
//!
//! The input is read line by line:
//!
//! - a blank line is a separator; the first separator that follows documentation
//!   commits that documentation to the class,
//! - a line starting with `#` is documentation for whatever follows,
//! - every other line declares a field as `name: type`.
//!
//! ```text
//! # A person.
//!
//! # The person's name.
//! name: String
//! age: int
//! ```
//!
//! A blank line after the first field never sets class documentation.

use crate::error::{ScrooleError, ScrooleResult};
use crate::model::{
    COMMENT_MARKER, ClassDescription, FieldDescription, NAMESPACE_SEPARATOR, TYPE_SEPARATOR,
};

/// Parse declaration text into a [`ClassDescription`].
///
/// `target_name` is the fully-qualified class name, e.g. `com.example.Person`.
///
/// # Errors
///
/// - [`ScrooleError::InvalidTargetName`] if `target_name` is empty or has an
///   empty or blank-containing segment.
/// - [`ScrooleError::MalformedFieldDeclaration`] for a field line without a
///   colon or with an empty name or type.
pub fn parse(target_name: &str, declaration_text: &str) -> ScrooleResult<ClassDescription> {
    let (package_name, simple_name) = split_target_name(target_name)?;

    let state = declaration_text
        .lines()
        .enumerate()
        .try_fold(ParseState::default(), |state, (index, line)| {
            state.line(index + 1, line)
        })?;

    Ok(ClassDescription {
        package_name: package_name.to_string(),
        simple_name: simple_name.to_string(),
        documentation: state.class_doc.unwrap_or_default(),
        fields: state.fields,
    })
}

/// Split a target name into package and simple name.
pub fn split_target_name(target_name: &str) -> ScrooleResult<(&str, &str)> {
    if target_name.is_empty() {
        return Err(ScrooleError::invalid_target(target_name, "name is empty"));
    }

    for segment in target_name.split(NAMESPACE_SEPARATOR) {
        if segment.is_empty() {
            return Err(ScrooleError::invalid_target(
                target_name,
                "name has an empty segment",
            ));
        }
        if segment.chars().any(char::is_whitespace) {
            return Err(ScrooleError::invalid_target(
                target_name,
                "name contains whitespace",
            ));
        }
    }

    Ok(target_name
        .rsplit_once(NAMESPACE_SEPARATOR)
        .unwrap_or(("", target_name)))
}

/// State threaded through the line fold.
#[derive(Debug, Default)]
struct ParseState {
    pending_doc: String,
    /// `Some` once the class documentation has been committed.
    class_doc: Option<String>,
    fields: Vec<FieldDescription>,
}

impl ParseState {
    fn line(self, number: usize, line: &str) -> ScrooleResult<Self> {
        let content = line.trim_start();
        if content.trim_end().is_empty() {
            Ok(self.separator())
        } else if let Some(doc) = content.strip_prefix(COMMENT_MARKER) {
            Ok(self.documentation(doc.strip_prefix(' ').unwrap_or(doc)))
        } else {
            self.field(number, line)
        }
    }

    fn separator(mut self) -> Self {
        let pending = std::mem::take(&mut self.pending_doc);
        if self.class_doc.is_none() && self.fields.is_empty() && !pending.is_empty() {
            self.class_doc = Some(pending);
        }
        self
    }

    fn documentation(mut self, doc: &str) -> Self {
        if !self.pending_doc.is_empty() {
            self.pending_doc.push('\n');
        }
        self.pending_doc.push_str(doc);
        self
    }

    fn field(mut self, number: usize, line: &str) -> ScrooleResult<Self> {
        let malformed = || ScrooleError::MalformedFieldDeclaration {
            line: number,
            content: line.to_string(),
        };

        let (name, type_descriptor) = line.split_once(TYPE_SEPARATOR).ok_or_else(malformed)?;
        let (name, type_descriptor) = (name.trim(), type_descriptor.trim());
        if name.is_empty() || type_descriptor.is_empty() {
            return Err(malformed());
        }

        let documentation = std::mem::take(&mut self.pending_doc);
        self.fields.push(FieldDescription {
            name: name.to_string(),
            type_descriptor: type_descriptor.to_string(),
            documentation,
        });
        Ok(self)
    }
}
