//! Error types for parsing and code generation

use thiserror::Error;

/// Result type alias for core operations
pub type ScrooleResult<T> = Result<T, ScrooleError>;

/// Error type for a single parse-generate cycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrooleError {
    /// The fully-qualified target name is empty or malformed
    #[error("invalid target name {name:?}: {reason}")]
    InvalidTargetName { name: String, reason: String },

    /// A field declaration line has no `name: type` shape
    #[error("malformed field declaration on line {line}: {content:?}")]
    MalformedFieldDeclaration { line: usize, content: String },

    /// A type descriptor could not be parsed
    #[error("malformed type descriptor {descriptor:?}: {reason}")]
    MalformedTypeDescriptor { descriptor: String, reason: String },

    /// A type descriptor names something that cannot be a field type
    #[error("unsupported type category: {0}")]
    UnsupportedTypeCategory(String),

    /// A value does not fit the category of the field it was given for
    #[error("value type mismatch: expected {expected}, found {found}")]
    ValueTypeMismatch { expected: String, found: String },
}

impl ScrooleError {
    pub(crate) fn invalid_target(name: &str, reason: &str) -> Self {
        ScrooleError::InvalidTargetName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed_type(descriptor: &str, reason: &str) -> Self {
        ScrooleError::MalformedTypeDescriptor {
            descriptor: descriptor.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short, stable name of the error kind, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            ScrooleError::InvalidTargetName { .. } => "InvalidTargetName",
            ScrooleError::MalformedFieldDeclaration { .. } => "MalformedFieldDeclaration",
            ScrooleError::MalformedTypeDescriptor { .. } => "MalformedTypeDescriptor",
            ScrooleError::UnsupportedTypeCategory(_) => "UnsupportedTypeCategory",
            ScrooleError::ValueTypeMismatch { .. } => "ValueTypeMismatch",
        }
    }
}
