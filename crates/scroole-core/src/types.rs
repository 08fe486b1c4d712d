//! Type classification for field type descriptors.
//!
//! A type descriptor is the text on the right-hand side of a field declaration.
//! Classification is purely syntactic: no type registry is consulted and no
//! aliases are resolved.
//!
//! # Categories
//!
//! | Descriptor | Category |
//! |------------|----------|
//! | `int`, `double`, `boolean`, ... | [`TypeCategory::Scalar`] |
//! | `int[]`, `String[][]` | [`TypeCategory::Array`] |
//! | `String`, `java.util.Map<String, Integer>` | [`TypeCategory::Reference`] |
//!
//! # Examples
//!
//! ```
//! use scroole_core::types::{classify, ScalarKind, TypeCategory};
//!
//! let ty = classify("int[]").unwrap();
//! assert_eq!(ty, TypeCategory::Array(Box::new(TypeCategory::Scalar(ScalarKind::Int))));
//! ```

use crate::error::{ScrooleError, ScrooleResult};
use serde::Serialize;
use std::fmt;

const ARRAY_SUFFIX: &str = "[]";
const WILDCARD: char = '?';

/// The fixed set of Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl ScalarKind {
    /// All scalar kinds, in keyword order.
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::Boolean,
        ScalarKind::Byte,
        ScalarKind::Short,
        ScalarKind::Int,
        ScalarKind::Long,
        ScalarKind::Char,
        ScalarKind::Float,
        ScalarKind::Double,
    ];

    /// Look up a scalar kind by its Java keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(ScalarKind::Boolean),
            "byte" => Some(ScalarKind::Byte),
            "short" => Some(ScalarKind::Short),
            "int" => Some(ScalarKind::Int),
            "long" => Some(ScalarKind::Long),
            "char" => Some(ScalarKind::Char),
            "float" => Some(ScalarKind::Float),
            "double" => Some(ScalarKind::Double),
            _ => None,
        }
    }

    /// The Java keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "boolean",
            ScalarKind::Byte => "byte",
            ScalarKind::Short => "short",
            ScalarKind::Int => "int",
            ScalarKind::Long => "long",
            ScalarKind::Char => "char",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A reference type: a class name with optional type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceType {
    /// The base name as written, e.g. `java.util.Map` or `String`.
    pub name: String,

    /// Resolved type arguments, empty for a raw or non-generic type.
    pub arguments: Vec<TypeCategory>,
}

impl ReferenceType {
    /// Create a non-parameterized reference type.
    pub fn simple(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: Vec::new(),
        }
    }

    /// Whether the type carries type arguments.
    pub fn is_parameterized(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// The behavioral category of a field type.
///
/// Derived from a descriptor on demand by [`classify`]; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "type", rename_all = "lowercase")]
pub enum TypeCategory {
    /// A Java primitive.
    Scalar(ScalarKind),

    /// An array over an element type (which may itself be an array).
    Array(Box<TypeCategory>),

    /// Any other type, possibly parameterized.
    Reference(ReferenceType),
}

impl TypeCategory {
    /// Whether values of this category may be `null`.
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeCategory::Reference(_))
    }

    /// The element type, for arrays.
    pub fn element(&self) -> Option<&TypeCategory> {
        match self {
            TypeCategory::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Whether this is an array whose elements are arrays.
    pub fn is_nested_array(&self) -> bool {
        matches!(self.element(), Some(TypeCategory::Array(_)))
    }
}

/// Renders the category in descriptor syntax, names exactly as written.
impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCategory::Scalar(kind) => write!(f, "{kind}"),
            TypeCategory::Array(element) => write!(f, "{element}{ARRAY_SUFFIX}"),
            TypeCategory::Reference(reference) => {
                f.write_str(&reference.name)?;
                if reference.is_parameterized() {
                    f.write_str("<")?;
                    for (i, argument) in reference.arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

/// Classify a type descriptor.
///
/// # Errors
///
/// - [`ScrooleError::MalformedTypeDescriptor`] for unbalanced `<`/`>`, empty
///   names or arguments, or text after the closing `>`.
///   Wildcards (`?`, `? extends T`, `? super T`) are rejected here too.
/// - [`ScrooleError::UnsupportedTypeCategory`] for `void`.
pub fn classify(descriptor: &str) -> ScrooleResult<TypeCategory> {
    let trimmed = descriptor.trim();
    if trimmed.is_empty() {
        return Err(ScrooleError::malformed_type(descriptor, "descriptor is empty"));
    }

    if let Some(kind) = ScalarKind::from_keyword(trimmed) {
        return Ok(TypeCategory::Scalar(kind));
    }

    if trimmed == "void" {
        return Err(ScrooleError::UnsupportedTypeCategory(trimmed.to_string()));
    }

    if trimmed.starts_with(WILDCARD) {
        return Err(ScrooleError::malformed_type(
            descriptor,
            "wildcard type arguments are not supported",
        ));
    }

    if let Some(element) = trimmed.strip_suffix(ARRAY_SUFFIX) {
        if element.trim().is_empty() {
            return Err(ScrooleError::malformed_type(
                descriptor,
                "array suffix without element type",
            ));
        }
        return Ok(TypeCategory::Array(Box::new(classify(element)?)));
    }

    classify_reference(trimmed).map(TypeCategory::Reference)
}

fn classify_reference(descriptor: &str) -> ScrooleResult<ReferenceType> {
    let Some(open) = descriptor.find('<') else {
        if descriptor.contains('>') {
            return Err(ScrooleError::malformed_type(descriptor, "unbalanced '>'"));
        }
        return Ok(ReferenceType::simple(descriptor));
    };

    let name = descriptor[..open].trim();
    if name.is_empty() {
        return Err(ScrooleError::malformed_type(
            descriptor,
            "type arguments without base name",
        ));
    }

    let Some(inner) = descriptor[open + 1..].strip_suffix('>') else {
        let reason = if descriptor.contains('>') {
            "unexpected text after closing '>'"
        } else {
            "unbalanced '<'"
        };
        return Err(ScrooleError::malformed_type(descriptor, reason));
    };

    let arguments = split_arguments(descriptor, inner)?
        .into_iter()
        .map(classify)
        .collect::<ScrooleResult<Vec<_>>>()?;

    Ok(ReferenceType {
        name: name.to_string(),
        arguments,
    })
}

/// Split type arguments on commas at nesting depth zero.
fn split_arguments<'a>(descriptor: &str, inner: &'a str) -> ScrooleResult<Vec<&'a str>> {
    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ScrooleError::malformed_type(descriptor, "unbalanced '>'"))?;
            }
            ',' if depth == 0 => {
                arguments.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ScrooleError::malformed_type(descriptor, "unbalanced '<'"));
    }
    arguments.push(inner[start..].trim());

    if arguments.iter().any(|argument| argument.is_empty()) {
        return Err(ScrooleError::malformed_type(descriptor, "empty type argument"));
    }

    Ok(arguments)
}
