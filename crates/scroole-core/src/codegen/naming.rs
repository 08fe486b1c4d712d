//! Naming utilities for generated Java members.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `title` | [`getter_name`] | `getTitle` |
//! | `result` | [`field_reference`] | `this.result` (when it shadows a local) |

/// Prefix of every generated accessor.
pub const GETTER_PREFIX: &str = "get";

/// Locals declared by the generated `hashCode()`.
pub const HASH_CODE_LOCALS: &[&str] = &["prime", "result", "temp"];

/// Parameter and locals of the generated `equals(Object)`.
pub const EQUALS_LOCALS: &[&str] = &["other", "that"];

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use scroole_core::codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("world"), "World");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Accessor name for a field.
///
/// ```
/// use scroole_core::codegen::naming::getter_name;
///
/// assert_eq!(getter_name("title"), "getTitle");
/// ```
pub fn getter_name(field: &str) -> String {
    format!("{GETTER_PREFIX}{}", capitalize(field))
}

/// How a method body refers to a field, given the method's own locals.
pub fn field_reference(field: &str, locals: &[&str]) -> String {
    if locals.contains(&field) {
        format!("this.{field}")
    } else {
        field.to_string()
    }
}
