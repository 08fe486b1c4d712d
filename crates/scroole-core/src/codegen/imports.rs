//! Import collection and shortest-name rendering for Java types.
//!
//! Reference names are split best-guess style: lowercase segments form the
//! package, the first capitalized segment is the top-level class, and anything
//! after it names nested classes.
//!
//! | Descriptor | Rendered | Import |
//! |------------|----------|--------|
//! | `int[]` | `int[]` | - |
//! | `java.util.List<java.lang.String>` | `List<String>` | `java.util.List` |
//! | `java.util.Map.Entry<K, V>` | `Map.Entry<K, V>` | `java.util.Map` |
//! | `com.a.Item` and `com.b.Item` | `Item`, `com.b.Item` | `com.a.Item` |
//!
//! A simple name belongs to whichever class claims it first. The generated
//! class claims its own name, and the `java.lang` classes the generated
//! methods use unqualified are claimed up front.

use crate::types::TypeCategory;
use std::collections::{BTreeMap, BTreeSet};

const JAVA_LANG: &str = "java.lang";

/// `java.lang` classes referenced unqualified by generated methods.
const RESERVED_JAVA_LANG: &[&str] = &["Object", "Override", "Float", "Double"];

/// A class name split into package, top-level class, and nested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassName<'a> {
    /// Package, empty for unqualified names.
    pub package: &'a str,
    /// The outermost class.
    pub top_level: &'a str,
    /// Nested class path below `top_level`, empty if none.
    pub nested: &'a str,
}

impl<'a> ClassName<'a> {
    /// Split a reference name. Returns `None` when no segment is capitalized
    /// or some segment is not a Java identifier.
    pub fn best_guess(name: &'a str) -> Option<Self> {
        if !name.split('.').all(is_java_identifier) {
            return None;
        }

        let mut offset = 0;
        for segment in name.split('.') {
            if segment.chars().next().is_some_and(char::is_uppercase) {
                let package = if offset == 0 { "" } else { &name[..offset - 1] };
                let rest = &name[offset..];
                let (top_level, nested) = rest.split_once('.').unwrap_or((rest, ""));
                return Some(Self {
                    package,
                    top_level,
                    nested,
                });
            }
            offset += segment.len() + 1;
        }
        None
    }

    fn short(&self) -> String {
        if self.nested.is_empty() {
            self.top_level.to_string()
        } else {
            format!("{}.{}", self.top_level, self.nested)
        }
    }
}

fn is_java_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Simple-name claims for one generated compilation unit.
#[derive(Debug, Clone)]
pub struct ImportSet {
    own_package: String,
    /// Top-level simple name -> package of the class that owns it.
    claims: BTreeMap<String, String>,
}

impl ImportSet {
    /// Start a set for a class `simple_name` in `package`.
    pub fn new(package: &str, simple_name: &str) -> Self {
        let mut claims = BTreeMap::new();
        claims.insert(simple_name.to_string(), package.to_string());
        for reserved in RESERVED_JAVA_LANG {
            claims
                .entry((*reserved).to_string())
                .or_insert_with(|| JAVA_LANG.to_string());
        }

        Self {
            own_package: package.to_string(),
            claims,
        }
    }

    /// Claim `simple_name` for `package` ahead of the field types. Returns
    /// whether `package` owns the name afterwards.
    pub fn claim(&mut self, package: &str, simple_name: &str) -> bool {
        let owner = self
            .claims
            .entry(simple_name.to_string())
            .or_insert_with(|| package.to_string());
        owner.as_str() == package
    }

    /// Claim every reference name used by `ty`, depth first.
    pub fn collect(&mut self, ty: &TypeCategory) {
        match ty {
            TypeCategory::Scalar(_) => {}
            TypeCategory::Array(element) => self.collect(element),
            TypeCategory::Reference(reference) => {
                if let Some(class) = ClassName::best_guess(&reference.name) {
                    self.claims
                        .entry(class.top_level.to_string())
                        .or_insert_with(|| class.package.to_string());
                }
                for argument in &reference.arguments {
                    self.collect(argument);
                }
            }
        }
    }

    /// Render a type in its shortest unambiguous form.
    pub fn render(&self, ty: &TypeCategory) -> String {
        match ty {
            TypeCategory::Scalar(kind) => kind.keyword().to_string(),
            TypeCategory::Array(element) => format!("{}[]", self.render(element)),
            TypeCategory::Reference(reference) => {
                let mut rendered = self.render_name(&reference.name);
                if reference.is_parameterized() {
                    let arguments: Vec<String> =
                        reference.arguments.iter().map(|a| self.render(a)).collect();
                    rendered.push('<');
                    rendered.push_str(&arguments.join(", "));
                    rendered.push('>');
                }
                rendered
            }
        }
    }

    fn render_name(&self, name: &str) -> String {
        match ClassName::best_guess(name) {
            Some(class) if self.owns(&class) => class.short(),
            _ => name.to_string(),
        }
    }

    fn owns(&self, class: &ClassName<'_>) -> bool {
        self.claims
            .get(class.top_level)
            .is_some_and(|package| package == class.package)
    }

    /// Qualified names to import, sorted.
    pub fn imports(&self) -> BTreeSet<String> {
        self.claims
            .iter()
            .filter(|(_, package)| {
                !package.is_empty() && *package != JAVA_LANG && **package != self.own_package
            })
            .map(|(simple_name, package)| format!("{package}.{simple_name}"))
            .collect()
    }
}
