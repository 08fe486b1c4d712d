//! Java class generation from class descriptions.

use super::imports::ImportSet;
use super::naming::{EQUALS_LOCALS, HASH_CODE_LOCALS, field_reference, getter_name};
use crate::contract::{
    EqualityStrategy, FALSE_HASH, HASH_PRIME, HASH_SEED, HashStrategy, TRUE_HASH,
};
use crate::error::ScrooleResult;
use crate::model::ClassDescription;
use crate::types::{TypeCategory, classify};

const INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";
const CONDITIONAL_INDENT: &str = "        ";
const CONJUNCTION: &str = "\n            && ";

/// A field with its classified and rendered type.
struct Member<'a> {
    name: &'a str,
    docs: &'a str,
    category: TypeCategory,
    java_type: String,
}

/// Generate the Java source of an immutable value class.
///
/// Either returns the complete compilation unit or fails without output.
pub fn generate_java(class: &ClassDescription) -> ScrooleResult<String> {
    let categories = class
        .fields
        .iter()
        .map(|field| classify(&field.type_descriptor))
        .collect::<ScrooleResult<Vec<_>>>()?;

    let mut imports = ImportSet::new(&class.package_name, &class.simple_name);
    let names = LibraryNames::new(class, &categories, &mut imports);
    for category in &categories {
        imports.collect(category);
    }

    let members: Vec<Member<'_>> = class
        .fields
        .iter()
        .zip(categories)
        .map(|(field, category)| Member {
            name: &field.name,
            docs: &field.documentation,
            java_type: imports.render(&category),
            category,
        })
        .collect();

    let mut code = String::new();

    // Package declaration
    if !class.package_name.is_empty() {
        code.push_str(&format!("package {};\n\n", class.package_name));
    }

    // Imports
    let import_lines = imports.imports();
    if !import_lines.is_empty() {
        for import in &import_lines {
            code.push_str(&format!("import {import};\n"));
        }
        code.push('\n');
    }

    push_javadoc(&mut code, &class.documentation, "");
    code.push_str(&format!("public class {} {{\n", class.simple_name));

    let mut blocks: Vec<String> = Vec::new();
    blocks.extend(members.iter().map(field_block));
    blocks.push(constructor_block(&class.simple_name, &members));
    blocks.extend(members.iter().map(getter_block));
    blocks.push(hash_code_block(&members, &names));
    blocks.push(equals_block(&class.simple_name, &members, &names));
    if members.iter().any(|m| m.category.is_reference()) {
        blocks.push(null_safe_equals_block(&names));
    }

    code.push_str(&blocks.join("\n"));
    code.push_str("}\n");

    Ok(code)
}

/// How the generated methods spell the library classes they use.
///
/// The class's own simple name shadows `java.lang.X` everywhere. A field
/// obscures a class or package of the same name inside method bodies, so a
/// field named `java` rules out every `java.`-qualified call there.
struct LibraryNames {
    object: String,
    override_annotation: String,
    hash_float: String,
    hash_double: String,
    equals_float: String,
    equals_double: String,
    arrays: String,
}

impl LibraryNames {
    fn new(class: &ClassDescription, categories: &[TypeCategory], imports: &mut ImportSet) -> Self {
        let own_name = class.simple_name.as_str();
        let is_field = |name: &str| class.fields.iter().any(|field| field.name == name);
        let java_obscured = is_field("java");

        let type_name = |simple: &str| {
            if simple == own_name {
                format!("java.lang.{simple}")
            } else {
                simple.to_string()
            }
        };
        let expression_name = |simple: &str, qualified_by_default: bool| {
            let simple_visible = simple != own_name && !is_field(simple);
            if simple_visible && (java_obscured || !qualified_by_default) {
                simple.to_string()
            } else {
                format!("java.lang.{simple}")
            }
        };

        let uses_arrays = categories.iter().any(|category| category.element().is_some());
        let arrays = if java_obscured
            && uses_arrays
            && !is_field("Arrays")
            && imports.claim("java.util", "Arrays")
        {
            "Arrays".to_string()
        } else {
            "java.util.Arrays".to_string()
        };

        Self {
            object: type_name("Object"),
            override_annotation: format!("@{}", type_name("Override")),
            hash_float: expression_name("Float", false),
            hash_double: expression_name("Double", false),
            equals_float: expression_name("Float", true),
            equals_double: expression_name("Double", true),
            arrays,
        }
    }
}

/// Append a Javadoc block. Empty documentation produces nothing.
fn push_javadoc(code: &mut String, docs: &str, indent: &str) {
    if docs.is_empty() {
        return;
    }

    code.push_str(&format!("{indent}/**\n"));
    for line in docs.split('\n') {
        if line.is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", line.replace("*/", "*&#47;")));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}

fn field_block(member: &Member<'_>) -> String {
    let mut block = String::new();
    push_javadoc(&mut block, member.docs, INDENT);
    block.push_str(&format!(
        "{INDENT}private final {} {};\n",
        member.java_type, member.name
    ));
    block
}

fn constructor_block(simple_name: &str, members: &[Member<'_>]) -> String {
    let parameters: Vec<String> = members
        .iter()
        .map(|m| format!("{} {}", m.java_type, m.name))
        .collect();

    let mut block = format!(
        "{INDENT}public {simple_name}({}) {{\n",
        parameters.join(", ")
    );
    for member in members {
        block.push_str(&format!(
            "{BODY_INDENT}this.{} = {};\n",
            member.name, member.name
        ));
    }
    block.push_str(&format!("{INDENT}}}\n"));
    block
}

fn getter_block(member: &Member<'_>) -> String {
    let mut block = String::new();
    push_javadoc(&mut block, member.docs, INDENT);
    block.push_str(&format!(
        "{INDENT}public {} {}() {{\n",
        member.java_type,
        getter_name(member.name)
    ));
    block.push_str(&format!("{BODY_INDENT}return {};\n", member.name));
    block.push_str(&format!("{INDENT}}}\n"));
    block
}

fn hash_code_block(members: &[Member<'_>], names: &LibraryNames) -> String {
    let mut block = format!(
        "{INDENT}{}\n{INDENT}public int hashCode() {{\n",
        names.override_annotation
    );
    block.push_str(&format!("{BODY_INDENT}int prime = {HASH_PRIME};\n"));
    block.push_str(&format!("{BODY_INDENT}int result = {HASH_SEED};\n"));

    let mut temp_declared = false;
    for member in members {
        let field = field_reference(member.name, HASH_CODE_LOCALS);
        let contribution = match HashStrategy::for_type(&member.category) {
            HashStrategy::Value => field,
            HashStrategy::BooleanConstants => format!("({field} ? {TRUE_HASH} : {FALSE_HASH})"),
            HashStrategy::LongFold => format!("(int) ({field} ^ ({field} >>> 32))"),
            HashStrategy::FloatBits => format!("{}.floatToIntBits({field})", names.hash_float),
            HashStrategy::DoubleBitsFold => {
                let declaration = if temp_declared { "" } else { "long " };
                temp_declared = true;
                block.push_str(&format!(
                    "{BODY_INDENT}{declaration}temp = {}.doubleToLongBits({field});\n",
                    names.hash_double
                ));
                "(int) (temp ^ (temp >>> 32))".to_string()
            }
            HashStrategy::ArrayContents => format!("{}.hashCode({field})", names.arrays),
            HashStrategy::DeepArrayContents => format!("{}.deepHashCode({field})", names.arrays),
            HashStrategy::NullSafeReference => {
                format!("({field} == null ? 0 : {field}.hashCode())")
            }
        };
        block.push_str(&format!(
            "{BODY_INDENT}result = prime * result + {contribution};\n"
        ));
    }

    block.push_str(&format!("{BODY_INDENT}return result;\n"));
    block.push_str(&format!("{INDENT}}}\n"));
    block
}

fn equals_block(simple_name: &str, members: &[Member<'_>], names: &LibraryNames) -> String {
    let mut block = format!(
        "{INDENT}{}\n{INDENT}public boolean equals({} other) {{\n",
        names.override_annotation, names.object
    );
    block.push_str(&format!("{BODY_INDENT}if (other == this)\n"));
    block.push_str(&format!("{CONDITIONAL_INDENT}return true;\n"));
    block.push_str(&format!(
        "{BODY_INDENT}else if (other == null || getClass() != other.getClass())\n"
    ));
    block.push_str(&format!("{CONDITIONAL_INDENT}return false;\n"));

    if members.is_empty() {
        block.push_str(&format!("{BODY_INDENT}return true;\n"));
    } else {
        block.push_str(&format!(
            "{BODY_INDENT}{simple_name} that = ({simple_name}) other;\n"
        ));
        let comparisons: Vec<String> = members.iter().map(|m| comparison(m, names)).collect();
        block.push_str(&format!(
            "{BODY_INDENT}return {};\n",
            comparisons.join(CONJUNCTION)
        ));
    }

    block.push_str(&format!("{INDENT}}}\n"));
    block
}

fn comparison(member: &Member<'_>, names: &LibraryNames) -> String {
    let field = field_reference(member.name, EQUALS_LOCALS);
    let name = member.name;
    match EqualityStrategy::for_type(&member.category) {
        EqualityStrategy::Value => format!("{field} == that.{name}"),
        EqualityStrategy::FloatBits => {
            let float = &names.equals_float;
            format!("{float}.floatToIntBits({field}) == {float}.floatToIntBits(that.{name})")
        }
        EqualityStrategy::DoubleBits => {
            let double = &names.equals_double;
            format!("{double}.doubleToLongBits({field}) == {double}.doubleToLongBits(that.{name})")
        }
        EqualityStrategy::ArrayContents => format!("{}.equals({field}, that.{name})", names.arrays),
        EqualityStrategy::DeepArrayContents => {
            format!("{}.deepEquals({field}, that.{name})", names.arrays)
        }
        EqualityStrategy::NullSafeReference => format!("equals({field}, that.{name})"),
    }
}

fn null_safe_equals_block(names: &LibraryNames) -> String {
    let object = &names.object;
    let mut block = format!(
        "{INDENT}private boolean equals({object} left, {object} right) {{\n"
    );
    block.push_str(&format!("{BODY_INDENT}if (left == null)\n"));
    block.push_str(&format!("{CONDITIONAL_INDENT}return right == null;\n"));
    block.push_str(&format!("{BODY_INDENT}else\n"));
    block.push_str(&format!("{CONDITIONAL_INDENT}return left.equals(right);\n"));
    block.push_str(&format!("{INDENT}}}\n"));
    block
}
