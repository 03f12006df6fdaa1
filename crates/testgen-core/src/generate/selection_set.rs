use crate::introspection::FieldDef;
use crate::introspection::Schema;
use std::collections::HashSet;

/// Spaces added per nesting level, purely for readability of the generated
/// document.
const INDENT_STEP: usize = 2;

/// Build the selection-set block for the named OBJECT type.
///
/// Fields are expanded in schema-declared order: a field whose unwrapped
/// type (through any nesting of LIST/NON_NULL wrappers) is an OBJECT gets a
/// recursively-built sub-selection in braces, anything else is selected as
/// a bare leaf. Lines are indented by `indent` spaces and joined with
/// newlines; the caller supplies the enclosing braces.
///
/// Returns an empty string when `type_name` is unknown, is not an OBJECT
/// type (interfaces and unions are not expanded), or has no fields.
///
/// The schema's type graph may be cyclic, so each recursive descent carries
/// a set of the type names currently being expanded. A field whose object
/// type is already on the descent path is dropped from the selection: it
/// cannot be expanded without recursing forever, and neither `field { }`
/// nor a bare `field` would be valid GraphQL for an object-typed field.
pub fn build_selection_set(type_name: &str, schema: &Schema, indent: usize) -> String {
    let mut expanding = HashSet::new();
    expand_type(type_name, schema, indent, &mut expanding)
}

fn expand_type(
    type_name: &str,
    schema: &Schema,
    indent: usize,
    expanding: &mut HashSet<String>,
) -> String {
    let Some(type_def) = schema.object_type(type_name) else {
        return String::new();
    };
    if !expanding.insert(type_name.to_string()) {
        return String::new();
    }

    let indentation = " ".repeat(indent);
    let mut selections: Vec<String> = Vec::new();
    for field in type_def.field_defs() {
        match object_target(field, schema) {
            Some(target_name) => {
                let sub_selection =
                    expand_type(target_name, schema, indent + INDENT_STEP, expanding);
                if sub_selection.is_empty() {
                    // Cycle, or an object type with no fields.
                    continue;
                }
                selections.push(format!(
                    "{indentation}{name} {{\n{sub_selection}\n{indentation}}}",
                    name = field.name,
                ));
            },
            None => selections.push(format!("{indentation}{}", field.name)),
        }
    }

    expanding.remove(type_name);
    selections.join("\n")
}

/// The name of the OBJECT type this field resolves to, if it resolves to
/// one through any wrapper nesting.
fn object_target<'schema>(
    field: &'schema FieldDef,
    schema: &Schema,
) -> Option<&'schema str> {
    let name = field.type_ref.unwrapped_name()?;
    schema.object_type(name).map(|_| name)
}
