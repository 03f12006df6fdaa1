use crate::generate::ArgumentValueProvider;
use crate::generate::OperationCase;
use crate::generate::OperationKind;
use crate::generate::build_selection_set;
use crate::introspection::FieldDef;
use crate::introspection::Schema;
use indexmap::IndexMap;

/// Indentation of the top-level selection block inside a generated
/// document: two levels below the opening brace.
const SELECTION_INDENT: usize = 4;

/// Synthesize one [`OperationCase`] per field on the schema's query and
/// mutation root types.
///
/// Cases appear in schema-declared field order, queries before mutations. A
/// schema without a mutation root type (or a root type with no fields)
/// simply contributes no cases; it is not an error at this layer.
pub fn synthesize_operations(
    schema: &Schema,
    values: &dyn ArgumentValueProvider,
) -> Vec<OperationCase> {
    let roots = [
        (OperationKind::Query, Some(schema.query_type_name())),
        (OperationKind::Mutation, schema.mutation_type_name()),
    ];

    let mut cases = Vec::new();
    for (kind, root_name) in roots {
        let Some(root_name) = root_name else {
            continue;
        };
        let Some(root_type) = schema.object_type(root_name) else {
            continue;
        };
        for field in root_type.field_defs() {
            cases.push(synthesize_field(kind, field, schema, values));
        }
    }
    cases
}

fn synthesize_field(
    kind: OperationKind,
    field: &FieldDef,
    schema: &Schema,
    values: &dyn ArgumentValueProvider,
) -> OperationCase {
    let mut variables = IndexMap::new();
    let mut declarations: Vec<String> = Vec::new();
    let mut bindings: Vec<String> = Vec::new();
    for arg in &field.args {
        // A malformed argument type chain can't be declared with correct
        // GraphQL syntax; drop the argument rather than emit garbage.
        let Some(shape) = arg.type_ref.shape() else {
            continue;
        };
        variables.insert(
            arg.name.clone(),
            values.value_for(shape.innermost_name(), &arg.name),
        );
        declarations.push(format!("${}: {shape}", arg.name));
        bindings.push(format!("{name}: ${name}", name = arg.name));
    }

    let selection_set = field
        .type_ref
        .unwrapped_name()
        .map(|name| build_selection_set(name, schema, SELECTION_INDENT))
        .unwrap_or_default();

    let name = &field.name;
    let declarations = declarations.join(", ");
    let bindings = bindings.join(", ");

    // Four syntactic variants: with/without a variable list, with/without a
    // sub-selection on the return type.
    let query_text = match (!declarations.is_empty(), !selection_set.is_empty()) {
        (true, true) => format!(
            "{kind} {name}({declarations}) {{\n  {name}({bindings}) {{\n{selection_set}\n  }}\n}}"
        ),
        (true, false) => {
            format!("{kind} {name}({declarations}) {{\n  {name}({bindings})\n}}")
        },
        (false, true) => {
            format!("{kind} {name} {{\n  {name} {{\n{selection_set}\n  }}\n}}")
        },
        (false, false) => format!("{kind} {name} {{\n  {name}\n}}"),
    };

    OperationCase {
        name: field.name.clone(),
        kind,
        query_text,
        variables,
        expected_output: None,
    }
}
