use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::test_helpers::list;
use crate::test_helpers::named;
use crate::test_helpers::non_null;
use serde_json::json;

fn type_ref(value: serde_json::Value) -> TypeRef {
    serde_json::from_value(value).expect("valid TypeRef json")
}

#[test]
fn kind_tags_use_introspection_spelling() {
    let kind: TypeKind = serde_json::from_value(json!("NON_NULL")).unwrap();
    assert_eq!(kind, TypeKind::NonNull);

    let kind: TypeKind = serde_json::from_value(json!("INPUT_OBJECT")).unwrap();
    assert_eq!(kind, TypeKind::InputObject);

    assert!(TypeKind::List.is_wrapper());
    assert!(TypeKind::NonNull.is_wrapper());
    assert!(!TypeKind::Object.is_wrapper());
}

#[test]
fn named_shape_renders_bare_name() {
    let shape = type_ref(named("SCALAR", "ID")).shape().unwrap();
    assert_eq!(shape.to_string(), "ID");
    assert_eq!(shape.innermost_name(), "ID");
}

#[test]
fn signature_formatting_inverts_the_wrapping_structure() {
    // Every wrapping combination the introspection depth bound allows must
    // format to the matching GraphQL syntax and unwrap back to the same
    // named type.
    let combinations = [
        (non_null(named("SCALAR", "ID")), "ID!"),
        (list(named("OBJECT", "User")), "[User]"),
        (non_null(list(named("OBJECT", "User"))), "[User]!"),
        (list(non_null(named("OBJECT", "User"))), "[User!]"),
        (
            non_null(list(non_null(named("OBJECT", "User")))),
            "[User!]!",
        ),
    ];
    for (ref_json, expected) in combinations {
        let shape = type_ref(ref_json).shape().unwrap();
        assert_eq!(shape.to_string(), expected);
        assert_eq!(
            shape.innermost_name(),
            expected.trim_matches(['[', ']', '!']),
        );
    }
}

#[test]
fn unwrapped_name_strips_all_wrapper_layers() {
    let wrapped = type_ref(non_null(list(non_null(named("ENUM", "Role")))));
    assert_eq!(wrapped.unwrapped_name(), Some("Role"));
}

#[test]
fn wrapper_without_inner_type_is_malformed() {
    let truncated = type_ref(json!({
        "kind": "NON_NULL",
        "name": null,
        "ofType": null,
    }));
    assert!(truncated.shape().is_none());
    assert!(truncated.unwrapped_name().is_none());
}

#[test]
fn named_kind_without_a_name_is_malformed() {
    let nameless = type_ref(json!({
        "kind": "OBJECT",
        "name": null,
        "ofType": null,
    }));
    assert!(nameless.shape().is_none());
}
