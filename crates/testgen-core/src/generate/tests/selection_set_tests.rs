use crate::generate::build_selection_set;
use crate::test_helpers::field;
use crate::test_helpers::list;
use crate::test_helpers::named;
use crate::test_helpers::non_null;
use crate::test_helpers::object;
use crate::test_helpers::scalar;
use crate::test_helpers::schema_from_json;
use crate::test_helpers::schema_json;
use crate::test_helpers::user_schema;

#[test]
fn scalar_fields_become_leaf_lines() {
    let schema = user_schema();
    assert_eq!(build_selection_set("User", &schema, 4), "    id\n    name");
}

#[test]
fn indentation_grows_with_the_starting_level() {
    let schema = user_schema();
    assert_eq!(build_selection_set("User", &schema, 2), "  id\n  name");
}

#[test]
fn nested_object_fields_get_braced_sub_selections() {
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object("Query", vec![field("posts", named("OBJECT", "Post"))]),
            object(
                "Post",
                vec![
                    field("title", named("SCALAR", "String")),
                    field("author", named("OBJECT", "User")),
                ],
            ),
            object(
                "User",
                vec![
                    field("id", named("SCALAR", "ID")),
                    field("name", named("SCALAR", "String")),
                ],
            ),
            scalar("ID"),
            scalar("String"),
        ],
    ));

    assert_eq!(
        build_selection_set("Post", &schema, 4),
        "    title\n    author {\n      id\n      name\n    }",
    );
}

#[test]
fn objects_behind_any_wrapper_nesting_are_expanded() {
    // LIST -> OBJECT, NON_NULL -> OBJECT, and the doubly-wrapped
    // NON_NULL -> LIST -> NON_NULL -> OBJECT chain all get sub-selections.
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object(
                "Feed",
                vec![
                    field("latest", non_null(named("OBJECT", "User"))),
                    field("all", list(named("OBJECT", "User"))),
                    field(
                        "pages",
                        non_null(list(non_null(named("OBJECT", "User")))),
                    ),
                ],
            ),
            object("User", vec![field("id", named("SCALAR", "ID"))]),
            object("Query", vec![field("feed", named("OBJECT", "Feed"))]),
            scalar("ID"),
        ],
    ));

    assert_eq!(
        build_selection_set("Feed", &schema, 4),
        "    latest {\n      id\n    }\n\
         \x20   all {\n      id\n    }\n\
         \x20   pages {\n      id\n    }",
    );
}

#[test]
fn unknown_and_non_object_types_yield_an_empty_selection() {
    let schema = user_schema();
    assert_eq!(build_selection_set("Nonexistent", &schema, 4), "");
    assert_eq!(build_selection_set("ID", &schema, 4), "");
}

#[test]
fn self_referential_type_terminates() {
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object(
                "Employee",
                vec![
                    field("id", named("SCALAR", "ID")),
                    field("manager", named("OBJECT", "Employee")),
                ],
            ),
            object("Query", vec![field("me", named("OBJECT", "Employee"))]),
            scalar("ID"),
        ],
    ));

    // The cyclic `manager` field is dropped rather than recursed forever.
    assert_eq!(build_selection_set("Employee", &schema, 4), "    id");
}

#[test]
fn mutually_recursive_types_terminate() {
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object("Author", vec![field("book", named("OBJECT", "Book"))]),
            object(
                "Book",
                vec![
                    field("author", named("OBJECT", "Author")),
                    field("title", named("SCALAR", "String")),
                ],
            ),
            object("Query", vec![field("author", named("OBJECT", "Author"))]),
            scalar("String"),
        ],
    ));

    assert_eq!(
        build_selection_set("Author", &schema, 4),
        "    book {\n      title\n    }",
    );
}

#[test]
fn revisiting_a_type_on_a_sibling_branch_is_allowed() {
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object(
                "Pair",
                vec![
                    field("left", named("OBJECT", "User")),
                    field("right", named("OBJECT", "User")),
                ],
            ),
            object("User", vec![field("id", named("SCALAR", "ID"))]),
            object("Query", vec![field("pair", named("OBJECT", "Pair"))]),
            scalar("ID"),
        ],
    ));

    assert_eq!(
        build_selection_set("Pair", &schema, 4),
        "    left {\n      id\n    }\n    right {\n      id\n    }",
    );
}

#[test]
fn fields_of_an_empty_object_type_are_dropped() {
    // An empty `{ }` block would not be valid GraphQL, so the degenerate
    // field disappears from the selection entirely.
    let schema = schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object(
                "Wrapper",
                vec![
                    field("nothing", named("OBJECT", "Empty")),
                    field("id", named("SCALAR", "ID")),
                ],
            ),
            object("Empty", vec![]),
            object("Query", vec![field("wrapper", named("OBJECT", "Wrapper"))]),
            scalar("ID"),
        ],
    ));

    assert_eq!(build_selection_set("Wrapper", &schema, 4), "    id");
}
