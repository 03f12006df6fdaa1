//! Builders for introspection-payload JSON and an in-memory transport, used
//! across the crate's test modules.

use crate::introspection::GraphqlTransport;
use crate::introspection::Schema;
use crate::introspection::TransportError;
use crate::introspection::TransportResponse;
use serde_json::Value;
use serde_json::json;

/// A transport that replays a canned response, never touching the network.
pub(crate) struct FakeTransport {
    pub(crate) status: u16,
    pub(crate) body: Value,
}
impl GraphqlTransport for FakeTransport {
    async fn post_json(
        &self,
        _endpoint: &str,
        _body: &Value,
    ) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub(crate) fn schema_from_json(schema_json: Value) -> Schema {
    Schema::from_schema_json(schema_json).expect("valid __schema payload")
}

pub(crate) fn schema_json(query: &str, mutation: Option<&str>, types: Vec<Value>) -> Value {
    json!({
        "queryType": { "name": query },
        "mutationType": mutation.map(|name| json!({ "name": name })),
        "types": types,
    })
}

pub(crate) fn named(kind: &str, name: &str) -> Value {
    json!({ "kind": kind, "name": name, "ofType": null })
}

pub(crate) fn non_null(inner: Value) -> Value {
    json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
}

pub(crate) fn list(inner: Value) -> Value {
    json!({ "kind": "LIST", "name": null, "ofType": inner })
}

pub(crate) fn field(name: &str, type_ref: Value) -> Value {
    field_with_args(name, vec![], type_ref)
}

pub(crate) fn field_with_args(name: &str, args: Vec<Value>, type_ref: Value) -> Value {
    json!({
        "name": name,
        "args": args,
        "type": type_ref,
        "isDeprecated": false,
        "deprecationReason": null,
    })
}

pub(crate) fn arg(name: &str, type_ref: Value) -> Value {
    json!({ "name": name, "type": type_ref, "defaultValue": null })
}

pub(crate) fn object(name: &str, fields: Vec<Value>) -> Value {
    json!({ "kind": "OBJECT", "name": name, "fields": fields })
}

pub(crate) fn scalar(name: &str) -> Value {
    json!({ "kind": "SCALAR", "name": name })
}

/// The `Query { user(id: ID!): User }` / `User { id, name }` schema used by
/// the concrete generation scenarios.
pub(crate) fn user_schema() -> Schema {
    schema_from_json(schema_json(
        "Query",
        None,
        vec![
            object(
                "Query",
                vec![field_with_args(
                    "user",
                    vec![arg("id", non_null(named("SCALAR", "ID")))],
                    named("OBJECT", "User"),
                )],
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
    ))
}
