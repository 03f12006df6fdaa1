use crate::introspection::GraphqlTransport;
use crate::introspection::Schema;
use crate::introspection::SchemaFetchError;
use crate::introspection::query::INTROSPECTION_QUERY;

/// Fetch the schema of the GraphQL service behind `endpoint` via the
/// standard introspection query.
///
/// This is the pipeline's single network round-trip. Fails on a non-success
/// status code, on a response carrying a top-level `errors` array, and on a
/// payload that doesn't decode into a schema.
pub async fn fetch_schema(
    transport: &impl GraphqlTransport,
    endpoint: &str,
) -> Result<Schema, SchemaFetchError> {
    let request_body = serde_json::json!({ "query": INTROSPECTION_QUERY });
    let response = transport.post_json(endpoint, &request_body).await?;
    log::debug!("Introspection response status: {}", response.status);

    if !(200..300).contains(&response.status) {
        return Err(SchemaFetchError::BadStatus {
            status: response.status,
        });
    }
    if let Some(errors) = response.body.get("errors") {
        return Err(SchemaFetchError::Introspection {
            errors: errors.clone(),
        });
    }

    let schema_json = response
        .body
        .get("data")
        .and_then(|data| data.get("__schema"))
        .cloned()
        .ok_or(SchemaFetchError::MissingData)?;

    Schema::from_schema_json(schema_json)
}
