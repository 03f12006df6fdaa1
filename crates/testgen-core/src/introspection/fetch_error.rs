use thiserror::Error;

/// Errors surfaced by a [`GraphqlTransport`](crate::introspection::GraphqlTransport).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint path `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("introspection request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors fetching or decoding the introspected schema. All of these are
/// fatal for a generation run; there is no partial output worth keeping.
#[derive(Debug, Error)]
pub enum SchemaFetchError {
    #[error("failed to fetch schema: status code {status}")]
    BadStatus { status: u16 },

    #[error("schema introspection errors: {errors}")]
    Introspection { errors: serde_json::Value },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed introspection response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("introspection response carried no `data.__schema` payload")]
    MissingData,

    #[error("introspected schema declares no query root type")]
    MissingQueryType,
}
