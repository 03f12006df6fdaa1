use crate::introspection::TransportError;

/// A response from a [`GraphqlTransport`]: the HTTP status code and the
/// decoded JSON body.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// The wire half of schema fetching: POST a JSON body to a GraphQL endpoint
/// path and hand back the JSON response.
///
/// Production code uses [`HttpTransport`]; tests substitute an in-memory
/// fake. Implementations may impose their own timeout or cancellation
/// behavior; the fetcher itself defines none.
#[allow(async_fn_in_trait)]
pub trait GraphqlTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;
}

/// A [`GraphqlTransport`] bound to a live HTTP(S) server.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: url::Url,
    client: reqwest::Client,
}
impl HttpTransport {
    pub fn new(base_url: url::Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}
impl GraphqlTransport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let url = self.base_url.join(endpoint).map_err(|source| {
            TransportError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                source,
            }
        })?;

        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        // Non-2xx responses aren't required to carry JSON; the fetcher
        // checks the status before it ever looks at the body.
        let body = response
            .json()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok(TransportResponse { status, body })
    }
}
