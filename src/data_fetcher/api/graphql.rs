//! Authenticated GraphQL client

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::auth::fetch_access_token;
use super::fetch_utils::{parse_json, send, status_error};
use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::data_fetcher::models::{GraphQlRequest, GraphQlResponse};
use crate::error::AppError;

/// A GraphQL client holding an `Authorization` credential.
///
/// The credential is opaque to callers and never logged.
#[derive(Clone)]
pub struct GraphQlClient {
    http: Client,
    endpoint: String,
    authorization: String,
}

impl std::fmt::Debug for GraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GraphQlClient {
    pub fn new(http: Client, endpoint: impl Into<String>, authorization: impl Into<String>) -> Self {
        GraphQlClient {
            http,
            endpoint: endpoint.into(),
            authorization: authorization.into(),
        }
    }

    /// Builds an HTTP client from `config`, exchanges the client credentials
    /// for a token and returns a client ready for queries.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let authorization = fetch_access_token(
            &http,
            &config.token_url,
            &config.client_id,
            &config.client_secret,
        )
        .await?;
        Ok(GraphQlClient::new(http, &config.api_endpoint, authorization))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs `query` with `variables` and decodes the `data` member.
    ///
    /// A non-empty `errors` array fails the call even when partial data is present.
    #[instrument(skip(self, query), fields(endpoint = %self.endpoint))]
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, AppError> {
        debug!("Variables: {variables}");
        let body = GraphQlRequest { query, variables };
        let request = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .json(&body);

        let (status, text) = send(request, &self.endpoint).await?;
        if !status.is_success() {
            error!("HTTP {} (URL: {})", status, self.endpoint);
            return Err(status_error(status, &self.endpoint));
        }

        let response: GraphQlResponse<T> = parse_json(&text, &self.endpoint)?;
        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!("GraphQL errors: {message}");
            return Err(AppError::graphql(message, &self.endpoint));
        }

        response
            .data
            .ok_or_else(|| AppError::api_no_data("GraphQL response has no data", &self.endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    #[derive(Debug, Deserialize)]
    struct RateLimit {
        #[serde(rename = "rateLimitData")]
        rate_limit_data: Value,
    }

    fn client_for(server: &MockServer) -> GraphQlClient {
        GraphQlClient::new(
            create_test_http_client(),
            format!("{}/api/v2/client", server.uri()),
            "Bearer abc123",
        )
    }

    #[tokio::test]
    async fn test_query_sends_credential_and_variables() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/client"))
            .and(header("authorization", "Bearer abc123"))
            .and(body_partial_json(json!({"variables": {"page": 2}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"rateLimitData": {"limitPerHour": 3600}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let data: RateLimit = client
            .query("query { rateLimitData { limitPerHour } }", json!({"page": 2}))
            .await
            .unwrap();
        assert_eq!(data.rate_limit_data["limitPerHour"], 3600);
    }

    #[tokio::test]
    async fn test_query_surfaces_graphql_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "Unknown zone"}, {"message": "Second"}]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<RateLimit, _> = client.query("query { x }", json!({})).await;
        match result {
            Err(AppError::GraphQl { message, .. }) => assert_eq!(message, "Unknown zone; Second"),
            other => panic!("expected GraphQL error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_missing_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<RateLimit, _> = client.query("query { x }", json!({})).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_query_unauthorized_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/client"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result: Result<RateLimit, _> = client.query("query { x }", json!({})).await;
        assert!(matches!(
            result,
            Err(AppError::ApiClientError { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_authenticates_first() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "Bearer",
                "access_token": "fresh"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            api_endpoint: format!("{}/api/v2/client", mock_server.uri()),
            token_url: format!("{}/oauth/token", mock_server.uri()),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            ..Config::default()
        };

        let client = GraphQlClient::connect(&config).await.unwrap();
        assert_eq!(client.endpoint(), config.api_endpoint);
        assert!(!format!("{client:?}").contains("fresh"));
    }
}
