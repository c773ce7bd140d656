//! Upwork API facade.
//!
//! Entry object for the authorize/token/request lifecycle. Routers take a
//! reference to it and never touch configuration or HTTP details directly.

use crate::client::{Client, UpworkClient};
use crate::error::UpworkResult;
use crate::types::{ApiResponse, EntryPoint, Params, TokenPair, UpworkConfig};

/// Upwork API facade.
///
/// # Example
///
/// ```no_run
/// use integrations_upwork::{upwork_config, Graphql, Params, UpworkApi};
///
/// # async fn run() -> integrations_upwork::UpworkResult<()> {
/// let config = upwork_config()
///     .client_id("client-id")
///     .client_secret("client-secret")
///     .redirect_uri("https://example.com/callback")
///     .access_token("known-access-token")
///     .refresh_token("known-refresh-token")
///     .expires_at_str("2030-01-01T00:00:00Z")
///     .build()?;
///
/// let api = UpworkApi::new(config)?;
/// let pair = api.set_access_token().await?;
/// // persist `pair` if it changed
///
/// let graphql = Graphql::new(&api);
/// let response = graphql
///     .execute(Params::new().with("query", "query { user { id } }"))
///     .await?;
/// println!("{} {}", response.status, response.body);
/// # Ok(())
/// # }
/// ```
pub struct UpworkApi<C: UpworkClient = Client> {
    client: C,
}

impl UpworkApi<Client> {
    /// Create the facade over the default client.
    pub fn new(config: UpworkConfig) -> UpworkResult<Self> {
        Ok(Self {
            client: Client::new(config)?,
        })
    }
}

impl<C: UpworkClient> UpworkApi<C> {
    /// Create the facade over any client implementation.
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Authorization URL the user must visit.
    pub fn authorization_url(&self) -> UpworkResult<String> {
        self.client.authorization_url()
    }

    /// Exchange an authorization code for a token pair.
    ///
    /// The pair is returned, not adopted; pass it to
    /// [`set_new_access_token_pair`](Self::set_new_access_token_pair).
    pub async fn get_token(&self, code: &str) -> UpworkResult<TokenPair> {
        self.client.get_token(code).await
    }

    /// Use the known token pair from the configuration, refreshing it when
    /// expired. Compare the returned access token with the stored one to
    /// detect a refresh.
    pub async fn set_access_token(&self) -> UpworkResult<TokenPair> {
        self.client.set_access_token().await
    }

    pub fn set_new_access_token_pair(&self, pair: TokenPair) -> TokenPair {
        self.client.set_new_access_token_pair(pair)
    }

    /// Set or clear the `X-Upwork-API-TenantId` header for GraphQL calls.
    pub fn set_org_uid_header(&self, tenant_id: Option<String>) {
        self.client.set_org_uid_header(tenant_id);
    }

    pub fn set_entry_point(&self, entry_point: EntryPoint) {
        self.client.set_entry_point(entry_point);
    }

    pub async fn get(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.client.get(path, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.client.post(path, params).await
    }

    pub async fn put(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.client.put(path, params).await
    }

    pub async fn delete(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.client.delete(path, params).await
    }

    /// Execute a GraphQL request. `params` carries `query` and optionally
    /// `variables`; the selected entry point does not matter.
    pub async fn execute(&self, params: Params) -> UpworkResult<ApiResponse> {
        self.client.execute_graphql(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockUpworkClient;
    use crate::HttpMethod;

    #[tokio::test]
    async fn test_facade_delegates_to_client() {
        let mock = MockUpworkClient::new();
        mock.on_get("auth/v1/info", ApiResponse::from_raw(200, r#"{"a":1}"#));
        let api = UpworkApi::with_client(mock);

        api.set_org_uid_header(Some("org".to_string()));
        api.set_entry_point(EntryPoint::Api);
        let response = api.get("auth/v1/info", Params::new()).await.unwrap();

        assert_eq!(response.body["a"], 1);
        assert_eq!(api.client().tenant_id().as_deref(), Some("org"));
        assert_eq!(api.client().requests()[0].method, HttpMethod::Get);
        assert_eq!(
            api.authorization_url().unwrap(),
            "https://mock.example.com/authorize"
        );
    }

    #[tokio::test]
    async fn test_execute_goes_to_graphql() {
        let mock = MockUpworkClient::new();
        mock.on_post("", ApiResponse::from_raw(200, r#"{"data":{}}"#));
        let api = UpworkApi::with_client(mock);

        api.execute(Params::new().with("query", "query { user { id } }"))
            .await
            .unwrap();

        let request = &api.client().requests()[0];
        assert_eq!(request.entry_point, Some(EntryPoint::Graphql));
        assert_eq!(api.client().entry_point(), None);
    }

    #[test]
    fn test_new_with_default_client() {
        let config = crate::upwork_config()
            .client_id("id")
            .client_secret("secret")
            .redirect_uri("https://example.com/cb")
            .build()
            .unwrap();
        let api = UpworkApi::new(config).unwrap();
        assert!(api.client().config().access_token.is_none());
    }
}
