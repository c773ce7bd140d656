//! Upwork Client
//!
//! Client capability set used by the facade and the routers, and the default
//! client combining the token manager with the request dispatcher.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::{HttpMethod, HttpTransport, ReqwestHttpTransport};
use crate::dispatch::RequestDispatcher;
use crate::error::{ConfigurationError, UpworkError, UpworkResult};
use crate::telemetry::{create_logger, Logger};
use crate::token::{DefaultTokenManager, TokenManager};
use crate::types::{ApiResponse, EntryPoint, GrantType, Params, TokenPair, UpworkConfig};

/// Capabilities every Upwork client provides.
///
/// `Client` is the default implementation; any other implementation can be
/// handed to [`crate::UpworkApi::with_client`].
#[async_trait]
pub trait UpworkClient: Send + Sync {
    /// Authorization URL built from the configured redirect URI and state.
    fn authorization_url(&self) -> UpworkResult<String>;

    /// Request an access/refresh token pair for an authorization code.
    async fn get_token(&self, code: &str) -> UpworkResult<TokenPair>;

    /// Use the token pair held by the configuration, refreshing it if expired.
    async fn set_access_token(&self) -> UpworkResult<TokenPair>;

    /// Adopt a newly obtained token pair.
    fn set_new_access_token_pair(&self, pair: TokenPair) -> TokenPair;

    /// Set or clear the organization header for GraphQL calls.
    fn set_org_uid_header(&self, tenant_id: Option<String>);

    /// Select the entry point for subsequent requests.
    fn set_entry_point(&self, entry_point: EntryPoint);

    /// Send a request through the current entry point.
    async fn send_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> UpworkResult<ApiResponse>;

    /// Post a GraphQL payload to the GraphQL endpoint, whatever entry point
    /// is selected.
    async fn execute_graphql(&self, params: Params) -> UpworkResult<ApiResponse>;

    async fn get(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.send_request(HttpMethod::Get, path, params).await
    }

    async fn post(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.send_request(HttpMethod::Post, path, params).await
    }

    async fn put(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.send_request(HttpMethod::Put, path, params).await
    }

    async fn delete(&self, path: &str, params: Params) -> UpworkResult<ApiResponse> {
        self.send_request(HttpMethod::Delete, path, params).await
    }
}

/// Default Upwork client.
pub struct Client<T: HttpTransport = ReqwestHttpTransport> {
    config: Arc<RwLock<UpworkConfig>>,
    tokens: DefaultTokenManager<T>,
    dispatcher: RequestDispatcher<T>,
}

impl Client<ReqwestHttpTransport> {
    /// Create a client over the default reqwest transport.
    pub fn new(config: UpworkConfig) -> UpworkResult<Self> {
        let transport = ReqwestHttpTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }
}

impl<T: HttpTransport> Client<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: UpworkConfig, transport: Arc<T>) -> Self {
        let logger = create_logger(config.debug);
        Self::with_logger(config, transport, logger)
    }

    /// Create a client with a custom transport and logger.
    pub fn with_logger(config: UpworkConfig, transport: Arc<T>, logger: Arc<dyn Logger>) -> Self {
        let config = Arc::new(RwLock::new(config));
        Self {
            tokens: DefaultTokenManager::new(config.clone(), transport.clone(), logger.clone()),
            dispatcher: RequestDispatcher::new(config.clone(), transport, logger),
            config,
        }
    }

    /// Copy of the current configuration, including refreshed tokens.
    pub fn config(&self) -> UpworkConfig {
        self.config.read().clone()
    }

    pub fn tokens(&self) -> &DefaultTokenManager<T> {
        &self.tokens
    }

    pub fn dispatcher(&self) -> &RequestDispatcher<T> {
        &self.dispatcher
    }

    fn redirect_uri(&self) -> UpworkResult<String> {
        let config = self.config.read();
        match (&config.redirect_uri, config.grant_type) {
            (Some(uri), _) => Ok(uri.clone()),
            (None, GrantType::ClientCredentials) => Ok(String::new()),
            (None, GrantType::AuthorizationCode) => {
                Err(UpworkError::Configuration(ConfigurationError::MissingField {
                    field: "redirect_uri".to_string(),
                }))
            }
        }
    }
}

#[async_trait]
impl<T: HttpTransport> UpworkClient for Client<T> {
    fn authorization_url(&self) -> UpworkResult<String> {
        let redirect_uri = self.redirect_uri()?;
        let state = self.config.read().state.clone();
        self.tokens
            .build_authorization_url(&redirect_uri, state.as_deref())
    }

    async fn get_token(&self, code: &str) -> UpworkResult<TokenPair> {
        let redirect_uri = self.redirect_uri()?;
        self.tokens.exchange_code_for_token(code, &redirect_uri).await
    }

    async fn set_access_token(&self) -> UpworkResult<TokenPair> {
        self.tokens.ensure_fresh_token().await
    }

    fn set_new_access_token_pair(&self, pair: TokenPair) -> TokenPair {
        self.tokens.adopt_token_pair(pair)
    }

    fn set_org_uid_header(&self, tenant_id: Option<String>) {
        self.dispatcher.set_tenant_header(tenant_id);
    }

    fn set_entry_point(&self, entry_point: EntryPoint) {
        self.dispatcher.set_entry_point(entry_point);
    }

    async fn send_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> UpworkResult<ApiResponse> {
        self.dispatcher.request(method, path, params).await
    }

    async fn execute_graphql(&self, params: Params) -> UpworkResult<ApiResponse> {
        self.dispatcher.execute_graphql(params).await
    }
}
