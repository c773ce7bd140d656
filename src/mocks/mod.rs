//! Mock client for testing code built on the Upwork API facade.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::client::UpworkClient;
use crate::core::HttpMethod;
use crate::error::{TransportError, UpworkError, UpworkResult};
use crate::types::{ApiResponse, EntryPoint, Params, TokenPair};

/// A recorded mock request.
#[derive(Debug, Clone)]
pub struct MockRequest {
    /// Logical method, before any tunneling.
    pub method: HttpMethod,
    pub path: String,
    pub params: Params,
    /// Entry point selected when the request was made.
    pub entry_point: Option<EntryPoint>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, VecDeque<ApiResponse>>,
    requests: Vec<MockRequest>,
    entry_point: Option<EntryPoint>,
    tenant_id: Option<String>,
    token: Option<TokenPair>,
    authorization_url: Option<String>,
}

/// Mock Upwork client.
///
/// Responses are registered per method and path; unmatched requests return a
/// transport error.
#[derive(Debug, Clone, Default)]
pub struct MockUpworkClient {
    state: Arc<RwLock<MockState>>,
}

impl MockUpworkClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: HttpMethod, path: &str) -> String {
        format!("{}:{}", method.as_str(), path)
    }

    /// Registers a response for a method and path.
    pub fn register(&self, method: HttpMethod, path: &str, response: ApiResponse) {
        self.state
            .write()
            .responses
            .entry(Self::key(method, path))
            .or_default()
            .push_back(response);
    }

    pub fn on_get(&self, path: &str, response: ApiResponse) {
        self.register(HttpMethod::Get, path, response);
    }

    pub fn on_post(&self, path: &str, response: ApiResponse) {
        self.register(HttpMethod::Post, path, response);
    }

    /// Token pair returned by `get_token` and `set_access_token`.
    pub fn with_token(self, pair: TokenPair) -> Self {
        self.state.write().token = Some(pair);
        self
    }

    pub fn with_authorization_url(self, url: impl Into<String>) -> Self {
        self.state.write().authorization_url = Some(url.into());
        self
    }

    /// Requests made so far.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.state.read().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.read().requests.len()
    }

    pub fn entry_point(&self) -> Option<EntryPoint> {
        self.state.read().entry_point
    }

    pub fn tenant_id(&self) -> Option<String> {
        self.state.read().tenant_id.clone()
    }

    fn no_token() -> UpworkError {
        UpworkError::Auth(crate::error::AuthError::NoRefreshToken)
    }
}

#[async_trait]
impl UpworkClient for MockUpworkClient {
    fn authorization_url(&self) -> UpworkResult<String> {
        Ok(self
            .state
            .read()
            .authorization_url
            .clone()
            .unwrap_or_else(|| "https://mock.example.com/authorize".to_string()))
    }

    async fn get_token(&self, _code: &str) -> UpworkResult<TokenPair> {
        self.state.read().token.clone().ok_or_else(Self::no_token)
    }

    async fn set_access_token(&self) -> UpworkResult<TokenPair> {
        self.state.read().token.clone().ok_or_else(Self::no_token)
    }

    fn set_new_access_token_pair(&self, pair: TokenPair) -> TokenPair {
        self.state.write().token = Some(pair.clone());
        pair
    }

    fn set_org_uid_header(&self, tenant_id: Option<String>) {
        self.state.write().tenant_id = tenant_id;
    }

    fn set_entry_point(&self, entry_point: EntryPoint) {
        self.state.write().entry_point = Some(entry_point);
    }

    async fn send_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> UpworkResult<ApiResponse> {
        let entry_point = self.state.read().entry_point;
        self.record(method, path, params, entry_point)
    }

    /// Recorded as a POST to the empty path on the GraphQL entry point.
    async fn execute_graphql(&self, params: Params) -> UpworkResult<ApiResponse> {
        self.record(HttpMethod::Post, "", params, Some(EntryPoint::Graphql))
    }
}

impl MockUpworkClient {
    fn record(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
        entry_point: Option<EntryPoint>,
    ) -> UpworkResult<ApiResponse> {
        let mut state = self.state.write();
        state.requests.push(MockRequest {
            method,
            path: path.to_string(),
            params,
            entry_point,
            timestamp: Utc::now(),
        });

        state
            .responses
            .get_mut(&Self::key(method, path))
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| {
                UpworkError::Transport(TransportError::ConnectionFailed {
                    message: format!("No mock response for {} {}", method, path),
                })
            })
    }
}
