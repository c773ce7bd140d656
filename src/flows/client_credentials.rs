//! Client Credentials Flow
//!
//! RFC 6749 Section 4.4 - Client Credentials Grant.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::HttpTransport;
use crate::error::UpworkError;
use crate::flows::TokenEndpoint;
use crate::types::{TokenResponse, UpworkConfig};

/// Client Credentials Flow interface.
#[async_trait]
pub trait ClientCredentialsFlow: Send + Sync {
    /// Request access token using client credentials.
    async fn request_token(&self) -> Result<TokenResponse, UpworkError>;
}

/// Client Credentials Flow implementation.
pub struct ClientCredentialsFlowImpl<T: HttpTransport> {
    endpoint: TokenEndpoint<T>,
}

impl<T: HttpTransport> ClientCredentialsFlowImpl<T> {
    /// Create new Client Credentials Flow.
    pub fn new(config: UpworkConfig, transport: Arc<T>) -> Self {
        Self {
            endpoint: TokenEndpoint::new(config, transport),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> ClientCredentialsFlow for ClientCredentialsFlowImpl<T> {
    async fn request_token(&self) -> Result<TokenResponse, UpworkError> {
        self.endpoint
            .request(&[("grant_type", "client_credentials".to_string())])
            .await
    }
}
