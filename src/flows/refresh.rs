//! Refresh Token Flow
//!
//! RFC 6749 Section 6 - Refreshing an Access Token.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::HttpTransport;
use crate::error::UpworkError;
use crate::flows::TokenEndpoint;
use crate::types::{TokenResponse, UpworkConfig};

/// Refresh flow interface.
#[async_trait]
pub trait RefreshFlow: Send + Sync {
    /// Exchange a refresh token for a new access token.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, UpworkError>;
}

/// Refresh flow implementation.
pub struct RefreshFlowImpl<T: HttpTransport> {
    endpoint: TokenEndpoint<T>,
}

impl<T: HttpTransport> RefreshFlowImpl<T> {
    pub fn new(config: UpworkConfig, transport: Arc<T>) -> Self {
        Self {
            endpoint: TokenEndpoint::new(config, transport),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> RefreshFlow for RefreshFlowImpl<T> {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, UpworkError> {
        self.endpoint
            .request(&[
                ("grant_type", "refresh_token".to_string()),
                ("refresh_token", refresh_token.to_string()),
            ])
            .await
    }
}
