//! Token Manager
//!
//! Manages the token lifecycle held in the shared configuration: authorization
//! URL, code exchange, adoption of known pairs and expiry-driven refresh.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;

use crate::core::HttpTransport;
use crate::error::{AuthError, ConfigurationError, UpworkError, UpworkResult};
use crate::flows::{
    AuthorizationCodeFlow, AuthorizationCodeFlowImpl, ClientCredentialsFlow,
    ClientCredentialsFlowImpl, RefreshFlow, RefreshFlowImpl,
};
use crate::telemetry::{Logger, UpworkLogContext};
use crate::types::{GrantType, TokenPair, TokenResponse, UpworkConfig};

/// Token manager interface.
#[async_trait]
pub trait TokenManager: Send + Sync {
    /// Build the provider authorization URL. Authorization code grant only.
    fn build_authorization_url(
        &self,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> UpworkResult<String>;

    /// Exchange an authorization code for a token pair.
    ///
    /// Under the client credentials grant `code` is ignored and a
    /// credentials-only token request is made.
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> UpworkResult<TokenPair>;

    /// Record a token pair into the configuration and return it normalized.
    fn adopt_token_pair(&self, pair: TokenPair) -> TokenPair;

    /// Return the current pair, refreshing it first if it has expired.
    async fn ensure_fresh_token(&self) -> UpworkResult<TokenPair>;

    /// Current pair without any refresh.
    fn current_token(&self) -> Option<TokenPair>;
}

/// Default token manager implementation.
///
/// Shares its configuration with the request dispatcher. Refreshes are
/// serialized and expiry is re-checked once the refresh lock is held, so
/// concurrent callers observing an expired token cause a single refresh.
pub struct DefaultTokenManager<T: HttpTransport> {
    state: Arc<RwLock<UpworkConfig>>,
    transport: Arc<T>,
    refresh_guard: AsyncMutex<()>,
    logger: Arc<dyn Logger>,
}

impl<T: HttpTransport> DefaultTokenManager<T> {
    /// Create new token manager.
    pub fn new(
        state: Arc<RwLock<UpworkConfig>>,
        transport: Arc<T>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            state,
            transport,
            refresh_guard: AsyncMutex::new(()),
            logger,
        }
    }

    fn snapshot(&self) -> UpworkConfig {
        self.state.read().clone()
    }

    fn log_context(&self, operation: &str) -> UpworkLogContext {
        UpworkLogContext::new()
            .operation(operation)
            .grant_type(self.state.read().grant_type.as_str())
    }

    async fn request_new_token(
        &self,
        config: UpworkConfig,
        refresh_token: Option<String>,
    ) -> UpworkResult<TokenResponse> {
        match (refresh_token, config.grant_type) {
            (Some(refresh_token), _) => {
                RefreshFlowImpl::new(config, self.transport.clone())
                    .refresh(&refresh_token)
                    .await
            }
            (None, GrantType::ClientCredentials) => {
                ClientCredentialsFlowImpl::new(config, self.transport.clone())
                    .request_token()
                    .await
            }
            (None, GrantType::AuthorizationCode) => {
                Err(UpworkError::Auth(AuthError::NoRefreshToken))
            }
        }
    }

    async fn refresh_locked(&self) -> UpworkResult<TokenPair> {
        let _guard = self.refresh_guard.lock().await;

        let config = self.snapshot();
        let current = config.token_pair().map(|pair| pair.normalized(Utc::now()));
        if let Some(pair) = &current {
            if !pair.is_expired_at(Utc::now()) {
                // Another caller refreshed while we waited.
                return Ok(pair.clone());
            }
        }

        let context = self.log_context("refresh_token");
        self.logger.debug("access token expired, refreshing", &context);

        let refresh_token = current.and_then(|pair| pair.refresh_token);
        let response = self
            .request_new_token(config, refresh_token)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("token refresh failed: {}", e), &context);
                e
            })?;

        let refreshed = TokenPair::from_response(&response, Utc::now());
        let mut state = self.state.write();
        state.apply_token_pair(&refreshed);
        self.logger.info("access token refreshed", &context);

        state
            .token_pair()
            .ok_or(UpworkError::Auth(AuthError::MalformedTokenResponse {
                message: "token pair missing after refresh".to_string(),
            }))
    }
}

#[async_trait]
impl<T: HttpTransport> TokenManager for DefaultTokenManager<T> {
    fn build_authorization_url(
        &self,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> UpworkResult<String> {
        let config = self.snapshot();
        if config.grant_type != GrantType::AuthorizationCode {
            return Err(UpworkError::Configuration(
                ConfigurationError::UnsupportedForGrant {
                    operation: "build_authorization_url".to_string(),
                    grant_type: config.grant_type.to_string(),
                },
            ));
        }

        self.logger.debug(
            "building authorization url",
            &self.log_context("build_authorization_url"),
        );
        AuthorizationCodeFlowImpl::new(config, self.transport.clone())
            .build_authorization_url(redirect_uri, state)
    }

    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> UpworkResult<TokenPair> {
        let config = self.snapshot();
        let context = self.log_context("exchange_code_for_token");
        self.logger.debug("requesting token pair", &context);

        let response = match config.grant_type {
            GrantType::AuthorizationCode => {
                AuthorizationCodeFlowImpl::new(config, self.transport.clone())
                    .exchange_code(code, redirect_uri)
                    .await
            }
            GrantType::ClientCredentials => {
                ClientCredentialsFlowImpl::new(config, self.transport.clone())
                    .request_token()
                    .await
            }
        }
        .map_err(|e| {
            self.logger
                .error(&format!("token request failed: {}", e), &context);
            e
        })?;

        Ok(TokenPair::from_response(&response, Utc::now()))
    }

    fn adopt_token_pair(&self, pair: TokenPair) -> TokenPair {
        let pair = pair.normalized(Utc::now());
        self.state.write().apply_token_pair(&pair);
        self.logger
            .debug("token pair adopted", &self.log_context("adopt_token_pair"));
        pair
    }

    async fn ensure_fresh_token(&self) -> UpworkResult<TokenPair> {
        let (grant_type, current) = {
            let state = self.state.read();
            (state.grant_type, state.token_pair())
        };

        match current {
            Some(pair) => {
                let normalized = pair.clone().normalized(Utc::now());
                if normalized.is_expired_at(Utc::now()) {
                    self.refresh_locked().await
                } else {
                    Ok(pair)
                }
            }
            None if grant_type == GrantType::ClientCredentials => self.refresh_locked().await,
            None => Err(UpworkError::Configuration(ConfigurationError::MissingField {
                field: "access_token".to_string(),
            })),
        }
    }

    fn current_token(&self) -> Option<TokenPair> {
        self.state.read().token_pair()
    }
}
