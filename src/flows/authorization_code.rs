//! Authorization Code Flow
//!
//! RFC 6749 Section 4.1 - Authorization Code Grant.

use async_trait::async_trait;
use std::sync::Arc;

use crate::core::{append_query, HttpTransport};
use crate::error::UpworkError;
use crate::flows::TokenEndpoint;
use crate::types::{TokenResponse, UpworkConfig};

/// Authorization Code Flow interface.
#[async_trait]
pub trait AuthorizationCodeFlow: Send + Sync {
    /// Build authorization URL for user redirect.
    fn build_authorization_url(
        &self,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<String, UpworkError>;

    /// Exchange authorization code for tokens.
    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, UpworkError>;
}

/// Authorization Code Flow implementation.
pub struct AuthorizationCodeFlowImpl<T: HttpTransport> {
    config: UpworkConfig,
    endpoint: TokenEndpoint<T>,
}

impl<T: HttpTransport> AuthorizationCodeFlowImpl<T> {
    /// Create new Authorization Code Flow.
    pub fn new(config: UpworkConfig, transport: Arc<T>) -> Self {
        let endpoint = TokenEndpoint::new(config.clone(), transport);
        Self { config, endpoint }
    }
}

#[async_trait]
impl<T: HttpTransport> AuthorizationCodeFlow for AuthorizationCodeFlowImpl<T> {
    fn build_authorization_url(
        &self,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<String, UpworkError> {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", redirect_uri),
        ];
        if let Some(state) = state {
            params.push(("state", state));
        }

        append_query(&self.config.endpoints().authorize_url(), &params)
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, UpworkError> {
        self.endpoint
            .request(&[
                ("grant_type", "authorization_code".to_string()),
                ("code", code.to_string()),
                ("redirect_uri", redirect_uri.to_string()),
            ])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::upwork_config;
    use crate::core::{HttpMethod, MockHttpTransport};
    use crate::error::AuthError;
    use serde_json::json;

    fn create_test_config() -> UpworkConfig {
        upwork_config()
            .client_id("test-client")
            .client_secret("test-secret")
            .redirect_uri("https://example.com/callback")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_authorization_url() {
        let flow = AuthorizationCodeFlowImpl::new(
            create_test_config(),
            Arc::new(MockHttpTransport::new()),
        );

        let url = flow
            .build_authorization_url("https://example.com/callback", Some("xyz"))
            .unwrap();
        assert_eq!(
            url,
            "https://www.upwork.com/ab/account-security/oauth2/authorize\
             ?response_type=code&client_id=test-client\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback&state=xyz"
        );
    }

    #[test]
    fn test_build_authorization_url_without_state() {
        let flow = AuthorizationCodeFlowImpl::new(
            create_test_config(),
            Arc::new(MockHttpTransport::new()),
        );

        let url = flow
            .build_authorization_url("https://example.com/callback", None)
            .unwrap();
        assert!(!url.contains("state="));
    }

    #[tokio::test]
    async fn test_exchange_code_request_shape() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(
            200,
            &json!({"access_token": "a1", "refresh_token": "r1", "expires_in": 86399}),
        );
        let flow = AuthorizationCodeFlowImpl::new(create_test_config(), transport.clone());

        let response = flow
            .exchange_code("the-code", "https://example.com/callback")
            .await
            .unwrap();
        assert_eq!(response.access_token, "a1");
        assert_eq!(response.refresh_token.as_deref(), Some("r1"));

        let request = transport.get_last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://www.upwork.com/api/v3/oauth2/token");
        assert_eq!(
            request.body.as_deref(),
            Some(
                "grant_type=authorization_code&code=the-code\
                 &redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"
            )
        );
        assert!(request.header("authorization").unwrap().starts_with("Basic "));
        assert_eq!(request.header("user-agent"), Some(crate::types::USER_AGENT));
    }

    #[tokio::test]
    async fn test_exchange_code_rejected() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_json_response(
            400,
            &json!({"error": "invalid_grant", "error_description": "bad code"}),
        );
        let flow = AuthorizationCodeFlowImpl::new(create_test_config(), transport);

        let result = flow.exchange_code("bad", "https://example.com/callback").await;
        assert!(matches!(
            result,
            Err(UpworkError::Auth(AuthError::InvalidGrant { .. }))
        ));
    }

    #[tokio::test]
    async fn test_exchange_code_malformed_body() {
        let transport = Arc::new(MockHttpTransport::new());
        transport.queue_response(crate::core::HttpResponse::new(200, "<html></html>"));
        let flow = AuthorizationCodeFlowImpl::new(create_test_config(), transport);

        let result = flow.exchange_code("code", "https://example.com/callback").await;
        assert!(matches!(
            result,
            Err(UpworkError::Auth(AuthError::MalformedTokenResponse { .. }))
        ));
    }

    #[tokio::test]
    async fn test_exchange_code_unreachable() {
        let transport = Arc::new(MockHttpTransport::new());
        let flow = AuthorizationCodeFlowImpl::new(create_test_config(), transport);

        let result = flow.exchange_code("code", "https://example.com/callback").await;
        assert!(matches!(
            result,
            Err(UpworkError::Auth(AuthError::EndpointUnreachable { .. }))
        ));
    }
}
