//! Token endpoint request shared by every grant.

use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{
    basic_auth_header, form_encode, HttpMethod, HttpRequest, HttpTransport, FORM_CONTENT_TYPE,
};
use crate::error::{create_error_from_response, AuthError, UpworkError};
use crate::types::{TokenResponse, UpworkConfig, USER_AGENT};

/// Posts grant parameters to the token endpoint with HTTP Basic client
/// authentication and decodes the token response.
///
/// Every failure, including an unreachable endpoint, surfaces as
/// [`UpworkError::Auth`].
pub struct TokenEndpoint<T: HttpTransport> {
    config: UpworkConfig,
    transport: Arc<T>,
}

impl<T: HttpTransport> TokenEndpoint<T> {
    pub fn new(config: UpworkConfig, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    fn build_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), FORM_CONTENT_TYPE.to_string());
        headers.insert("accept".to_string(), "application/json".to_string());
        headers.insert("user-agent".to_string(), USER_AGENT.to_string());
        headers.insert(
            "authorization".to_string(),
            basic_auth_header(
                &self.config.client_id,
                self.config.client_secret.expose_secret(),
            ),
        );
        headers
    }

    /// Send a token request with the given form parameters.
    pub async fn request(&self, params: &[(&str, String)]) -> Result<TokenResponse, UpworkError> {
        let http_request = HttpRequest {
            method: HttpMethod::Post,
            url: self.config.endpoints().token_url(),
            headers: self.build_headers(),
            body: Some(form_encode(params)),
            timeout: Some(self.config.timeout),
        };

        let response = self.transport.send(http_request).await.map_err(|e| match e {
            UpworkError::Transport(inner) => UpworkError::Auth(AuthError::EndpointUnreachable {
                message: inner.to_string(),
            }),
            other => other,
        })?;

        if !response.is_success() {
            return Err(create_error_from_response(response.status, &response.body));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            UpworkError::Auth(AuthError::MalformedTokenResponse {
                message: e.to_string(),
            })
        })
    }
}
