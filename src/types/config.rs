//! Configuration Types
//!
//! Upwork client configuration and the provider's fixed endpoints.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::TokenPair;

/// Default OAuth2 token host; the REST base is derived from it.
pub const DEFAULT_TOKEN_HOST: &str = "https://www.upwork.com";
/// Token endpoint path, relative to the token host.
pub const TOKEN_PATH: &str = "/api/v3/oauth2/token";
/// Authorization endpoint path, relative to the token host.
pub const AUTHORIZE_PATH: &str = "/ab/account-security/oauth2/authorize";
/// Dedicated GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.upwork.com/graphql";
/// Client identification sent with every request.
pub const USER_AGENT: &str = "Github Upwork API Rust Client";
/// Organization context header for GraphQL calls.
pub const TENANT_ID_HEADER: &str = "X-Upwork-API-TenantId";

/// OAuth2 grant type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrantType {
    #[default]
    #[serde(rename = "authorization_code")]
    AuthorizationCode,
    #[serde(rename = "client_credentials")]
    ClientCredentials,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::ClientCredentials => "client_credentials",
        }
    }

    /// Parse the wire name of a grant type.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "authorization_code" => Some(Self::AuthorizationCode),
            "client_credentials" => Some(Self::ClientCredentials),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider endpoints. Fixed once the configuration is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpworkEndpoints {
    token_host: String,
    token_path: String,
    authorize_path: String,
    base_url: String,
    gql_url: String,
}

impl UpworkEndpoints {
    pub(crate) fn new(token_host: impl Into<String>, gql_url: impl Into<String>) -> Self {
        let token_host = token_host.into().trim_end_matches('/').to_string();
        let base_url = format!("{}/api/", token_host);
        Self {
            token_host,
            token_path: TOKEN_PATH.to_string(),
            authorize_path: AUTHORIZE_PATH.to_string(),
            base_url,
            gql_url: gql_url.into(),
        }
    }

    pub fn token_host(&self) -> &str {
        &self.token_host
    }

    pub fn token_path(&self) -> &str {
        &self.token_path
    }

    pub fn authorize_path(&self) -> &str {
        &self.authorize_path
    }

    /// Default REST base, `token_host + "/api/"`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn gql_url(&self) -> &str {
        &self.gql_url
    }

    /// Absolute token endpoint URL.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.token_host, self.token_path)
    }

    /// Absolute authorization endpoint URL.
    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.token_host, self.authorize_path)
    }
}

impl Default for UpworkEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_HOST, DEFAULT_GRAPHQL_URL)
    }
}

/// Upwork client configuration.
///
/// Credential and token fields are updated in place when tokens are adopted or
/// refreshed; the caller is responsible for persisting them.
#[derive(Clone)]
pub struct UpworkConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub redirect_uri: Option<String>,
    pub grant_type: GrantType,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Lifetime in seconds, used when `expires_at` is absent.
    pub expires_in: Option<u64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub state: Option<String>,
    pub debug: bool,
    /// HTTP timeout.
    pub timeout: Duration,
    endpoints: UpworkEndpoints,
}

impl UpworkConfig {
    pub(crate) fn new(
        client_id: String,
        client_secret: SecretString,
        grant_type: GrantType,
        endpoints: UpworkEndpoints,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri: None,
            grant_type,
            access_token: None,
            refresh_token: None,
            expires_in: None,
            expires_at: None,
            state: None,
            debug: false,
            timeout: Duration::from_secs(30),
            endpoints,
        }
    }

    /// Create a new configuration builder.
    pub fn builder() -> crate::builders::UpworkConfigBuilder {
        crate::builders::UpworkConfigBuilder::new()
    }

    pub fn endpoints(&self) -> &UpworkEndpoints {
        &self.endpoints
    }

    pub fn token_host(&self) -> &str {
        self.endpoints.token_host()
    }

    pub fn token_path(&self) -> &str {
        self.endpoints.token_path()
    }

    pub fn authorize_path(&self) -> &str {
        self.endpoints.authorize_path()
    }

    pub fn base_url(&self) -> &str {
        self.endpoints.base_url()
    }

    pub fn gql_url(&self) -> &str {
        self.endpoints.gql_url()
    }

    /// Token pair held by the configuration, if an access token is known.
    pub fn token_pair(&self) -> Option<TokenPair> {
        self.access_token.as_ref().map(|access_token| TokenPair {
            access_token: access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_in: self.expires_in,
            expires_at: self.expires_at,
        })
    }

    /// Record a token pair into the mutable token fields.
    ///
    /// A pair without a refresh token keeps the one already configured.
    pub fn apply_token_pair(&mut self, pair: &TokenPair) {
        self.access_token = Some(pair.access_token.clone());
        if pair.refresh_token.is_some() {
            self.refresh_token = pair.refresh_token.clone();
        }
        self.expires_in = pair.expires_in;
        self.expires_at = pair.expires_at;
    }
}

impl std::fmt::Debug for UpworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpworkConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("grant_type", &self.grant_type)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .field("state", &self.state)
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = UpworkEndpoints::default();
        assert_eq!(endpoints.token_host(), "https://www.upwork.com");
        assert_eq!(endpoints.base_url(), "https://www.upwork.com/api/");
        assert_eq!(endpoints.gql_url(), "https://api.upwork.com/graphql");
        assert_eq!(
            endpoints.token_url(),
            "https://www.upwork.com/api/v3/oauth2/token"
        );
        assert_eq!(
            endpoints.authorize_url(),
            "https://www.upwork.com/ab/account-security/oauth2/authorize"
        );
    }

    #[test]
    fn test_custom_token_host_trailing_slash() {
        let endpoints =
            UpworkEndpoints::new("http://127.0.0.1:8080/", "http://127.0.0.1:8080/graphql");
        assert_eq!(endpoints.base_url(), "http://127.0.0.1:8080/api/");
        assert_eq!(endpoints.token_url(), "http://127.0.0.1:8080/api/v3/oauth2/token");
    }

    #[test]
    fn test_grant_type_parse() {
        assert_eq!(
            GrantType::parse("client_credentials"),
            Some(GrantType::ClientCredentials)
        );
        assert_eq!(GrantType::parse("password"), None);
        assert_eq!(GrantType::default().as_str(), "authorization_code");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = UpworkConfig::new(
            "client".to_string(),
            SecretString::new("super-secret".to_string()),
            GrantType::AuthorizationCode,
            UpworkEndpoints::default(),
        );
        config.access_token = Some("access-value".to_string());

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("access-value"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_apply_token_pair_keeps_refresh_token() {
        let mut config = UpworkConfig::new(
            "client".to_string(),
            SecretString::new("secret".to_string()),
            GrantType::AuthorizationCode,
            UpworkEndpoints::default(),
        );
        config.refresh_token = Some("refresh-1".to_string());

        config.apply_token_pair(&TokenPair::new("access-2"));
        assert_eq!(config.access_token.as_deref(), Some("access-2"));
        assert_eq!(config.refresh_token.as_deref(), Some("refresh-1"));

        config.apply_token_pair(&TokenPair::new("access-3").with_refresh_token("refresh-3"));
        assert_eq!(config.refresh_token.as_deref(), Some("refresh-3"));
    }
}
