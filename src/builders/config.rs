//! Configuration Builder
//!
//! Fluent builder for Upwork configuration.

use base64::Engine;
use chrono::{DateTime, Utc};
use rand::RngCore;
use secrecy::SecretString;
use std::time::Duration;

use crate::error::{ConfigurationError, UpworkError};
use crate::types::{
    parse_expires_at, GrantType, UpworkConfig, UpworkEndpoints, DEFAULT_GRAPHQL_URL,
    DEFAULT_TOKEN_HOST,
};

/// Upwork configuration builder.
#[derive(Default)]
pub struct UpworkConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    redirect_uri: Option<String>,
    grant_type: Option<GrantType>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    expires_at: Option<DateTime<Utc>>,
    state: Option<String>,
    debug: bool,
    token_host: Option<String>,
    graphql_url: Option<String>,
    timeout: Duration,
    invalid: Vec<ConfigurationError>,
}

impl UpworkConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            ..Default::default()
        }
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(client_secret.into()));
        self
    }

    /// Set redirect URI used by the authorization code grant.
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Set grant type (defaults to authorization code).
    pub fn grant_type(mut self, grant_type: GrantType) -> Self {
        self.grant_type = Some(grant_type);
        self
    }

    /// Set a known access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set a known refresh token.
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Set access token lifetime in seconds.
    pub fn expires_in(mut self, seconds: u64) -> Self {
        self.expires_in = Some(seconds);
        self
    }

    /// Set access token expiry.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set access token expiry from an RFC 3339 timestamp or `YYYY-MM-DD` date.
    pub fn expires_at_str(mut self, value: &str) -> Self {
        match parse_expires_at(value) {
            Some(ts) => self.expires_at = Some(ts),
            None => self.invalid.push(ConfigurationError::InvalidValue {
                field: "expires_at".to_string(),
                value: value.to_string(),
            }),
        }
        self
    }

    /// Set the state parameter sent with the authorization URL.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Fill the state parameter with a random URL-safe value.
    pub fn generate_state(mut self) -> Self {
        let mut bytes = [0u8; 24];
        rand::thread_rng().fill_bytes(&mut bytes);
        self.state = Some(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes));
        self
    }

    /// Enable debug logging.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the token host (the REST base is derived from it).
    pub fn token_host(mut self, host: impl Into<String>) -> Self {
        self.token_host = Some(host.into());
        self
    }

    /// Override the GraphQL endpoint.
    pub fn graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fill unset fields from `UPWORK_*` environment variables.
    pub fn from_env(self) -> Self {
        self.from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.client_id.is_none() {
            self.client_id = lookup("UPWORK_CLIENT_ID");
        }
        if self.client_secret.is_none() {
            self.client_secret = lookup("UPWORK_CLIENT_SECRET").map(SecretString::new);
        }
        if self.redirect_uri.is_none() {
            self.redirect_uri = lookup("UPWORK_REDIRECT_URI");
        }
        if self.grant_type.is_none() {
            if let Some(value) = lookup("UPWORK_GRANT_TYPE") {
                match GrantType::parse(&value) {
                    Some(grant_type) => self.grant_type = Some(grant_type),
                    None => self.invalid.push(ConfigurationError::InvalidValue {
                        field: "grant_type".to_string(),
                        value,
                    }),
                }
            }
        }
        if self.access_token.is_none() {
            self.access_token = lookup("UPWORK_ACCESS_TOKEN");
        }
        if self.refresh_token.is_none() {
            self.refresh_token = lookup("UPWORK_REFRESH_TOKEN");
        }
        if self.expires_in.is_none() {
            if let Some(value) = lookup("UPWORK_EXPIRES_IN") {
                match value.trim().parse::<u64>() {
                    Ok(secs) => self.expires_in = Some(secs),
                    Err(_) => self.invalid.push(ConfigurationError::InvalidValue {
                        field: "expires_in".to_string(),
                        value,
                    }),
                }
            }
        }
        if self.expires_at.is_none() {
            if let Some(value) = lookup("UPWORK_EXPIRES_AT") {
                self = self.expires_at_str(&value);
            }
        }
        if self.state.is_none() {
            self.state = lookup("UPWORK_STATE");
        }
        if let Some(value) = lookup("UPWORK_API_DEBUG") {
            self.debug = self.debug || matches!(value.as_str(), "1" | "true" | "TRUE" | "yes");
        }
        self
    }

    /// Build the Upwork configuration.
    pub fn build(mut self) -> Result<UpworkConfig, UpworkError> {
        if !self.invalid.is_empty() {
            return Err(UpworkError::Configuration(self.invalid.remove(0)));
        }

        let client_id = self.client_id.ok_or_else(|| {
            UpworkError::Configuration(ConfigurationError::MissingField {
                field: "client_id".to_string(),
            })
        })?;

        let client_secret = self.client_secret.ok_or_else(|| {
            UpworkError::Configuration(ConfigurationError::MissingField {
                field: "client_secret".to_string(),
            })
        })?;

        let grant_type = self.grant_type.unwrap_or_default();
        if grant_type == GrantType::AuthorizationCode && self.redirect_uri.is_none() {
            return Err(UpworkError::Configuration(ConfigurationError::MissingField {
                field: "redirect_uri".to_string(),
            }));
        }

        let token_host = self
            .token_host
            .unwrap_or_else(|| DEFAULT_TOKEN_HOST.to_string());
        let graphql_url = self
            .graphql_url
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());
        for url in [&token_host, &graphql_url] {
            url::Url::parse(url).map_err(|e| {
                UpworkError::Configuration(ConfigurationError::InvalidUrl {
                    url: url.clone(),
                    message: e.to_string(),
                })
            })?;
        }

        let mut config = UpworkConfig::new(
            client_id,
            client_secret,
            grant_type,
            UpworkEndpoints::new(token_host, graphql_url),
        );
        config.redirect_uri = self.redirect_uri;
        config.access_token = self.access_token;
        config.refresh_token = self.refresh_token;
        config.expires_in = self.expires_in;
        config.expires_at = self.expires_at;
        config.state = self.state;
        config.debug = self.debug;
        config.timeout = self.timeout;

        Ok(config)
    }
}

/// Create a new Upwork configuration builder.
pub fn upwork_config() -> UpworkConfigBuilder {
    UpworkConfigBuilder::new()
}
