//! Upwork Error Types
//!
//! Error hierarchy for the token lifecycle and the request dispatcher.

use std::time::Duration;
use thiserror::Error;

/// Message carried by every call into a retired REST router.
pub const DEPRECATED_API_MESSAGE: &str =
    "The legacy API was deprecated. Please, use GraphQL call - see example in this library.";

/// Root error type for the Upwork integration.
#[derive(Error, Debug)]
pub enum UpworkError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Deprecated(#[from] DeprecatedEndpointError),
}

impl UpworkError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "UPWORK_CONFIG",
            Self::Auth(_) => "UPWORK_AUTH",
            Self::Transport(_) => "UPWORK_TRANSPORT",
            Self::Deprecated(_) => "UPWORK_DEPRECATED",
        }
    }

    /// Check if error requires the user to authorize the application again.
    pub fn needs_reauth(&self) -> bool {
        matches!(
            self,
            Self::Auth(AuthError::InvalidGrant { .. })
                | Self::Auth(AuthError::NoRefreshToken)
                | Self::Auth(AuthError::InvalidClient { .. })
        )
    }

    /// HTTP status observed before the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Configuration error.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Operation {operation} is not supported for the {grant_type} grant")]
    UnsupportedForGrant {
        operation: String,
        grant_type: String,
    },
}

/// Token endpoint error (code exchange, client credentials, refresh).
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid client credentials")]
    InvalidClient { error_description: Option<String> },

    #[error("Invalid grant: {message}")]
    InvalidGrant { message: String },

    #[error("Unauthorized client for this grant type")]
    UnauthorizedClient { error_description: Option<String> },

    #[error("Unsupported grant type: {grant_type}")]
    UnsupportedGrantType { grant_type: String },

    #[error("Token request rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed token response: {message}")]
    MalformedTokenResponse { message: String },

    #[error("Token endpoint unreachable: {message}")]
    EndpointUnreachable { message: String },

    #[error("No refresh token available")]
    NoRefreshToken,
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("Failed to read response body (HTTP {status}): {message}")]
    BodyRead { status: u16, message: String },

    #[error("Failed to build request: {message}")]
    InvalidRequest { message: String },
}

impl TransportError {
    /// Status received before the failure, when the response line arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BodyRead { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Returned by every method of a retired REST router. No request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{resource}.{operation}: {message}")]
pub struct DeprecatedEndpointError {
    pub resource: &'static str,
    pub operation: &'static str,
    pub message: &'static str,
}

impl DeprecatedEndpointError {
    pub fn new(resource: &'static str, operation: &'static str) -> Self {
        Self {
            resource,
            operation,
            message: DEPRECATED_API_MESSAGE,
        }
    }
}

/// Result type for Upwork operations.
pub type UpworkResult<T> = Result<T, UpworkError>;

/// OAuth2 error response from the token endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OAuth2ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Map a token endpoint error body to an error type.
pub fn map_token_error(status: u16, response: &OAuth2ErrorResponse) -> AuthError {
    match response.error.as_str() {
        "invalid_client" => AuthError::InvalidClient {
            error_description: response.error_description.clone(),
        },
        "invalid_grant" => AuthError::InvalidGrant {
            message: response
                .error_description
                .clone()
                .unwrap_or_else(|| "Invalid grant".to_string()),
        },
        "unauthorized_client" => AuthError::UnauthorizedClient {
            error_description: response.error_description.clone(),
        },
        "unsupported_grant_type" => AuthError::UnsupportedGrantType {
            grant_type: response.error_description.clone().unwrap_or_default(),
        },
        _ => AuthError::Rejected {
            status,
            message: response
                .error_description
                .clone()
                .unwrap_or_else(|| response.error.clone()),
        },
    }
}

/// Parse error response from HTTP body.
pub fn parse_error_response(body: &str) -> Option<OAuth2ErrorResponse> {
    serde_json::from_str(body).ok()
}

/// Create error from a non-2xx token endpoint response.
pub fn create_error_from_response(status: u16, body: &str) -> UpworkError {
    if let Some(response) = parse_error_response(body) {
        return UpworkError::Auth(map_token_error(status, &response));
    }

    let error = match status {
        401 => AuthError::InvalidClient {
            error_description: Some("Unauthorized".to_string()),
        },
        403 => AuthError::UnauthorizedClient {
            error_description: Some("Forbidden".to_string()),
        },
        _ => AuthError::Rejected {
            status,
            message: if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            },
        },
    };

    UpworkError::Auth(error)
}
