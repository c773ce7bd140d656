//! Upwork Integration Module
//!
//! OAuth2 client wrapper and request dispatcher for the Upwork API.
//!
//! # Features
//!
//! - Authorization Code Flow (RFC 6749 Section 4.1)
//! - Client Credentials Flow (RFC 6749 Section 4.4)
//! - Expiry-driven token refresh (RFC 6749 Section 6)
//! - REST (`api`, `gds`) and GraphQL request dispatch
//! - Deprecated legacy REST routers kept for compatibility
//!
//! # Example
//!
//! ```rust,ignore
//! use integrations_upwork::{upwork_config, Graphql, Params, UpworkApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = upwork_config()
//!         .client_id("my-client-id")
//!         .client_secret("my-client-secret")
//!         .redirect_uri("https://myapp.com/callback")
//!         .build()?;
//!
//!     let api = UpworkApi::new(config)?;
//!     println!("Visit: {}", api.authorization_url()?);
//!
//!     let pair = api.get_token("code-from-redirect").await?;
//!     api.set_new_access_token_pair(pair);
//!
//!     let graphql = Graphql::new(&api);
//!     let response = graphql
//!         .execute(Params::new().with("query", "query { user { id } }"))
//!         .await?;
//!     println!("{}", response.body);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `types`: configuration, token pair and request types
//! - `error`: error hierarchy and token endpoint error mapping
//! - `core`: HTTP transport and wire encoding
//! - `flows`: token endpoint grant flows
//! - `token`: token lifecycle over the shared configuration
//! - `dispatch`: entry point routing and request encoding
//! - `builders`: fluent configuration builder
//! - `telemetry`: injected structured logging
//! - `client`: client capability trait and default client
//! - `routers`: GraphQL and legacy resource routers

pub mod api;
pub mod builders;
pub mod client;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod flows;
pub mod mocks;
pub mod routers;
pub mod telemetry;
pub mod token;
pub mod types;

// Re-export facade and clients
pub use api::UpworkApi;
pub use client::{Client, UpworkClient};
pub use mocks::{MockRequest, MockUpworkClient};

// Re-export builders
pub use builders::{upwork_config, UpworkConfigBuilder};

// Re-export errors
pub use error::{
    create_error_from_response, map_token_error, parse_error_response, AuthError,
    ConfigurationError, DeprecatedEndpointError, OAuth2ErrorResponse, TransportError,
    UpworkError, UpworkResult, DEPRECATED_API_MESSAGE,
};

// Re-export types
pub use types::{
    // Config
    GrantType, UpworkConfig, UpworkEndpoints, AUTHORIZE_PATH, DEFAULT_GRAPHQL_URL,
    DEFAULT_TOKEN_HOST, TENANT_ID_HEADER, TOKEN_PATH, USER_AGENT,
    // Token
    parse_expires_at, TokenPair, TokenResponse,
    // Request
    parse_response, ApiResponse, EntryPoint, Params,
};

// Re-export core components
pub use core::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport,
    ReqwestHttpTransport,
};

// Re-export token management and dispatch
pub use dispatch::RequestDispatcher;
pub use token::{DefaultTokenManager, TokenManager};

// Re-export routers
pub use routers::{
    Accounts, Billings, Companies, Contracts, Graphql, Jobs, Metadata, Milestones, Submissions,
    Team,
};

// Re-export telemetry
pub use telemetry::{create_logger, Logger, NoOpLogger, TracingLogger};
