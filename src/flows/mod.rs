//! OAuth2 Flows
//!
//! Grant flows against the Upwork token endpoint:
//!
//! - **Authorization Code Flow** (RFC 6749 Section 4.1): user-authorized access
//! - **Client Credentials Flow** (RFC 6749 Section 4.4): service-to-service access
//! - **Refresh** (RFC 6749 Section 6): renewing an expired access token

pub mod authorization_code;
pub mod client_credentials;
pub mod refresh;
pub mod token_request;

pub use authorization_code::{AuthorizationCodeFlow, AuthorizationCodeFlowImpl};
pub use client_credentials::{ClientCredentialsFlow, ClientCredentialsFlowImpl};
pub use refresh::{RefreshFlow, RefreshFlowImpl};
pub use token_request::TokenEndpoint;
