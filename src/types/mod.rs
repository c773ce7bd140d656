//! Upwork Types
//!
//! Configuration, token and request types.

pub mod config;
pub mod request;
pub mod token;

pub use config::{
    GrantType, UpworkConfig, UpworkEndpoints, AUTHORIZE_PATH, DEFAULT_GRAPHQL_URL,
    DEFAULT_TOKEN_HOST, TENANT_ID_HEADER, TOKEN_PATH, USER_AGENT,
};
pub use request::{parse_response, ApiResponse, EntryPoint, Params};
pub use token::{parse_expires_at, TokenPair, TokenResponse};
