//! Token Management
//!
//! Token lifecycle over the shared configuration.

pub mod manager;

pub use manager::{DefaultTokenManager, TokenManager};
