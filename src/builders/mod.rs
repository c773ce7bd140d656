//! Builders
//!
//! Fluent builders for configuration.

pub mod config;

pub use config::{upwork_config, UpworkConfigBuilder};
