//! User-facing client surface
//!
//! This module provides the configured Graph client that submits an
//! accumulated [`BatchQueue`](crate::BatchQueue) over HTTP, plus configuration
//! and the error taxonomy shared with the batch core.

pub mod client;
pub mod config;
pub mod errors;

// Re-exports for convenience
pub use client::GraphClient;
pub use config::{ClientConfig, ClientSettings, ConfigBuilder};
pub use errors::{BatchError, Result};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the SDK with default logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
