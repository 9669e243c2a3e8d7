//! # graph-batch-rs
//!
//! A Graph API batch client for Rust - accumulate several Graph API calls and
//! execute them together as a single HTTP batch request.
//!
//! The Graph API allows batching of up to 50 requests at once. By batching
//! several HTTP requests you gain performance when loading your data, and you
//! can feed the output of one request into another in just one call using
//! server-side result templates.
//!
//! ## Features
//!
//! - **Ordered Batching**: queue up to 50 requests, results come back in the
//!   same order
//! - **Named Requests**: reference one request's result from another via
//!   `{result=<name>:<json-path>}` URL templates (resolved server-side)
//! - **Omitted Responses**: mark intermediate requests so their bodies are
//!   suppressed on success, represented by an explicit marker in the results
//! - **Single Transport Call**: one `submit` is exactly one HTTP request
//! - **Typed Errors**: append-time validation and submit-time failures surface
//!   as a typed error instead of being swallowed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_batch_rs::{BatchQueue, GraphClient, ClientConfig, RequestDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GraphClient::new(ClientConfig::new("your-access-token"))?;
//!
//!     let mut queue = BatchQueue::new();
//!     queue.append(RequestDescriptor::get("me"))?;
//!     queue.append(
//!         RequestDescriptor::get("me/friends?fields=id&limit=5")
//!             .name("myfriends")
//!             .omit_response(),
//!     )?;
//!     // Use the friend ids from the previous request as input to this one
//!     queue.append(RequestDescriptor::get("?ids={result=myfriends:$.data.*.id}"))?;
//!
//!     let results = client.execute_batch(&mut queue).await?;
//!     println!("me: {:?}", results[0].as_value());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod core;
pub mod sdk;

// Re-export main types
pub use crate::core::batch::{BATCH_LIMIT, BatchQueue, BatchResult, HttpMethod, RequestDescriptor};
pub use crate::sdk::{BatchError, ClientConfig, ConfigBuilder, GraphClient, Result};
