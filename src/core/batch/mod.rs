//! Batch accumulation, wire encoding and response unpacking
//!
//! This module provides the ordered request queue, the serializer for the
//! batch endpoint's wire format, and the mapper that turns the combined JSON
//! response back into per-request results.

mod encoder;
mod queue;
mod response;


// Re-export all public types
pub use encoder::encode;
pub use queue::{BATCH_LIMIT, BatchQueue, HttpMethod, RequestDescriptor};
pub use response::{BatchResult, unpack};
