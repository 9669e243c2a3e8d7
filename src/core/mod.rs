//! Core batching logic
//!
//! Everything below this module is transport-agnostic: queue management, wire
//! encoding and response unpacking. The HTTP call itself lives in [`crate::sdk`].

pub mod batch;
