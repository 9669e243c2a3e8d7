//! Batch queue and request descriptors

use serde::{Deserialize, Serialize};

use crate::sdk::errors::{BatchError, Result};

/// Maximum number of requests the remote API accepts in a single batch
pub const BATCH_LIMIT: usize = 50;

/// HTTP method for a batched operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET request (default)
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// DELETE request
    Delete,
}

/// One queued Graph API operation
///
/// Descriptors are immutable once appended to a [`BatchQueue`]; build them up
/// front with the consuming setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the Graph root
    ///
    /// May contain `{result=<name>:<json-path>}` templates referencing another
    /// descriptor's `name`; these are resolved server-side and pass through
    /// encoding verbatim.
    pub relative_url: String,
    /// Name other descriptors can reference in URL templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Suppress the response body on success
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub omit_response_on_success: bool,
}

impl RequestDescriptor {
    /// Create a descriptor with the given path and method
    pub fn new(path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            method,
            relative_url: path.into(),
            name: None,
            body: None,
            omit_response_on_success: false,
        }
    }

    /// GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Get)
    }

    /// POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Post)
    }

    /// DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path, HttpMethod::Delete)
    }

    /// Name this request so later requests can reference its result
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Suppress this request's response body on success
    ///
    /// The result sequence still holds an entry at this request's index, as an
    /// explicit [`BatchResult::Omitted`](crate::BatchResult::Omitted) marker.
    pub fn omit_response(mut self) -> Self {
        self.omit_response_on_success = true;
        self
    }
}

/// Ordered sequence of pending requests awaiting submission
///
/// Insertion order is significant: it defines result ordering and lets later
/// descriptors reference earlier named ones. One queue serves one workflow;
/// concurrent workflows each get their own queue instance.
#[derive(Debug, Default)]
pub struct BatchQueue {
    descriptors: Vec<RequestDescriptor>,
}

impl BatchQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor at the tail of the queue
    ///
    /// Fails with [`BatchError::InvalidRequest`] when `relative_url` is empty
    /// and with [`BatchError::BatchLimitExceeded`] when the queue already
    /// holds [`BATCH_LIMIT`] descriptors. The queue is unchanged on failure.
    pub fn append(&mut self, descriptor: RequestDescriptor) -> Result<()> {
        if descriptor.relative_url.is_empty() {
            return Err(BatchError::InvalidRequest(
                "relative_url must not be empty".to_string(),
            ));
        }

        if self.descriptors.len() >= BATCH_LIMIT {
            return Err(BatchError::BatchLimitExceeded(BATCH_LIMIT));
        }

        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Number of pending requests
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the queue holds no pending requests
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Pending requests, in insertion order
    pub fn descriptors(&self) -> &[RequestDescriptor] {
        &self.descriptors
    }

    /// Drop all pending requests
    ///
    /// Called by the executor on confirmed success only; a failed submission
    /// keeps its contents so the caller can retry.
    pub(crate) fn clear(&mut self) {
        self.descriptors.clear();
    }
}
