//! Unpacking the combined batch response

use serde_json::Value;

use crate::sdk::errors::{BatchError, Result};

/// One unpacked per-request result
///
/// Index *i* of the unpacked sequence always corresponds to descriptor *i* of
/// the submitted queue; requests submitted with `omit_response_on_success`
/// yield an explicit [`BatchResult::Omitted`] marker rather than being dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult {
    /// Response body for the request at the same index
    Response(Value),
    /// Marker for a request whose response was suppressed on success
    Omitted,
}

impl BatchResult {
    /// Whether this entry is an omitted-response marker
    pub fn is_omitted(&self) -> bool {
        matches!(self, BatchResult::Omitted)
    }

    /// Response body, if present
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            BatchResult::Response(value) => Some(value),
            BatchResult::Omitted => None,
        }
    }

    /// Consume the entry, yielding the response body if present
    pub fn into_value(self) -> Option<Value> {
        match self {
            BatchResult::Response(value) => Some(value),
            BatchResult::Omitted => None,
        }
    }
}

/// Map the raw JSON response onto ordered per-request results
///
/// The input must be a JSON array of exactly `expected_len` elements, one per
/// submitted descriptor; `null` elements become [`BatchResult::Omitted`] and
/// anything else is carried through verbatim. Order is preserved.
pub fn unpack(raw: Value, expected_len: usize) -> Result<Vec<BatchResult>> {
    let items = match raw {
        Value::Array(items) => items,
        other => {
            return Err(BatchError::MalformedResponse(format!(
                "expected a JSON array, got {}",
                json_type_name(&other)
            )));
        }
    };

    if items.len() != expected_len {
        return Err(BatchError::MalformedResponse(format!(
            "expected {} response entries, got {}",
            expected_len,
            items.len()
        )));
    }

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Null => BatchResult::Omitted,
            value => BatchResult::Response(value),
        })
        .collect())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
