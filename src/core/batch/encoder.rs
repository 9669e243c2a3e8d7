//! Wire-format serialization for the batch endpoint

use super::queue::BatchQueue;
use crate::sdk::errors::Result;

/// Serialize a queue into the JSON array the batch endpoint expects
///
/// Each descriptor becomes one object with keys `method`, `relative_url` and,
/// where set, `name` and `body`; `omit_response_on_success` appears only when
/// true, keeping the payload minimal. Descriptors are encoded strictly in
/// insertion order. URL templates in `relative_url` are not interpreted.
pub fn encode(queue: &BatchQueue) -> Result<String> {
    let payload = serde_json::to_string(queue.descriptors())?;
    Ok(payload)
}
