/*
[INPUT]:  Parsed JSON body of an authenticated endpoint
[OUTPUT]: Ok when the envelope reports success, exchange error otherwise
[POS]:    HTTP layer - response envelope validation
[UPDATE]: When the exchange changes its envelope fields
*/

use serde_json::Value;
use tracing::warn;

use crate::http::{OcceError, Result};

/// Message used when a failed envelope carries no `message` field
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error.";

/// Validate the `result` field of an exchange response
///
/// Only `"result": "success"` passes. Anything else, including a missing
/// field, yields [`OcceError::Exchange`] with the server message or
/// [`DEFAULT_ERROR_MESSAGE`].
pub fn check_response(body: &Value) -> Result<()> {
    if body.get("result").and_then(Value::as_str) == Some("success") {
        return Ok(());
    }

    let message = match body.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => DEFAULT_ERROR_MESSAGE.to_string(),
    };
    warn!(reason = %message, "exchange rejected request");
    Err(OcceError::Exchange { message })
}
