//! Best-effort extraction of the subject id carried by a bearer token.
//!
//! The signature is NOT checked: the server does that. The id recovered here
//! is only a local key for correlating pushed notifications with the current
//! user and must never be treated as an authenticated identity.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Returns the payload's `id` (or `_id`) claim, or `None` for anything that
/// is not a well-formed three-part token with a JSON payload.
pub fn subject_id(token: &str) -> Option<String> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let claims = decode_payload(payload)?;

    claim_as_id(claims.get("id")).or_else(|| claim_as_id(claims.get("_id")))
}

fn decode_payload(segment: &str) -> Option<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .ok()?;
    let json = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&json).ok()
}

// Empty strings and zero count as "not set".
fn claim_as_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
