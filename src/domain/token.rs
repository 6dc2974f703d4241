use base64::Engine;
use serde::Deserialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Access/refresh credential pair as issued by the backend.
///
/// Both are opaque signed tokens; the client never verifies signatures, it
/// only peeks at the payload to avoid doomed network calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    exp: Option<u64>,
}

/// Decodes the claims segment of a dot-delimited token without verification.
fn decode_payload(token: &str) -> Option<TokenPayload> {
    let segment = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Best-effort expiry check.
///
/// Treats anything undecodable, or a payload without `exp`, as expired.
/// `skew` pushes the comparison point forward so a token that would expire
/// between check and use is already considered stale. Never errors.
#[must_use]
pub fn is_expired(token: &str, skew: Duration) -> bool {
    let Some(payload) = decode_payload(token) else {
        return true;
    };
    let Some(exp) = payload.exp else {
        return true;
    };

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();

    exp < now + skew.as_secs()
}
