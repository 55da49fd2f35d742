use axum::http::HeaderMap;
use subtle::ConstantTimeEq;

/// Constant-time string comparison to prevent timing attacks
/// Use this for comparing API keys and other sensitive values
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Pull the caller's API key from `Authorization: Bearer <key>` or `X-API-Key`.
pub fn presented_api_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(bearer) = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(bearer.trim());
    }
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
}

/// Whether the request carries the expected API key.
pub fn is_authorized(headers: &HeaderMap, expected: &str) -> bool {
    presented_api_key(headers)
        .map(|key| constant_time_compare(key, expected))
        .unwrap_or(false)
}
