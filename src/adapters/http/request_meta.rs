use axum::http::{HeaderMap, header};

use crate::use_cases::waitlist::RequestMetadata;

/// Captures the client context recorded alongside a signup. Missing or
/// unreadable headers leave the field unset rather than failing the request.
pub fn extract_request_metadata(headers: &HeaderMap) -> RequestMetadata {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    RequestMetadata {
        user_agent,
        ip_address: forwarded_ip(headers),
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    // First entry of X-Forwarded-For is the originating client
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
    {
        let trimmed = first.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    None
}
