//! Captured HTTP exchanges.
//!
//! The host test runner hands us whatever its web stack produced. These types
//! are the normalized view the document builder works on: plain strings, an
//! already extracted `Authorization` value and a fully buffered body.
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderMap;

pub mod request;
pub mod response;

pub use request::HttpRequest;
pub use response::HttpResponse;

/// Returns the `Content-Type` header as a string, or an empty string when absent
/// or not valid visible ASCII.
pub fn content_type_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Returns the `Authorization` header value, if one with non-blank content is present.
pub fn authorization_from_headers(headers: &HeaderMap) -> Option<String> {
    normalize_authorization(headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()))
}

pub(crate) fn normalize_authorization(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
