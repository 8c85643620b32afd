//! Response side of a captured exchange.
//!
//! ## Notes
//! - The body is kept as text. Binary payloads end up lossily converted, but
//!   only JSON bodies are ever printed.
//! - `content_type` is the raw header value, parameters included
//!   (e.g. `application/json; charset=utf-8`).
use super::content_type_from_headers;
use crate::render::is_blank;

/// Fully buffered response as observed by the test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status code (e.g., `200`, `404`).
    status: u16,

    /// Raw `Content-Type` header value, empty when absent.
    content_type: String,

    /// Response body, possibly empty.
    body: String,
}

impl HttpResponse {
    pub fn new<C, B>(status: u16, content_type: C, body: B) -> Self
    where
        C: Into<String>,
        B: Into<String>,
    {
        Self {
            status,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Converts an `http::Response`, taking the content type from its headers.
    pub fn from_http<B: AsRef<[u8]>>(response: &http::Response<B>) -> Self {
        Self {
            status: response.status().as_u16(),
            content_type: content_type_from_headers(response.headers()),
            body: String::from_utf8_lossy(response.body().as_ref()).into_owned(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn has_body(&self) -> bool {
        !is_blank(&self.body)
    }
}
