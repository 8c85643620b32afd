//! Request side of a captured exchange.
//!
//! Request bodies are often streams that can only be consumed once. Every
//! constructor here reads the body a single time and keeps the buffered text,
//! so the builder can look at it as often as it likes.
use std::io::{self, Read};

use super::{authorization_from_headers, content_type_from_headers, normalize_authorization};
use crate::render::is_blank;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    content_type: String,
    body: String,
    authorization: Option<String>,
}

impl HttpRequest {
    /// Creates a request from already buffered parts.
    ///
    /// A blank `authorization` value is treated as no header at all.
    pub fn new<C, B>(content_type: C, body: B, authorization: Option<&str>) -> Self
    where
        C: Into<String>,
        B: Into<String>,
    {
        Self {
            content_type: content_type.into(),
            body: body.into(),
            authorization: normalize_authorization(authorization),
        }
    }

    /// Drains `reader` once and keeps its content as the body.
    ///
    /// Invalid UTF-8 sequences are replaced, documentation is text anyway.
    pub fn from_reader<C, R>(content_type: C, mut reader: R, authorization: Option<&str>) -> io::Result<Self>
    where
        C: Into<String>,
        R: Read,
    {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        Ok(Self::new(content_type, String::from_utf8_lossy(&raw), authorization))
    }

    /// Converts an `http::Request`, pulling content type and authorization from its headers.
    pub fn from_http<B: AsRef<[u8]>>(request: &http::Request<B>) -> Self {
        Self {
            content_type: content_type_from_headers(request.headers()),
            body: String::from_utf8_lossy(request.body().as_ref()).into_owned(),
            authorization: authorization_from_headers(request.headers()),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    pub fn has_body(&self) -> bool {
        !is_blank(&self.body)
    }
}
