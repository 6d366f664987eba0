//! Wire response type.
//!
//! The classification boundary hands one of these back to the embedder:
//! an integer status, a header mapping, and a text-or-binary body. HTTP
//! framing is entirely external.

use std::sync::Arc;

use serde::Serialize;
use smallvec::SmallVec;

/// Maximum inline headers before heap allocation.
/// Responses from this crate carry a handful of headers at most.
pub const MAX_INLINE_HEADERS: usize = 8;

/// Stack-allocated header storage.
///
/// Header names use `Arc<str>` instead of `String`: names repeat across
/// responses (Content-Type and friends) and `Arc::clone` is an atomic
/// increment, while values stay `String` because they are per-response data.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Response body payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Body {
    /// No body at all (204 and friends)
    #[default]
    Empty,
    /// Textual body
    Text(String),
    /// Binary body (static file contents)
    Bytes(Vec<u8>),
}

impl Body {
    /// Body length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Body::Empty => 0,
            Body::Text(s) => s.len(),
            Body::Bytes(b) => b.len(),
        }
    }

    /// True when the body carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The body as text, if it is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reason phrase for a status code.
pub(crate) fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Final response produced by classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// HTTP status code (200, 404, 500, etc.)
    pub status: u16,
    /// Response headers (stack-allocated for ≤8 headers)
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body
    pub body: Body,
}

impl Response {
    /// Create a response with the given status, a single `Content-Type`
    /// header, and a textual body.
    #[must_use]
    pub fn text(status: u16, content_type: &str, body: &str) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), content_type.to_string()));
        Self {
            status,
            headers,
            body: Body::Text(body.to_string()),
        }
    }

    /// An HTML response (`text/html`).
    #[must_use]
    pub fn html(status: u16, body: &str) -> Self {
        Self::text(status, "text/html", body)
    }

    /// A JSON response serialized from `body`.
    ///
    /// Serializing a `serde_json::Value` cannot fail, so this is total.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::text(status, "application/json", &body.to_string())
    }

    /// An empty-bodied response.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HeaderVec::new(),
            body: Body::Empty,
        }
    }

    /// The default 404 response.
    #[must_use]
    pub fn not_found() -> Self {
        Self::text(404, "text/plain", "Not Found")
    }

    /// A 403 response with the given message.
    #[must_use]
    pub fn forbidden(message: &str) -> Self {
        Self::text(403, "text/plain", message)
    }

    /// A binary response with the given content type.
    #[must_use]
    pub fn bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), content_type.to_string()));
        Self {
            status,
            headers,
            body: Body::Bytes(body),
        }
    }

    /// Reason phrase for this response's status code.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        status_reason(self.status)
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header (case-insensitive on the name).
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(204), "No Content");
        assert_eq!(status_reason(404), "Not Found");
    }

    #[test]
    fn test_header_case_insensitive() {
        let mut resp = Response::html(200, "<p>hi</p>");
        assert_eq!(resp.get_header("Content-Type"), Some("text/html"));
        resp.set_header("Content-Type", "text/plain".to_string());
        assert_eq!(resp.headers.len(), 1);
        assert_eq!(resp.get_header("content-type"), Some("text/plain"));
    }

    #[test]
    fn test_empty_body() {
        let resp = Response::empty(204);
        assert!(resp.body.is_empty());
        assert_eq!(resp.reason(), "No Content");
    }
}
