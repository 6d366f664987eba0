//! Incoming request record.
//!
//! The core inspects method, path, scheme, and host directly; everything
//! else (headers, params, body) rides along opaquely for handler bodies.
//! Transport and body parsing live outside this crate - embedders build a
//! [`Request`] from whatever wire representation they have.

use http::Method;
use std::collections::HashMap;

/// An HTTP-like request as seen by the routing core.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path, possibly including a query string
    pub path: String,
    /// URI scheme (`http`, `https`, ...)
    pub scheme: String,
    /// Host name from the request
    pub host: String,
    /// HTTP headers (lowercase keys)
    pub headers: HashMap<String, String>,
    /// Pre-parsed form/query parameters supplied by the embedder
    pub params: HashMap<String, String>,
    /// Parsed JSON body (if the embedder parsed one)
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Build a request with the given method and path and default everything
    /// else (`http` scheme, `localhost` host, no headers, params, or body).
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            headers: HashMap::new(),
            params: HashMap::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request to `path`.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request to `path`.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Replace the scheme, builder-style.
    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Replace the host, builder-style.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Add a header, builder-style. Keys are lowercased.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Attach a JSON body, builder-style.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Get a header by name (case-insensitive lookup over lowercase keys).
    #[inline]
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Query string parameters parsed from the path.
    #[must_use]
    pub fn query_params(&self) -> HashMap<String, String> {
        parse_query_params(&self.path)
    }

    /// Cookies parsed from the `Cookie` header.
    #[must_use]
    pub fn cookies(&self) -> HashMap<String, String> {
        parse_cookies(&self.headers)
    }
}

/// Parse cookies out of a header map's `cookie` entry.
#[must_use]
pub fn parse_cookies(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .get("cookie")
        .map(|c| {
            c.split(';')
                .filter_map(|pair| {
                    let mut parts = pair.trim().splitn(2, '=');
                    let name = parts.next()?.trim().to_string();
                    let value = parts.next().unwrap_or("").trim().to_string();
                    Some((name, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse query string parameters from a URL path.
///
/// Extracts everything after the `?` character and URL-decodes parameter
/// names and values.
#[must_use]
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    if let Some(pos) = path.find('?') {
        let query_str = &path[pos + 1..];
        url::form_urlencoded::parse(query_str.as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    } else {
        HashMap::new()
    }
}
