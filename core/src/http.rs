//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `CharacterApi` builder produces `HttpRequest` values and parses
//! `HttpResponse` values without touching the network; a [`Transport`]
//! executes the round-trip in between. Keeping that seam explicit lets tests
//! script responses (and their timing) without a server.
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP method for a request. The character API is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Non-2xx statuses are carried here as ordinary values; interpreting them
/// is the parser's job, not the transport's.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response carrying a JSON body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.into(),
        }
    }

    /// A response with an arbitrary status and body.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
