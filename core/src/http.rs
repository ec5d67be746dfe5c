//! HTTP transport types and the transport seam.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe HTTP exchanges as plain data.
//! The core crate builds requests and interprets responses without ever
//! touching the network — the `Transport` implementation supplied by the
//! host performs the actual I/O. This separation keeps the core
//! deterministic and lets tests assert on the exact requests an operation
//! produces (including that no request is produced at all when
//! configuration is missing).
//!
//! All fields use owned types (`String`, `Vec`) so values can be recorded
//! and replayed by test doubles without lifetime concerns.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// An HTTP request described as plain data.
///
/// Built by the request executor. `query` carries parameters for GET-style
/// calls; mutating calls put their arguments in `body` as JSON instead.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A failure below the HTTP layer: connection refused, DNS, TLS, timeout.
///
/// Status codes are not transport errors — a transport must hand back any
/// response it received, whatever the status, and let the executor
/// interpret it.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// The single I/O seam of the crate.
///
/// Implementations execute one blocking HTTP exchange per call. No retry,
/// timeout, or redirect policy is imposed here; whatever the implementation
/// does is what the client gets.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
