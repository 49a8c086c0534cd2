//! Request descriptions handed to the transport.
//!
//! An [`ApiRequest`] is a declarative description of one endpoint call:
//! verb, path segments and optional JSON body. The transport owns joining
//! the segments onto the base URL (with percent-encoding); the core never
//! formats URLs by string concatenation.

use serde_json::Value;

/// HTTP verb of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// Read operation.
    Get,
    /// Create operation.
    Post,
    /// Update operation.
    Put,
    /// Delete operation.
    Delete,
}

impl RequestMethod {
    /// Returns the verb as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One endpoint call: verb, path segments relative to the API base URL and
/// an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: RequestMethod,
    /// Path segments, unencoded. The transport percent-encodes each one.
    pub segments: Vec<String>,
    /// JSON body for mutating calls.
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: RequestMethod, segments: &[&str], body: Option<Value>) -> Self {
        Self {
            method,
            segments: segments.iter().map(ToString::to_string).collect(),
            body,
        }
    }

    /// A GET request for the given path segments.
    #[must_use]
    pub fn get(segments: &[&str]) -> Self {
        Self::new(RequestMethod::Get, segments, None)
    }

    /// A POST request carrying `body`.
    #[must_use]
    pub fn post(segments: &[&str], body: Value) -> Self {
        Self::new(RequestMethod::Post, segments, Some(body))
    }

    /// A PUT request carrying `body`.
    #[must_use]
    pub fn put(segments: &[&str], body: Value) -> Self {
        Self::new(RequestMethod::Put, segments, Some(body))
    }

    /// A DELETE request for the given path segments.
    #[must_use]
    pub fn delete(segments: &[&str]) -> Self {
        Self::new(RequestMethod::Delete, segments, None)
    }

    /// The request path as `/a/b/c`.
    ///
    /// Used as the cache key (all cacheable operations are GETs, so the path
    /// fully identifies operation and arguments) and in log lines. `/` and
    /// `%` inside a segment are escaped, so two distinct segment lists can
    /// never produce the same path.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            for ch in segment.chars() {
                match ch {
                    '%' => path.push_str("%25"),
                    '/' => path.push_str("%2F"),
                    other => path.push(other),
                }
            }
        }
        path
    }
}
