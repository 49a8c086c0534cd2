//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port over HTTPS with Basic auth.
//! It also papers over a server quirk: reply bodies are JSON but arrive
//! labelled `text/plain`, so the body is always parsed as JSON without
//! consulting the `Content-Type` header.

use equipstic_client::ports::Transport;
use equipstic_client::request::{ApiRequest, RequestMethod};
use equipstic_client::{ClientConfig, TransportError};
use equipstic_domain::RawEnvelope;
use reqwest::{Client, Method, Url};

use async_trait::async_trait;
use std::time::Duration;

/// Transport implementation using reqwest.
///
/// Wraps `reqwest::Client` with the base URL, Basic-Auth credentials and
/// per-request timeout from [`ClientConfig`]. Failures are never retried.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport from a client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("equipstic-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        })
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        }
    }

    /// Converts the request verb to a reqwest `Method`.
    const fn to_method(method: RequestMethod) -> Method {
        match method {
            RequestMethod::Get => Method::GET,
            RequestMethod::Post => Method::POST,
            RequestMethod::Put => Method::PUT,
            RequestMethod::Delete => Method::DELETE,
        }
    }

    /// Joins the request's path segments onto the base URL.
    ///
    /// Segments are pushed individually so each one is percent-encoded;
    /// the core never formats URLs by string concatenation.
    fn build_url(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| TransportError::InvalidUrl("base URL cannot be a base".to_owned()))?;
            segments.pop_if_empty().extend(&request.segments);
        }
        Ok(url)
    }

    /// Maps reqwest errors to [`TransportError`].
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let host = error.url().and_then(Url::host_str).unwrap_or("unknown");
            return Self::classify_connect(host, error.to_string());
        }

        TransportError::Other(error.to_string())
    }

    /// Decodes a reply body into an envelope.
    ///
    /// An empty body is a legal reply (`Ok(None)`); anything else must be a
    /// JSON envelope. The server labels its JSON replies `text/plain`, so
    /// the `Content-Type` header is ignored and the body parsed as JSON
    /// unconditionally.
    fn parse_body(bytes: &[u8]) -> Result<Option<RawEnvelope>, TransportError> {
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(bytes)
            .map(Some)
            .map_err(|e| TransportError::MalformedBody(e.to_string()))
    }

    /// Splits connection failures into name-resolution and everything else.
    /// reqwest does not expose the distinction structurally, so it is read
    /// off the error text.
    fn classify_connect(host: &str, message: String) -> TransportError {
        let lowered = message.to_lowercase();
        if lowered.contains("dns") || lowered.contains("resolve") {
            return TransportError::Dns {
                host: host.to_owned(),
                message,
            };
        }
        TransportError::Connection(message)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<RawEnvelope>, TransportError> {
        let url = self.build_url(request)?;
        let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);

        let mut builder = self
            .client
            .request(Self::to_method(request.method), url)
            .basic_auth(&self.username, Some(&self.password))
            .timeout(self.timeout);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = request.method.as_str(), path = %request.path(), "api call");

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;
        let status = response.status();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("failed to read body: {e}")))?;
        if bytes.is_empty() {
            tracing::debug!(status = status.as_u16(), "empty reply body");
        }
        Self::parse_body(&bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn transport(base: &str) -> ReqwestTransport {
        let config = ClientConfig::new(Url::parse(base).unwrap(), "user", "secret");
        ReqwestTransport::new(&config).unwrap()
    }

    #[test]
    fn verbs_map_one_to_one() {
        assert_eq!(ReqwestTransport::to_method(RequestMethod::Get), Method::GET);
        assert_eq!(
            ReqwestTransport::to_method(RequestMethod::Post),
            Method::POST
        );
        assert_eq!(ReqwestTransport::to_method(RequestMethod::Put), Method::PUT);
        assert_eq!(
            ReqwestTransport::to_method(RequestMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn segments_join_onto_the_base_path() {
        let transport = transport("https://soa.example.com/equipstic/");
        let url = transport
            .build_url(&ApiRequest::get(&["campus", "cerca", "codi", "NO"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://soa.example.com/equipstic/campus/cerca/codi/NO"
        );
    }

    #[test]
    fn base_without_trailing_slash_works_too() {
        let transport = transport("https://soa.example.com/equipstic");
        let url = transport
            .build_url(&ApiRequest::get(&["infraestructura", "42"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://soa.example.com/equipstic/infraestructura/42"
        );
    }

    #[test]
    fn empty_body_is_a_missing_envelope_not_an_error() {
        assert_eq!(ReqwestTransport::parse_body(b"").unwrap(), None);
    }

    #[test]
    fn body_is_parsed_as_json_whatever_the_label_says() {
        let envelope = ReqwestTransport::parse_body(
            br#"{"status":"success","message":"Ok","data":{"idCampus":3}}"#,
        )
        .unwrap()
        .unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = ReqwestTransport::parse_body(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(TransportError::MalformedBody(_))));
    }

    #[test]
    fn connect_failures_mentioning_resolution_map_to_dns() {
        let error = ReqwestTransport::classify_connect(
            "soa.example.com",
            "error trying to connect: dns error: failed to lookup address".to_owned(),
        );
        assert!(matches!(
            error,
            TransportError::Dns { host, .. } if host == "soa.example.com"
        ));
    }

    #[test]
    fn other_connect_failures_map_to_connection() {
        let error = ReqwestTransport::classify_connect(
            "soa.example.com",
            "error trying to connect: Connection refused (os error 111)".to_owned(),
        );
        assert!(matches!(error, TransportError::Connection(_)));
    }

    #[test]
    fn segments_are_percent_encoded() {
        let transport = transport("https://soa.example.com/equipstic");
        let url = transport
            .build_url(&ApiRequest::get(&["unitat", "cerca", "nom", "Serveis TIC"]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://soa.example.com/equipstic/unitat/cerca/nom/Serveis%20TIC"
        );
    }
}
