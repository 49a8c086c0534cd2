//! Transport port.

use async_trait::async_trait;
use equipstic_domain::RawEnvelope;

use crate::error::TransportError;
use crate::request::ApiRequest;

/// Port for executing API calls.
///
/// This trait abstracts the HTTP stack (TLS, Basic auth, timeouts), allowing
/// the core to be exercised against an in-memory fake. Implementations must
/// not retry: every failure propagates immediately.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes one API call and returns the decoded reply envelope.
    ///
    /// Returns `Ok(None)` when the server replied without a body; the
    /// interpreter turns that into [`TransportError::EmptyReply`], keeping
    /// the "never dereference a possibly-missing envelope" rule in one place.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for connection, timeout, DNS or
    /// body-decoding failures.
    async fn execute(&self, request: &ApiRequest) -> Result<Option<RawEnvelope>, TransportError>;
}
