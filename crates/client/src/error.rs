//! Client error types.

use equipstic_domain::{EntityId, RawEnvelope};
use thiserror::Error;

/// Failures below the envelope protocol: the call never produced a reply
/// envelope to interpret.
///
/// Transport errors are never retried internally; they surface immediately
/// to the caller.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The host could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host that failed to resolve.
        host: String,
        /// Underlying resolver message.
        message: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The reply body was not a well-formed envelope.
    #[error("malformed reply body: {0}")]
    MalformedBody(String),

    /// The server replied with an empty body where an envelope was expected.
    #[error("server returned no envelope")]
    EmptyReply,

    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors surfaced by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No envelope was received; see [`TransportError`].
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The envelope arrived but its status marks a failure (other than the
    /// not-found convention, which is reported as an absent result instead).
    #[error("remote operation failed: {message}")]
    RemoteOperation {
        /// The server's diagnostic message, verbatim.
        message: String,
        /// The raw envelope, when one was received.
        envelope: Option<RawEnvelope>,
    },

    /// A local precondition failed; no network call was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A success envelope carried a payload that does not match the
    /// operation's entity shape.
    #[error("could not decode payload: {0}")]
    Decode(String),
}

impl Error {
    /// Builds a [`Error::RemoteOperation`] from a failure envelope,
    /// preserving the server's message verbatim.
    pub(crate) fn remote(envelope: RawEnvelope) -> Self {
        let message = envelope
            .message
            .clone()
            .unwrap_or_else(|| "remote operation failed without a message".to_owned());
        Self::RemoteOperation {
            message,
            envelope: Some(envelope),
        }
    }

    /// A relation lookup came back absent for an identifier that was
    /// populated moments ago: the record was mutated concurrently. Reported
    /// as a remote failure so callers never see a half-hydrated record.
    pub(crate) fn stale_reference(resource: &str, id: EntityId) -> Self {
        Self::RemoteOperation {
            message: format!("could not resolve {resource} {id}: the entity no longer exists"),
            envelope: None,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, Error>;
