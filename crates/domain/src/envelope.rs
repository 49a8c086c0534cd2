//! The uniform reply envelope.
//!
//! Every EquipsTIC endpoint wraps its payload in `{status, message, data}`
//! and answers HTTP 200 regardless of outcome; success and failure are
//! signalled only through `status` and `message`.

use serde::{Deserialize, Serialize};

/// Outcome tag carried by every envelope.
///
/// The server uses a closed set of tags; anything outside it is a malformed
/// reply, not a new outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    /// The operation succeeded; `data` carries the payload (possibly null).
    Success,
    /// The operation failed; `data` must be ignored.
    Fail,
}

impl EnvelopeStatus {
    /// Returns whether this tag marks a successful reply.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// A server reply: status tag, free-text diagnostic and optional payload.
///
/// Invariant: `data` is meaningful only when `status` is [`EnvelopeStatus::Success`].
/// On failure the payload must be treated as absent regardless of its literal
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Outcome tag.
    pub status: EnvelopeStatus,
    /// Human-readable diagnostic. Also the only reliable not-found signal.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload: absent, a single entity or a sequence of entities.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns whether the reply marks success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// An envelope whose payload has not been decoded into a concrete entity yet.
pub type RawEnvelope = Envelope<serde_json::Value>;
