//! In-memory test doubles for the client's ports.
//!
//! Used by this crate's unit and integration tests; exposed publicly so
//! adapter crates and embedders can exercise code built on the client
//! without a live server.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use equipstic_domain::{Envelope, EnvelopeStatus, RawEnvelope};
use serde_json::Value;

use crate::error::TransportError;
use crate::ports::{ReadCache, Transport};
use crate::request::ApiRequest;

/// Builds a success envelope around `data`.
#[must_use]
pub fn success(data: Value) -> RawEnvelope {
    Envelope {
        status: EnvelopeStatus::Success,
        message: Some("Ok".to_owned()),
        data: Some(data),
    }
}

/// Builds a failure envelope with the given message.
#[must_use]
pub fn failure(message: &str) -> RawEnvelope {
    Envelope {
        status: EnvelopeStatus::Fail,
        message: Some(message.to_owned()),
        data: None,
    }
}

/// Builds the server's not-found reply for a resource description, e.g.
/// `not_found("La infraestructura 999")`.
#[must_use]
pub fn not_found(subject: &str) -> RawEnvelope {
    failure(&format!("{subject} no existeix"))
}

type ScriptedReply = Result<Option<RawEnvelope>, TransportError>;

/// A transport that serves scripted replies keyed by request path and
/// records every call it receives.
///
/// Replies scripted for the same path are served in order; the last one is
/// sticky and keeps being served, so repeated lookups (hydration, cache-miss
/// retries) do not need duplicate scripting.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Vec<ScriptedReply>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    /// Creates an empty scripted transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts an envelope reply for `path` (e.g. `"/campus/3"`).
    pub fn reply(&self, path: &str, envelope: RawEnvelope) {
        self.push(path, Ok(Some(envelope)));
    }

    /// Scripts an empty-body reply (no envelope at all) for `path`.
    pub fn reply_empty(&self, path: &str) {
        self.push(path, Ok(None));
    }

    /// Scripts a transport-level failure for `path`.
    pub fn reply_error(&self, path: &str, error: TransportError) {
        self.push(path, Err(error));
    }

    /// Paths of all calls received, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(&self, path: &str, reply: ScriptedReply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_owned())
            .or_default()
            .push(reply);
    }

    fn take(&self, path: &str) -> ScriptedReply {
        let mut replies = self.replies.lock().unwrap_or_else(PoisonError::into_inner);
        match replies.get_mut(path) {
            Some(queue) if queue.len() > 1 => queue.remove(0),
            Some(queue) => queue
                .first()
                .cloned()
                .unwrap_or_else(|| Err(TransportError::Other(format!("unscripted path {path}")))),
            None => Err(TransportError::Other(format!("unscripted path {path}"))),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Option<RawEnvelope>, TransportError> {
        let path = request.path();
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.clone());
        self.take(&path)
    }
}

/// A plain in-memory cache with no expiry, recording put counts.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Value>>,
    puts: Mutex<usize>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful outcomes stored so far.
    #[must_use]
    pub fn put_count(&self) -> usize {
        *self.puts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ReadCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    async fn put(&self, key: String, value: Value) {
        *self.puts.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
    }
}
