//! Envelope interpretation.
//!
//! The server answers HTTP 200 for every outcome, including "resource not
//! found" and hard errors; the only signals are the envelope's `status` tag
//! and `message` text. Not-found in particular is reported as a failure
//! status whose message contains the phrase "no existeix"; there is no
//! dedicated status code for it. This module is the single place that knows
//! that convention; if the server ever grows a proper not-found status, only
//! this module changes.

use equipstic_domain::RawEnvelope;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientResult, Error, TransportError};

/// Case-insensitive marker the server embeds in `message` when the
/// identified resource does not exist. Server convention, not ours.
const NOT_FOUND_MARKER: &str = "no existeix";

/// Whether a failure envelope is the server's way of saying "not found".
///
/// A missing message never matches: the marker lives in the message text and
/// nowhere else, so without a message the failure is a real failure.
fn marks_not_found(envelope: &RawEnvelope) -> bool {
    envelope
        .message
        .as_deref()
        .is_some_and(|message| message.to_lowercase().contains(NOT_FOUND_MARKER))
}

/// Classifies a single-entity reply.
///
/// Returns `Ok(Some(payload))` on success with a payload, `Ok(None)` both
/// for a success with a null payload and for the not-found convention, and
/// an error otherwise. Callers distinguish "no such resource" from "call
/// failed" structurally, never by matching message text themselves.
pub(crate) fn entity_payload(reply: Option<RawEnvelope>) -> ClientResult<Option<Value>> {
    let Some(envelope) = reply else {
        return Err(TransportError::EmptyReply.into());
    };
    if envelope.is_success() {
        return Ok(match envelope.data {
            None | Some(Value::Null) => None,
            data => data,
        });
    }
    if marks_not_found(&envelope) {
        return Ok(None);
    }
    Err(Error::remote(envelope))
}

/// Classifies a list reply.
///
/// Identical to [`entity_payload`], except that absence is normalized away:
/// a null payload and a not-found failure both come back as `Ok(None)` here
/// and decode to an empty list, so list callers can never observe "absent".
pub(crate) fn list_payload(reply: Option<RawEnvelope>) -> ClientResult<Option<Value>> {
    entity_payload(reply)
}

/// Classifies a create/update reply. Mutations get no not-found masking:
/// any failure status is an error, and a successful mutation must return
/// the stored entity.
pub(crate) fn mutation_payload(reply: Option<RawEnvelope>) -> ClientResult<Value> {
    let Some(envelope) = reply else {
        return Err(TransportError::EmptyReply.into());
    };
    if !envelope.is_success() {
        return Err(Error::remote(envelope));
    }
    match envelope.data {
        None | Some(Value::Null) => Err(Error::Decode(
            "mutation reply carried no entity payload".to_owned(),
        )),
        Some(data) => Ok(data),
    }
}

/// Classifies a delete reply: success carries no payload of interest.
pub(crate) fn deletion_outcome(reply: Option<RawEnvelope>) -> ClientResult<()> {
    let Some(envelope) = reply else {
        return Err(TransportError::EmptyReply.into());
    };
    if envelope.is_success() {
        Ok(())
    } else {
        Err(Error::remote(envelope))
    }
}

/// Decodes a payload value into the operation's entity type.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|error| Error::Decode(error.to_string()))
}

/// Decodes an optional entity payload, passing absence through.
pub(crate) fn decode_entity<T: DeserializeOwned>(value: Option<Value>) -> ClientResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(payload) => decode(payload).map(Some),
    }
}

/// Decodes an optional list payload, normalizing absence to an empty list.
pub(crate) fn decode_list<T: DeserializeOwned>(value: Option<Value>) -> ClientResult<Vec<T>> {
    match value {
        None => Ok(Vec::new()),
        Some(payload) => decode(payload),
    }
}
