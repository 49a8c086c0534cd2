//! The EquipsTIC client and its generic dispatch routine.
//!
//! Every typed operation is a one-line parameter substitution into one of
//! the generic helpers here: entity/list reads (with read-through caching
//! and natural-ordering sort) and create/update/delete mutations. The
//! endpoint-specific decision logic lives in [`crate::interpret`] and in the
//! hydration code under `ops`.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientResult, Error};
use crate::interpret;
use crate::ports::{ReadCache, Transport};
use crate::request::ApiRequest;

/// Typed client over the EquipsTIC inventory REST API.
///
/// Stateless between calls: operations share only the transport and the
/// optional cache, so a client can be used freely from concurrent tasks.
/// List operations return entities in their natural order (where the type
/// defines one) regardless of wire order; single-entity lookups return
/// `Ok(None)` when the server reports the resource does not exist.
#[derive(Clone)]
pub struct EquipsTicClient {
    transport: Arc<dyn Transport>,
    cache: Option<Arc<dyn ReadCache>>,
}

impl EquipsTicClient {
    /// Creates a client without a read cache.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: None,
        }
    }

    /// Creates a client with a read-through cache for read operations.
    ///
    /// Only successful outcomes are cached; entries expire solely per the
    /// cache's own policy. Mutations do not purge cached reads.
    #[must_use]
    pub fn with_cache(transport: Arc<dyn Transport>, cache: Arc<dyn ReadCache>) -> Self {
        Self {
            transport,
            cache: Some(cache),
        }
    }

    /// Fetches a single entity; `Ok(None)` when the server reports it does
    /// not exist (or the payload is legitimately null).
    pub(crate) async fn get_entity<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> ClientResult<Option<T>> {
        let request = ApiRequest::get(segments);
        self.read_through(&request, interpret::entity_payload, interpret::decode_entity)
            .await
    }

    /// Fetches a list, preserving server order. `Ok(vec![])` when there is
    /// nothing to return; list callers can never observe "absent".
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> ClientResult<Vec<T>> {
        let request = ApiRequest::get(segments);
        self.read_through(&request, interpret::list_payload, interpret::decode_list)
            .await
    }

    /// Fetches a list and sorts it by the entity's natural ordering, so two
    /// calls observing the same set produce identical orderings regardless
    /// of wire order.
    pub(crate) async fn get_sorted_list<T: DeserializeOwned + Ord>(
        &self,
        segments: &[&str],
    ) -> ClientResult<Vec<T>> {
        let mut entities = self.get_list(segments).await?;
        entities.sort();
        Ok(entities)
    }

    /// Creates an entity and returns the server's stored copy.
    pub(crate) async fn post_entity<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        let request = ApiRequest::post(segments, encode_body(body)?);
        self.mutate(request).await
    }

    /// Updates an entity and returns the server's stored copy.
    pub(crate) async fn put_entity<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ClientResult<T> {
        let request = ApiRequest::put(segments, encode_body(body)?);
        self.mutate(request).await
    }

    /// Deletes an entity.
    pub(crate) async fn delete_entity(&self, segments: &[&str]) -> ClientResult<()> {
        let request = ApiRequest::delete(segments);
        tracing::debug!(path = %request.path(), "DELETE");
        let reply = self.transport.execute(&request).await?;
        interpret::deletion_outcome(reply).inspect_err(|error| {
            tracing::warn!(path = %request.path(), %error, "delete failed");
        })
    }

    async fn mutate<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        tracing::debug!(path = %request.path(), method = request.method.as_str(), "mutation");
        let reply = self.transport.execute(&request).await?;
        let payload = interpret::mutation_payload(reply).inspect_err(|error| {
            tracing::warn!(path = %request.path(), %error, "mutation failed");
        })?;
        interpret::decode(payload)
    }

    /// Runs a read through the cache: a fresh hit short-circuits the
    /// transport; a successful, decodable outcome (including the `Null`
    /// absence sentinel) is stored on the way out. Failures are never
    /// stored, including payloads that do not decode to the operation's
    /// entity shape, so a failed read is re-issued on the next call.
    async fn read_through<T>(
        &self,
        request: &ApiRequest,
        classify: fn(Option<equipstic_domain::RawEnvelope>) -> ClientResult<Option<Value>>,
        decode: fn(Option<Value>) -> ClientResult<T>,
    ) -> ClientResult<T> {
        let key = request.path();
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                tracing::debug!(path = %key, "cache hit");
                return decode(match hit {
                    Value::Null => None,
                    value => Some(value),
                });
            }
        }
        tracing::debug!(path = %key, "GET");
        let reply = self.transport.execute(request).await?;
        let payload = classify(reply).inspect_err(|error| {
            tracing::warn!(path = %key, %error, "read failed");
        })?;
        let decoded = decode(payload.clone())?;
        if let Some(cache) = &self.cache {
            cache.put(key, payload.unwrap_or(Value::Null)).await;
        }
        Ok(decoded)
    }
}

fn encode_body<B: Serialize>(body: &B) -> ClientResult<Value> {
    serde_json::to_value(body).map_err(|error| Error::Decode(error.to_string()))
}

/// Validates a required string parameter before any network call.
pub(crate) fn require_param<'a>(name: &str, value: &'a str) -> ClientResult<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "parameter '{name}' can not be blank"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_parameters_are_rejected() {
        assert!(matches!(
            require_param("codi", "   "),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            require_param("codi", ""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_blank_parameters_pass_through() {
        assert_eq!(require_param("codi", "B4").ok(), Some("B4"));
    }
}
