//! Read-cache port.

use async_trait::async_trait;
use serde_json::Value;

/// Port for the optional read-through cache.
///
/// Keys are request paths (operation identity plus arguments). The core only
/// ever stores successful read outcomes: a present payload, the `Null`
/// sentinel for an absent entity, or a list payload. Failures are never
/// stored. Expiry is entirely the adapter's concern; the core performs no
/// invalidation, so mutations do not purge stale reads.
#[async_trait]
pub trait ReadCache: Send + Sync {
    /// Returns the cached outcome for `key`, if one is present and fresh.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores a successful read outcome under `key`.
    async fn put(&self, key: String, value: Value);
}
