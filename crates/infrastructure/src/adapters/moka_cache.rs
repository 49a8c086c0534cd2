//! Read-cache implementation using moka.

use async_trait::async_trait;
use equipstic_client::ports::ReadCache;
use serde_json::Value;
use std::time::Duration;

const MAX_ENTRIES: u64 = 10_000;

/// Read cache backed by `moka::future::Cache` with time-to-live expiry.
///
/// Stores whatever outcome values the client hands it, keyed by request
/// path. Eviction is by TTL and capacity only; there is no invalidation
/// hook, matching the client's no-purge-on-mutation contract.
pub struct MokaReadCache {
    cache: moka::future::Cache<String, Value>,
}

impl MokaReadCache {
    /// Creates a cache whose entries expire `ttl` after insertion.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: moka::future::Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl ReadCache for MokaReadCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.cache.get(key).await
    }

    async fn put(&self, key: String, value: Value) {
        self.cache.insert(key, value).await;
    }
}
