//! EquipsTIC Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined by the
//! client crate: a reqwest-backed transport and a moka-backed read cache,
//! plus convenience constructors that wire them into a ready-to-use client.

use std::sync::Arc;
use std::time::Duration;

use equipstic_client::{ClientConfig, EquipsTicClient, TransportError};

pub mod adapters;

pub use adapters::{MokaReadCache, ReqwestTransport};

/// Builds a client over HTTPS with the given configuration.
///
/// # Errors
///
/// Returns a [`TransportError`] if the underlying HTTP client cannot be
/// constructed.
pub fn connect(config: &ClientConfig) -> Result<EquipsTicClient, TransportError> {
    let transport = ReqwestTransport::new(config)?;
    Ok(EquipsTicClient::new(Arc::new(transport)))
}

/// Builds a client over HTTPS with a read-through cache whose entries expire
/// after `ttl`.
///
/// The cache is read-only bookkeeping: mutations do not purge it, so reads
/// issued within `ttl` of a write may observe the pre-write state.
///
/// # Errors
///
/// Returns a [`TransportError`] if the underlying HTTP client cannot be
/// constructed.
pub fn connect_cached(
    config: &ClientConfig,
    ttl: Duration,
) -> Result<EquipsTicClient, TransportError> {
    let transport = ReqwestTransport::new(config)?;
    Ok(EquipsTicClient::with_cache(
        Arc::new(transport),
        Arc::new(MokaReadCache::new(ttl)),
    ))
}
