//! Port implementations backed by third-party libraries.

mod moka_cache;
mod reqwest_transport;

pub use moka_cache::MokaReadCache;
pub use reqwest_transport::ReqwestTransport;
