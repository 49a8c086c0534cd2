//! EquipsTIC client core.
//!
//! Typed operations over the EquipsTIC inventory REST API: envelope
//! interpretation (the server signals every outcome through a
//! `{status, message, data}` wrapper on HTTP 200), reference hydration for
//! composite equipment records, and optional read-through caching. The HTTP
//! stack itself is behind the [`ports::Transport`] trait and lives in the
//! infrastructure crate.

pub mod client;
pub mod config;
pub mod error;
mod interpret;
mod ops;
pub mod ports;
pub mod request;
pub mod testing;

pub use client::EquipsTicClient;
pub use config::{ClientConfig, DEFAULT_SERVER_TIME_ZONE, DEFAULT_TIMEOUT};
pub use error::{ClientResult, Error, TransportError};
pub use ports::{ReadCache, Transport};
pub use request::{ApiRequest, RequestMethod};
