//! Port definitions (interfaces).
//!
//! Ports define the boundaries between the client core and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer
//! (or by test doubles in [`crate::testing`]).

mod cache;
mod transport;

pub use cache::ReadCache;
pub use transport::Transport;
