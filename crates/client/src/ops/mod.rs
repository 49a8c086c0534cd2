//! Typed operations, grouped by resource.
//!
//! Everything here is mechanical parameter substitution into the generic
//! dispatch on [`crate::EquipsTicClient`]; the only real logic is the
//! equipment hydration in [`equipment`].

mod campus;
mod catalog;
mod equipment;
mod units;
