//! EquipsTIC Domain - Core entity types
//!
//! This crate defines the data model for the EquipsTIC inventory API client:
//! the reply envelope, the catalogue entities, the composite equipment record
//! and its stub/resolved entity references. All types here are pure Rust with
//! no I/O dependencies.

pub mod campus;
pub mod catalog;
pub mod dates;
pub mod envelope;
pub mod equipment;
pub mod reference;
pub mod unit;
pub mod user;

pub use campus::{Building, Campus};
pub use catalog::{
    Brand, Category, InfrastructureType, NetworkType, OperatingSystem, Scope, Status, UsageType,
};
pub use dates::ServerLocalDateTime;
pub use envelope::{Envelope, EnvelopeStatus, RawEnvelope};
pub use equipment::Equipment;
pub use reference::{Entity, EntityId, EntityRef};
pub use unit::Unit;
pub use user::EquipmentUser;
