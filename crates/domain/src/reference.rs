//! Entity identifiers and stub/resolved entity references.
//!
//! Nested relation objects on composite records arrive from the server with
//! only their identifier attribute populated (every other attribute is at its
//! zero value). Nothing in the payload marks them as shallow; it is a
//! documented server contract. [`EntityRef`] makes that contract explicit:
//! deserializing a relation always yields a [`EntityRef::Stub`], and only a
//! follow-up lookup turns it into [`EntityRef::Resolved`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Numeric identifier shared by all EquipsTIC entities.
pub type EntityId = i64;

/// An entity with a server-side numeric identifier.
pub trait Entity: Serialize {
    /// Wire name of the identifier attribute (e.g. `"idMarca"`).
    const ID_FIELD: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> EntityId;
}

/// A relation field on a composite record: either a shallow stub carrying
/// only the identifier, or a fully populated entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRef<T> {
    /// Only the identifier arrived on the wire; the rest of the entity must
    /// be fetched with a lookup-by-identifier call.
    Stub(EntityId),
    /// Fully populated by a follow-up lookup (or built locally).
    Resolved(T),
}

impl<T: Entity> EntityRef<T> {
    /// Returns the referenced entity's identifier, resolved or not.
    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Self::Stub(id) => *id,
            Self::Resolved(entity) => entity.id(),
        }
    }

    /// Returns the resolved entity, if this reference has been hydrated.
    #[must_use]
    pub const fn resolved(&self) -> Option<&T> {
        match self {
            Self::Stub(_) => None,
            Self::Resolved(entity) => Some(entity),
        }
    }

    /// Returns whether this reference still needs hydration.
    #[must_use]
    pub const fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }
}

impl<T: Entity> Serialize for EntityRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // A stub round-trips as an object with just the id attribute,
            // which is all the server ever reads from a relation.
            Self::Stub(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(T::ID_FIELD, id)?;
                map.end()
            }
            Self::Resolved(entity) => entity.serialize(serializer),
        }
    }
}

impl<'de, T: Entity> Deserialize<'de> for EntityRef<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only the identifier in a relation object is trustworthy; the other
        // attributes arrive zeroed. Decode just the id and stay a stub.
        let value = serde_json::Value::deserialize(deserializer)?;
        let id = value
            .get(T::ID_FIELD)
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| {
                de::Error::custom(format_args!(
                    "relation object is missing a numeric `{}` attribute",
                    T::ID_FIELD
                ))
            })?;
        Ok(Self::Stub(id))
    }
}

impl<T: Entity> fmt::Display for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stub(id) => write!(f, "#{id}"),
            Self::Resolved(entity) => write!(f, "#{}", entity.id()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::catalog::Brand;

    #[test]
    fn deserializing_a_relation_object_yields_a_stub() {
        let reference: EntityRef<Brand> =
            serde_json::from_value(json!({"idMarca": 17, "nom": ""})).unwrap();
        assert_eq!(reference, EntityRef::Stub(17));
        assert!(reference.is_stub());
        assert_eq!(reference.id(), 17);
    }

    #[test]
    fn relation_object_without_identifier_is_rejected() {
        let result: Result<EntityRef<Brand>, _> = serde_json::from_value(json!({"nom": "Dell"}));
        assert!(result.is_err());
    }

    #[test]
    fn stub_serializes_as_id_only_object() {
        let reference: EntityRef<Brand> = EntityRef::Stub(17);
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({"idMarca": 17})
        );
    }

    #[test]
    fn resolved_serializes_as_full_entity() {
        let reference = EntityRef::Resolved(Brand {
            id: 17,
            name: "Dell".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({"idMarca": 17, "nom": "Dell"})
        );
        assert_eq!(reference.resolved().map(|b| b.name.as_str()), Some("Dell"));
    }
}
