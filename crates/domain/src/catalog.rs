//! Catalogue entities: the flat lookup types of the inventory.
//!
//! Each type maps 1:1 to a server resource and keeps the server's Catalan
//! attribute names on the wire. Types that define a natural ordering
//! implement [`Ord`] over their human-readable name; [`Brand`] and
//! [`NetworkType`] deliberately do not, so list operations return them in
//! server order (consumers are known to depend on that order).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reference::{Entity, EntityId};

/// A thematic scope (`ambit`) grouping infrastructure types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Server identifier.
    #[serde(rename = "idAmbit")]
    pub id: EntityId,
    /// Scope name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Scope code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

/// An equipment category (`categoria`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server identifier.
    #[serde(rename = "idCategoria")]
    pub id: EntityId,
    /// Category name.
    #[serde(rename = "nom")]
    pub name: String,
}

/// A lifecycle status (`estat`), also used for validation states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Server identifier.
    #[serde(rename = "idEstat")]
    pub id: EntityId,
    /// Status name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Status code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

/// A manufacturer brand (`marca`). No natural ordering: lists keep server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Server identifier.
    #[serde(rename = "idMarca")]
    pub id: EntityId,
    /// Brand name.
    #[serde(rename = "nom")]
    pub name: String,
}

/// A usage type (`tipusUs`) describing what a unit uses equipment for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageType {
    /// Server identifier.
    #[serde(rename = "idTipusUs")]
    pub id: EntityId,
    /// Usage type name.
    #[serde(rename = "nom")]
    pub name: String,
}

/// An infrastructure type (`tipusInfraestructura`), e.g. laptop or switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfrastructureType {
    /// Server identifier.
    #[serde(rename = "idTipus")]
    pub id: EntityId,
    /// Type name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Type code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

/// A network type (`tipusXarxa`). No natural ordering: lists keep server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkType {
    /// Server identifier.
    #[serde(rename = "idTipusXarxa")]
    pub id: EntityId,
    /// Network type name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Network type code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

/// An operating system record (`sistemaOperatiu`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSystem {
    /// Server identifier.
    #[serde(rename = "idSistemaOperatiu")]
    pub id: EntityId,
    /// Operating system name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Operating system code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

impl Entity for Scope {
    const ID_FIELD: &'static str = "idAmbit";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Category {
    const ID_FIELD: &'static str = "idCategoria";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Status {
    const ID_FIELD: &'static str = "idEstat";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Brand {
    const ID_FIELD: &'static str = "idMarca";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for UsageType {
    const ID_FIELD: &'static str = "idTipusUs";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for InfrastructureType {
    const ID_FIELD: &'static str = "idTipus";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for NetworkType {
    const ID_FIELD: &'static str = "idTipusXarxa";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for OperatingSystem {
    const ID_FIELD: &'static str = "idSistemaOperatiu";

    fn id(&self) -> EntityId {
        self.id
    }
}

// Natural ordering: by name, with the identifier as tie-breaker so the
// ordering stays total over entities sharing a name.

macro_rules! natural_order_by_name {
    ($type:ty) => {
        impl Ord for $type {
            fn cmp(&self, other: &Self) -> Ordering {
                self.name
                    .cmp(&other.name)
                    .then_with(|| self.id.cmp(&other.id))
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

natural_order_by_name!(Scope);
natural_order_by_name!(Category);
natural_order_by_name!(Status);
natural_order_by_name!(UsageType);
natural_order_by_name!(InfrastructureType);
natural_order_by_name!(OperatingSystem);

pub(crate) use natural_order_by_name;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn status(id: EntityId, name: &str) -> Status {
        Status {
            id,
            name: name.to_owned(),
            code: None,
        }
    }

    #[test]
    fn statuses_order_by_name_then_id() {
        let mut statuses = vec![status(3, "En ús"), status(1, "Baixa"), status(2, "En ús")];
        statuses.sort();
        assert_eq!(
            statuses.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn unknown_wire_attributes_are_ignored() {
        let brand: Brand =
            serde_json::from_str(r#"{"idMarca": 5, "nom": "Lenovo", "obsolet": false}"#).unwrap();
        assert_eq!(brand.id, 5);
        assert_eq!(brand.name, "Lenovo");
    }

    #[test]
    fn status_round_trips_with_catalan_wire_names() {
        let status = Status {
            id: 9,
            name: "En garantia".to_owned(),
            code: Some("GAR".to_owned()),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["idEstat"], 9);
        assert_eq!(value["nom"], "En garantia");
        assert_eq!(value["codi"], "GAR");
    }
}
