//! Equipment users.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::reference::{Entity, EntityId};

/// A person registered as the user of a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentUser {
    /// Server identifier.
    #[serde(rename = "idUsuariInfraestructura")]
    pub id: EntityId,
    /// Given name.
    #[serde(rename = "nom")]
    pub name: String,
    /// First surname.
    #[serde(rename = "cognom1", default)]
    pub first_surname: Option<String>,
    /// Second surname.
    #[serde(rename = "cognom2", default)]
    pub second_surname: Option<String>,
}

impl Entity for EquipmentUser {
    const ID_FIELD: &'static str = "idUsuariInfraestructura";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Ord for EquipmentUser {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.first_surname.cmp(&other.first_surname))
            .then_with(|| self.second_surname.cmp(&other.second_surname))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for EquipmentUser {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
