//! Organisational units.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::natural_order_by_name;
use crate::reference::{Entity, EntityId};

/// An organisational unit (department, school, service).
///
/// A unit has two other identifying attributes besides its internal id: the
/// `acronym` (the university initialism, e.g. `"ETSECCPB"`) and the numeric
/// university `code`. Lookups exist for all three; take care not to mix the
/// internal id with the university code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Internal EquipsTIC identifier. Not the university unit code.
    #[serde(rename = "idUnitat")]
    pub id: EntityId,
    /// Unit name.
    #[serde(rename = "nom")]
    pub name: String,
    /// University initialism, e.g. `"ETSECCPB"`.
    #[serde(rename = "identificador", default)]
    pub acronym: Option<String>,
    /// University unit code.
    #[serde(rename = "codiUnitat", default)]
    pub code: Option<String>,
}

impl Entity for Unit {
    const ID_FIELD: &'static str = "idUnitat";

    fn id(&self) -> EntityId {
        self.id
    }
}

natural_order_by_name!(Unit);
