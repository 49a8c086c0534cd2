//! Campuses and buildings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::natural_order_by_name;
use crate::reference::{Entity, EntityId};

/// A university campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campus {
    /// Server identifier.
    #[serde(rename = "idCampus")]
    pub id: EntityId,
    /// Campus name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Campus code.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
}

/// A building within a campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Server identifier.
    #[serde(rename = "idEdifici")]
    pub id: EntityId,
    /// Building name.
    #[serde(rename = "nom")]
    pub name: String,
    /// Building code, unique within a campus.
    #[serde(rename = "codi", default)]
    pub code: Option<String>,
    /// Street address.
    #[serde(rename = "adreca", default)]
    pub address: Option<String>,
    /// Owning campus, when the server expands it.
    #[serde(rename = "campus", default)]
    pub campus: Option<Campus>,
}

impl Entity for Campus {
    const ID_FIELD: &'static str = "idCampus";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Building {
    const ID_FIELD: &'static str = "idEdifici";

    fn id(&self) -> EntityId {
        self.id
    }
}

natural_order_by_name!(Campus);
natural_order_by_name!(Building);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn campuses_sort_by_name() {
        let campus = |id: EntityId, name: &str| Campus {
            id,
            name: name.to_owned(),
            code: None,
        };
        let mut all = vec![
            campus(1, "Nord"),
            campus(2, "Baix Llobregat"),
            campus(3, "Sud"),
        ];
        all.sort();
        assert_eq!(
            all.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["Baix Llobregat", "Nord", "Sud"]
        );
    }
}
