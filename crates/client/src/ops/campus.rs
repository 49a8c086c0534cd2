//! Campus and building lookups.

use equipstic_domain::{Building, Campus, EntityId};

use crate::client::{EquipsTicClient, require_param};
use crate::error::ClientResult;

impl EquipsTicClient {
    /// Lists all campuses, sorted by name.
    pub async fn campuses(&self) -> ClientResult<Vec<Campus>> {
        self.get_sorted_list(&["campus"]).await
    }

    /// Looks up a campus by its code.
    pub async fn campus_by_code(&self, code: &str) -> ClientResult<Option<Campus>> {
        let code = require_param("codi", code)?;
        self.get_entity(&["campus", "cerca", "codi", code]).await
    }

    /// Looks up a campus by identifier.
    pub async fn campus_by_id(&self, id: EntityId) -> ClientResult<Option<Campus>> {
        self.get_entity(&["campus", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all buildings, sorted by name.
    pub async fn buildings(&self) -> ClientResult<Vec<Building>> {
        self.get_sorted_list(&["edifici"]).await
    }

    /// Looks up a building by identifier.
    pub async fn building_by_id(&self, id: EntityId) -> ClientResult<Option<Building>> {
        self.get_entity(&["edifici", &id.to_string()]).await
    }

    /// Looks up a building by its code and the code of its campus (building
    /// codes are only unique within a campus).
    pub async fn building_by_code_and_campus_code(
        &self,
        code: &str,
        campus_code: &str,
    ) -> ClientResult<Option<Building>> {
        let code = require_param("codi", code)?;
        let campus_code = require_param("codiCampus", campus_code)?;
        self.get_entity(&["edifici", "cerca", "codi", code, "codicampus", campus_code])
            .await
    }
}
