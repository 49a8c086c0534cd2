//! Unit and equipment-user lookups.

use equipstic_domain::{EntityId, EquipmentUser, Unit};

use crate::client::{EquipsTicClient, require_param};
use crate::error::ClientResult;

impl EquipsTicClient {
    /// Lists all units, sorted by name.
    pub async fn units(&self) -> ClientResult<Vec<Unit>> {
        self.get_sorted_list(&["unitat"]).await
    }

    /// Looks up a unit by its university initialism (e.g. `"ETSECCPB"`).
    ///
    /// Not to be confused with [`Self::unit_by_id`], which takes the
    /// internal EquipsTIC identifier.
    pub async fn unit_by_acronym(&self, acronym: &str) -> ClientResult<Option<Unit>> {
        let acronym = require_param("identificador", acronym)?;
        self.get_entity(&["unitat", "cerca", "identificador", acronym])
            .await
    }

    /// Searches units by name, sorted by name.
    pub async fn units_by_name(&self, name: &str) -> ClientResult<Vec<Unit>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["unitat", "cerca", "nom", name]).await
    }

    /// Searches units by name, initialism and code at once, sorted by name.
    pub async fn units_by_name_acronym_code(
        &self,
        name: &str,
        acronym: &str,
        code: &str,
    ) -> ClientResult<Vec<Unit>> {
        let name = require_param("nom", name)?;
        let acronym = require_param("identificador", acronym)?;
        let code = require_param("codi", code)?;
        self.get_sorted_list(&[
            "unitat",
            "cerca",
            "nom",
            name,
            "identificador",
            acronym,
            "codi",
            code,
        ])
        .await
    }

    /// Looks up a unit by its internal EquipsTIC identifier.
    pub async fn unit_by_id(&self, id: EntityId) -> ClientResult<Option<Unit>> {
        self.get_entity(&["unitat", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all equipment users, sorted by name and surname.
    pub async fn equipment_users(&self) -> ClientResult<Vec<EquipmentUser>> {
        self.get_sorted_list(&["usuariInfraestructura"]).await
    }

    /// Searches equipment users by name, sorted by name and surname.
    pub async fn equipment_users_by_name(&self, name: &str) -> ClientResult<Vec<EquipmentUser>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["usuariInfraestructura", "cerca", "nom", name])
            .await
    }

    /// Looks up an equipment user by identifier.
    pub async fn equipment_user_by_id(&self, id: EntityId) -> ClientResult<Option<EquipmentUser>> {
        self.get_entity(&["usuariInfraestructura", &id.to_string()])
            .await
    }
}
