//! Catalogue lookups: scopes, categories, statuses, brands, usage types,
//! infrastructure types, network types and operating systems.

use equipstic_domain::{
    Brand, Category, EntityId, InfrastructureType, NetworkType, OperatingSystem, Scope, Status,
    UsageType,
};

use crate::client::{EquipsTicClient, require_param};
use crate::error::ClientResult;

impl EquipsTicClient {
    /// Lists all scopes, sorted by name.
    pub async fn scopes(&self) -> ClientResult<Vec<Scope>> {
        self.get_sorted_list(&["ambit"]).await
    }

    /// Searches scopes by name, sorted by name.
    pub async fn scopes_by_name(&self, name: &str) -> ClientResult<Vec<Scope>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["ambit", "cerca", "nom", name]).await
    }

    /// Looks up a scope by identifier.
    pub async fn scope_by_id(&self, id: EntityId) -> ClientResult<Option<Scope>> {
        self.get_entity(&["ambit", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all categories, sorted by name.
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get_sorted_list(&["categoria"]).await
    }

    /// Looks up a category by identifier.
    pub async fn category_by_id(&self, id: EntityId) -> ClientResult<Option<Category>> {
        self.get_entity(&["categoria", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all statuses, sorted by name.
    pub async fn statuses(&self) -> ClientResult<Vec<Status>> {
        self.get_sorted_list(&["estat"]).await
    }

    /// Looks up a status by its code.
    pub async fn status_by_code(&self, code: &str) -> ClientResult<Option<Status>> {
        let code = require_param("codi", code)?;
        self.get_entity(&["estat", "cerca", "codi", code]).await
    }

    /// Searches statuses by name, sorted by name.
    pub async fn statuses_by_name(&self, name: &str) -> ClientResult<Vec<Status>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["estat", "cerca", "nom", name]).await
    }

    /// Looks up a status by identifier.
    pub async fn status_by_id(&self, id: EntityId) -> ClientResult<Option<Status>> {
        self.get_entity(&["estat", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all brands, in server order (brands have no natural ordering).
    pub async fn brands(&self) -> ClientResult<Vec<Brand>> {
        self.get_list(&["marca"]).await
    }

    /// Searches brands by name, in server order.
    pub async fn brands_by_name(&self, name: &str) -> ClientResult<Vec<Brand>> {
        let name = require_param("nom", name)?;
        self.get_list(&["marca", "cerca", "nom", name]).await
    }

    /// Looks up a brand by identifier.
    pub async fn brand_by_id(&self, id: EntityId) -> ClientResult<Option<Brand>> {
        self.get_entity(&["marca", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all usage types, sorted by name.
    pub async fn usage_types(&self) -> ClientResult<Vec<UsageType>> {
        self.get_sorted_list(&["tipusUs"]).await
    }

    /// Searches usage types used by a unit, sorted by name.
    pub async fn usage_types_by_unit(&self, unit_id: EntityId) -> ClientResult<Vec<UsageType>> {
        self.get_sorted_list(&["tipusUs", "cerca", "unitat", &unit_id.to_string()])
            .await
    }

    /// Looks up a usage type by identifier.
    pub async fn usage_type_by_id(&self, id: EntityId) -> ClientResult<Option<UsageType>> {
        self.get_entity(&["tipusUs", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all infrastructure types, sorted by name.
    pub async fn infrastructure_types(&self) -> ClientResult<Vec<InfrastructureType>> {
        self.get_sorted_list(&["tipusInfraestructura"]).await
    }

    /// Searches infrastructure types in a category, sorted by name.
    pub async fn infrastructure_types_by_category(
        &self,
        category_id: EntityId,
    ) -> ClientResult<Vec<InfrastructureType>> {
        self.get_sorted_list(&[
            "tipusInfraestructura",
            "cerca",
            "categoria",
            &category_id.to_string(),
        ])
        .await
    }

    /// Looks up an infrastructure type by its code.
    pub async fn infrastructure_type_by_code(
        &self,
        code: &str,
    ) -> ClientResult<Option<InfrastructureType>> {
        let code = require_param("codi", code)?;
        self.get_entity(&["tipusInfraestructura", "cerca", "codi", code])
            .await
    }

    /// Searches infrastructure types by name, sorted by name.
    pub async fn infrastructure_types_by_name(
        &self,
        name: &str,
    ) -> ClientResult<Vec<InfrastructureType>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["tipusInfraestructura", "cerca", "nom", name])
            .await
    }

    /// Looks up an infrastructure type by identifier.
    pub async fn infrastructure_type_by_id(
        &self,
        id: EntityId,
    ) -> ClientResult<Option<InfrastructureType>> {
        self.get_entity(&["tipusInfraestructura", &id.to_string()])
            .await
    }
}

impl EquipsTicClient {
    /// Lists all network types, in server order (network types have no
    /// natural ordering).
    pub async fn network_types(&self) -> ClientResult<Vec<NetworkType>> {
        self.get_list(&["tipusXarxa"]).await
    }

    /// Looks up a network type by identifier.
    pub async fn network_type_by_id(&self, id: EntityId) -> ClientResult<Option<NetworkType>> {
        self.get_entity(&["tipusXarxa", &id.to_string()]).await
    }
}

impl EquipsTicClient {
    /// Lists all operating systems, sorted by name.
    pub async fn operating_systems(&self) -> ClientResult<Vec<OperatingSystem>> {
        self.get_sorted_list(&["sistemaOperatiu"]).await
    }

    /// Searches operating systems in a category, sorted by name.
    pub async fn operating_systems_by_category(
        &self,
        category_id: EntityId,
    ) -> ClientResult<Vec<OperatingSystem>> {
        self.get_sorted_list(&[
            "sistemaOperatiu",
            "cerca",
            "categoria",
            &category_id.to_string(),
        ])
        .await
    }

    /// Searches operating systems by code, sorted by name.
    pub async fn operating_systems_by_code(
        &self,
        code: &str,
    ) -> ClientResult<Vec<OperatingSystem>> {
        let code = require_param("codi", code)?;
        self.get_sorted_list(&["sistemaOperatiu", "cerca", "codi", code])
            .await
    }

    /// Searches operating systems by name, sorted by name.
    pub async fn operating_systems_by_name(
        &self,
        name: &str,
    ) -> ClientResult<Vec<OperatingSystem>> {
        let name = require_param("nom", name)?;
        self.get_sorted_list(&["sistemaOperatiu", "cerca", "nom", name])
            .await
    }

    /// Looks up an operating system by identifier.
    pub async fn operating_system_by_id(
        &self,
        id: EntityId,
    ) -> ClientResult<Option<OperatingSystem>> {
        self.get_entity(&["sistemaOperatiu", &id.to_string()]).await
    }
}
