//! Equipment records: hydrated fetches and mutations.
//!
//! The equipment endpoints return records whose relation fields carry only
//! an identifier (see [`equipstic_domain::EntityRef`]). Every fetch here
//! therefore runs the reference hydrator: one lookup-by-identifier per
//! relation, mandatory relations always, optional relations only when
//! present. The sub-calls share no transactional context with the primary
//! fetch, so under concurrent remote mutation the hydrated record may mix
//! before/after state. Best effort, documented, not engineered around.

use std::future::Future;

use equipstic_domain::{Entity, EntityId, EntityRef, Equipment};

use crate::client::{EquipsTicClient, require_param};
use crate::error::{ClientResult, Error};

impl EquipsTicClient {
    /// Fetches an equipment record by identifier, fully hydrated.
    pub async fn equipment_by_id(&self, id: EntityId) -> ClientResult<Option<Equipment>> {
        let id = id.to_string();
        let raw = self.get_entity(&["infraestructura", &id]).await?;
        self.hydrate_optional(raw).await
    }

    /// Fetches an equipment record by brand and serial number, fully
    /// hydrated.
    pub async fn equipment_by_brand_and_serial(
        &self,
        brand_id: EntityId,
        serial_number: &str,
    ) -> ClientResult<Option<Equipment>> {
        let serial_number = require_param("sn", serial_number)?;
        let brand_id = brand_id.to_string();
        let raw = self
            .get_entity(&[
                "infraestructura",
                "cerca",
                "marca",
                &brand_id,
                "sn",
                serial_number,
            ])
            .await?;
        self.hydrate_optional(raw).await
    }

    /// Lists the equipment owned by a unit, each record fully hydrated,
    /// sorted by identifier.
    pub async fn equipment_by_unit(&self, unit_id: EntityId) -> ClientResult<Vec<Equipment>> {
        let unit_id = unit_id.to_string();
        let raw: Vec<Equipment> = self
            .get_list(&["infraestructura", "cerca", "unitat", &unit_id])
            .await?;
        let mut hydrated = Vec::with_capacity(raw.len());
        for record in raw {
            hydrated.push(self.hydrate(record).await?);
        }
        hydrated.sort();
        Ok(hydrated)
    }

    /// Creates an equipment record and returns the server's stored copy.
    ///
    /// An enabled read cache is not purged by mutations; cached reads may
    /// stay stale until they expire.
    pub async fn create_equipment(&self, equipment: &Equipment) -> ClientResult<Equipment> {
        self.post_entity(&["infraestructura"], equipment).await
    }

    /// Updates an equipment record and returns the server's stored copy.
    ///
    /// An enabled read cache is not purged by mutations; cached reads may
    /// stay stale until they expire.
    pub async fn update_equipment(&self, equipment: &Equipment) -> ClientResult<Equipment> {
        let id = equipment.id.to_string();
        self.put_entity(&["infraestructura", &id], equipment).await
    }

    /// Deletes an equipment record.
    ///
    /// An enabled read cache is not purged by mutations; cached reads may
    /// stay stale until they expire.
    pub async fn delete_equipment(&self, id: EntityId) -> ClientResult<()> {
        let id = id.to_string();
        self.delete_entity(&["infraestructura", &id]).await
    }

    /// Hydrates a possibly-absent record. Absent input is a no-op, which
    /// also guards list endpoints mapping hydration over empty results.
    async fn hydrate_optional(
        &self,
        equipment: Option<Equipment>,
    ) -> ClientResult<Option<Equipment>> {
        match equipment {
            None => Ok(None),
            Some(record) => self.hydrate(record).await.map(Some),
        }
    }

    /// Resolves every relation stub on a record into a fully populated
    /// entity, one lookup per relation.
    ///
    /// All-or-nothing: the mandatory lookups run concurrently and any
    /// failure discards the whole record, so callers never see a
    /// half-hydrated one. Optional relations are resolved only when present;
    /// an absent optional stays `None`. Re-hydrating an already-resolved
    /// record is safe and yields the latest remote state.
    async fn hydrate(&self, mut equipment: Equipment) -> ClientResult<Equipment> {
        let brand_id = equipment.brand.id();
        let type_id = equipment.infrastructure_type.id();
        let status_id = equipment.status.id();
        let unit_id = equipment.unit.id();
        let building_id = equipment.building.id();
        let validation_id = equipment.validation_status.id();
        let managing_id = equipment.managing_unit.id();

        let (brand, infrastructure_type, status, unit, building, validation_status, managing_unit) =
            tokio::try_join!(
                resolve(self.brand_by_id(brand_id), "brand", brand_id),
                resolve(
                    self.infrastructure_type_by_id(type_id),
                    "infrastructure type",
                    type_id,
                ),
                resolve(self.status_by_id(status_id), "status", status_id),
                resolve(self.unit_by_id(unit_id), "unit", unit_id),
                resolve(self.building_by_id(building_id), "building", building_id),
                resolve(
                    self.status_by_id(validation_id),
                    "validation status",
                    validation_id,
                ),
                resolve(self.unit_by_id(managing_id), "managing unit", managing_id),
            )?;
        equipment.brand = brand;
        equipment.infrastructure_type = infrastructure_type;
        equipment.status = status;
        equipment.unit = unit;
        equipment.building = building;
        equipment.validation_status = validation_status;
        equipment.managing_unit = managing_unit;

        equipment.destination_unit = match equipment.destination_unit {
            Some(reference) => {
                let id = reference.id();
                Some(resolve(self.unit_by_id(id), "destination unit", id).await?)
            }
            None => None,
        };
        equipment.operating_system = match equipment.operating_system {
            Some(reference) => {
                let id = reference.id();
                Some(resolve(self.operating_system_by_id(id), "operating system", id).await?)
            }
            None => None,
        };
        equipment.user = match equipment.user {
            Some(reference) => {
                let id = reference.id();
                Some(resolve(self.equipment_user_by_id(id), "user", id).await?)
            }
            None => None,
        };

        Ok(equipment)
    }
}

/// Turns a lookup-by-identifier outcome into a resolved reference.
///
/// A lookup that comes back absent here means the identifier we just read
/// off the record no longer exists: a race with a concurrent remote
/// mutation. That propagates as a remote failure; silently keeping the stub
/// would hand the caller a half-hydrated record.
async fn resolve<T, Fut>(lookup: Fut, resource: &'static str, id: EntityId) -> ClientResult<EntityRef<T>>
where
    T: Entity,
    Fut: Future<Output = ClientResult<Option<T>>>,
{
    lookup
        .await?
        .map(EntityRef::Resolved)
        .ok_or_else(|| Error::stale_reference(resource, id))
}
