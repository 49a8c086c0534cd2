//! The composite equipment record (`infraestructura`).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::campus::Building;
use crate::catalog::{Brand, InfrastructureType, OperatingSystem, Status};
use crate::dates::ServerLocalDateTime;
use crate::reference::{Entity, EntityId, EntityRef};
use crate::unit::Unit;
use crate::user::EquipmentUser;

/// An equipment record.
///
/// The relation fields arrive from the server as shallow stubs (only the
/// identifier populated) and have to be hydrated with one lookup each. Seven
/// relations are always present; `destination_unit`, `operating_system` and
/// `user` are optional and stay `None` when the record has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Server identifier.
    #[serde(rename = "identificador")]
    pub id: EntityId,
    /// Manufacturer serial number.
    #[serde(rename = "numeroSerie", default)]
    pub serial_number: Option<String>,
    /// Inventory code assigned by the university.
    #[serde(rename = "capInventari", default)]
    pub inventory_code: Option<String>,
    /// Purchase date, server wall-clock.
    #[serde(rename = "dataCompra", default)]
    pub purchase_date: Option<ServerLocalDateTime>,
    /// Warranty end date, server wall-clock.
    #[serde(rename = "dataFiGarantia", default)]
    pub warranty_end_date: Option<ServerLocalDateTime>,
    /// Free-text remarks.
    #[serde(rename = "observacions", default)]
    pub observations: Option<String>,

    /// Manufacturer brand.
    #[serde(rename = "marca")]
    pub brand: EntityRef<Brand>,
    /// Kind of infrastructure.
    #[serde(rename = "tipusInfraestructura")]
    pub infrastructure_type: EntityRef<InfrastructureType>,
    /// Lifecycle status.
    #[serde(rename = "estat")]
    pub status: EntityRef<Status>,
    /// Owning unit.
    #[serde(rename = "unitat")]
    pub unit: EntityRef<Unit>,
    /// Building where the equipment lives.
    #[serde(rename = "edifici")]
    pub building: EntityRef<Building>,
    /// Validation status of the record itself.
    #[serde(rename = "estatValidacio")]
    pub validation_status: EntityRef<Status>,
    /// Unit managing the equipment.
    #[serde(rename = "unitatGestora")]
    pub managing_unit: EntityRef<Unit>,

    /// Unit the equipment is destined to, if any.
    #[serde(rename = "unitatDestinataria", default)]
    pub destination_unit: Option<EntityRef<Unit>>,
    /// Installed operating system, if any.
    #[serde(rename = "sistemaOperatiu", default)]
    pub operating_system: Option<EntityRef<OperatingSystem>>,
    /// Registered user, if any.
    #[serde(rename = "usuariInfraestructura", default)]
    pub user: Option<EntityRef<EquipmentUser>>,
}

impl Entity for Equipment {
    const ID_FIELD: &'static str = "identificador";

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Eq for Equipment {}

// Equipment has no human-readable name; its natural ordering is by id.
impl Ord for Equipment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Equipment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
