//! End-to-end client flows against a scripted transport.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use equipstic_client::testing::{MemoryCache, ScriptedTransport, failure, not_found, success};
use equipstic_client::{EquipsTicClient, Error, TransportError};
use equipstic_domain::{EntityRef, Equipment};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn raw_equipment_42() -> Value {
    json!({
        "identificador": 42,
        "numeroSerie": "SN-0042",
        "marca": {"idMarca": 1},
        "tipusInfraestructura": {"idTipus": 2},
        "estat": {"idEstat": 3},
        "unitat": {"idUnitat": 4},
        "edifici": {"idEdifici": 5},
        "estatValidacio": {"idEstat": 6},
        "unitatGestora": {"idUnitat": 7},
        "unitatDestinataria": null,
        "sistemaOperatiu": null,
        "usuariInfraestructura": null
    })
}

/// Scripts the seven mandatory relation lookups for [`raw_equipment_42`].
fn script_mandatory_relations(transport: &ScriptedTransport) {
    transport.reply("/marca/1", success(json!({"idMarca": 1, "nom": "Dell"})));
    transport.reply(
        "/tipusInfraestructura/2",
        success(json!({"idTipus": 2, "nom": "Portàtil"})),
    );
    transport.reply("/estat/3", success(json!({"idEstat": 3, "nom": "En ús"})));
    transport.reply(
        "/unitat/4",
        success(json!({"idUnitat": 4, "nom": "Serveis TIC", "identificador": "STIC"})),
    );
    transport.reply(
        "/edifici/5",
        success(json!({"idEdifici": 5, "nom": "Vèrtex", "codi": "VX"})),
    );
    transport.reply("/estat/6", success(json!({"idEstat": 6, "nom": "Validada"})));
    transport.reply(
        "/unitat/7",
        success(json!({"idUnitat": 7, "nom": "UTG Nord", "identificador": "UTGN"})),
    );
}

#[tokio::test]
async fn fetching_equipment_hydrates_all_mandatory_relations_in_eight_calls() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/infraestructura/42", success(raw_equipment_42()));
    script_mandatory_relations(&transport);

    let client = EquipsTicClient::new(transport.clone());
    let equipment = client.equipment_by_id(42).await.unwrap().unwrap();

    assert_eq!(equipment.id, 42);
    assert_eq!(
        equipment.brand.resolved().map(|b| b.name.as_str()),
        Some("Dell")
    );
    assert_eq!(
        equipment.building.resolved().map(|b| b.name.as_str()),
        Some("Vèrtex")
    );
    assert_eq!(
        equipment.managing_unit.resolved().map(|u| u.name.as_str()),
        Some("UTG Nord")
    );
    assert!(!equipment.validation_status.is_stub());
    // Optionals were null on the wire and stay none, with no lookups.
    assert_eq!(equipment.destination_unit, None);
    assert_eq!(equipment.operating_system, None);
    assert_eq!(equipment.user, None);
    // Primary fetch plus one lookup per mandatory relation.
    assert_eq!(transport.call_count(), 8);
}

#[tokio::test]
async fn missing_equipment_is_absent_with_zero_hydration_lookups() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply(
        "/infraestructura/999",
        failure("La infraestructura 999 no existeix"),
    );

    let client = EquipsTicClient::new(transport.clone());
    let equipment = client.equipment_by_id(999).await.unwrap();

    assert_eq!(equipment, None);
    assert_eq!(transport.calls(), vec!["/infraestructura/999"]);
}

#[tokio::test]
async fn present_optional_relations_are_resolved_too() {
    let mut raw = raw_equipment_42();
    raw["unitatDestinataria"] = json!({"idUnitat": 8});
    raw["sistemaOperatiu"] = json!({"idSistemaOperatiu": 9});
    raw["usuariInfraestructura"] = json!({"idUsuariInfraestructura": 10});

    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/infraestructura/42", success(raw));
    script_mandatory_relations(&transport);
    transport.reply(
        "/unitat/8",
        success(json!({"idUnitat": 8, "nom": "Recepció"})),
    );
    transport.reply(
        "/sistemaOperatiu/9",
        success(json!({"idSistemaOperatiu": 9, "nom": "Debian 12"})),
    );
    transport.reply(
        "/usuariInfraestructura/10",
        success(json!({"idUsuariInfraestructura": 10, "nom": "Mercè"})),
    );

    let client = EquipsTicClient::new(transport.clone());
    let equipment = client.equipment_by_id(42).await.unwrap().unwrap();

    assert_eq!(
        equipment
            .operating_system
            .as_ref()
            .and_then(|r| r.resolved())
            .map(|os| os.name.as_str()),
        Some("Debian 12")
    );
    assert_eq!(
        equipment
            .destination_unit
            .as_ref()
            .and_then(|r| r.resolved())
            .map(|u| u.name.as_str()),
        Some("Recepció")
    );
    // Primary fetch, seven mandatory lookups, three optional lookups.
    assert_eq!(transport.call_count(), 11);
}

#[tokio::test]
async fn stale_relation_reference_fails_the_whole_hydration() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/infraestructura/42", success(raw_equipment_42()));
    // The brand vanished between the fetch and the lookup.
    transport.reply("/marca/1", not_found("La marca 1"));
    script_mandatory_relations(&transport);

    let client = EquipsTicClient::new(transport);
    let error = client.equipment_by_id(42).await.unwrap_err();
    assert!(matches!(error, Error::RemoteOperation { .. }));
}

#[tokio::test]
async fn rehydrating_yields_a_structurally_identical_record() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/infraestructura/42", success(raw_equipment_42()));
    script_mandatory_relations(&transport);

    let client = EquipsTicClient::new(transport);
    let first = client.equipment_by_id(42).await.unwrap().unwrap();
    let second = client.equipment_by_id(42).await.unwrap().unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn equipment_by_unit_hydrates_and_sorts_every_record() {
    let mut other = raw_equipment_42();
    other["identificador"] = json!(7);

    let transport = Arc::new(ScriptedTransport::new());
    transport.reply(
        "/infraestructura/cerca/unitat/4",
        success(json!([raw_equipment_42(), other])),
    );
    script_mandatory_relations(&transport);

    let client = EquipsTicClient::new(transport);
    let records = client.equipment_by_unit(4).await.unwrap();
    assert_eq!(records.iter().map(|e| e.id).collect::<Vec<_>>(), vec![7, 42]);
    assert!(records.iter().all(|e| !e.brand.is_stub()));
}

#[tokio::test]
async fn list_ordering_is_deterministic_across_wire_orders() {
    let scripted = |names: &[&str]| {
        let transport = Arc::new(ScriptedTransport::new());
        let campuses: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(index, name)| json!({"idCampus": index + 1, "nom": name}))
            .collect();
        transport.reply("/campus", success(Value::Array(campuses)));
        transport
    };

    let first = EquipsTicClient::new(scripted(&["Nord", "Baix Llobregat", "Sud"]))
        .campuses()
        .await
        .unwrap();
    let second = EquipsTicClient::new(scripted(&["Sud", "Nord", "Baix Llobregat"]))
        .campuses()
        .await
        .unwrap();

    let names = |campuses: &[equipstic_domain::Campus]| {
        campuses
            .iter()
            .map(|c| c.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), vec!["Baix Llobregat", "Nord", "Sud"]);
    assert_eq!(names(&first), names(&second));
}

#[tokio::test]
async fn cached_reads_hit_the_transport_once() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/campus/3", success(json!({"idCampus": 3, "nom": "Nord"})));

    let client = EquipsTicClient::with_cache(transport.clone(), Arc::new(MemoryCache::new()));
    let first = client.campus_by_id(3).await.unwrap();
    let second = client.campus_by_id(3).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn absent_results_are_cached_but_failures_are_not() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/campus/404", not_found("El campus 404"));
    transport.reply("/campus/500", failure("Error intern"));

    let cache = Arc::new(MemoryCache::new());
    let client = EquipsTicClient::with_cache(transport.clone(), cache.clone());

    assert_eq!(client.campus_by_id(404).await.unwrap(), None);
    assert_eq!(client.campus_by_id(404).await.unwrap(), None);
    // The absent outcome was served from the cache the second time.
    assert_eq!(
        transport
            .calls()
            .iter()
            .filter(|path| path.as_str() == "/campus/404")
            .count(),
        1
    );

    assert!(client.campus_by_id(500).await.is_err());
    assert!(client.campus_by_id(500).await.is_err());
    // Failures are never stored, so the call is re-issued.
    assert_eq!(
        transport
            .calls()
            .iter()
            .filter(|path| path.as_str() == "/campus/500")
            .count(),
        2
    );
    assert_eq!(cache.put_count(), 1);
}

#[tokio::test]
async fn slashes_inside_a_parameter_get_their_own_cache_key() {
    let transport = Arc::new(ScriptedTransport::new());
    // One name that happens to contain the other search's path, verbatim.
    transport.reply(
        "/unitat/cerca/nom/x%2Fidentificador%2Fy%2Fcodi%2Fz",
        success(json!([{"idUnitat": 1, "nom": "One"}])),
    );
    transport.reply(
        "/unitat/cerca/nom/x/identificador/y/codi/z",
        success(json!([{"idUnitat": 2, "nom": "Two"}])),
    );

    let client = EquipsTicClient::with_cache(transport.clone(), Arc::new(MemoryCache::new()));
    let by_name = client
        .units_by_name("x/identificador/y/codi/z")
        .await
        .unwrap();
    let by_all = client
        .units_by_name_acronym_code("x", "y", "z")
        .await
        .unwrap();

    assert_eq!(by_name[0].id, 1);
    assert_eq!(by_all[0].id, 2);
    // Distinct operations, distinct keys: neither is served from the
    // other's cache entry.
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn mismatched_payloads_are_not_cached_and_get_reissued() {
    let transport = Arc::new(ScriptedTransport::new());
    // Success envelope whose payload is missing the identifier attribute.
    transport.reply("/campus/3", success(json!({"nom": "Nord"})));

    let cache = Arc::new(MemoryCache::new());
    let client = EquipsTicClient::with_cache(transport.clone(), cache.clone());

    assert!(matches!(
        client.campus_by_id(3).await.unwrap_err(),
        Error::Decode(_)
    ));
    assert!(matches!(
        client.campus_by_id(3).await.unwrap_err(),
        Error::Decode(_)
    ));
    assert_eq!(transport.call_count(), 2);
    assert_eq!(cache.put_count(), 0);
}

#[tokio::test]
async fn create_returns_the_stored_copy() {
    let transport = Arc::new(ScriptedTransport::new());
    let mut stored = raw_equipment_42();
    stored["identificador"] = json!(4242);
    transport.reply("/infraestructura", success(stored));

    let template: Equipment = serde_json::from_value(raw_equipment_42()).unwrap();
    let client = EquipsTicClient::new(transport.clone());
    let created = client.create_equipment(&template).await.unwrap();

    assert_eq!(created.id, 4242);
    // Mutations return the raw stored copy; relations stay stubs.
    assert_eq!(created.brand, EntityRef::Stub(1));
}

#[tokio::test]
async fn failed_mutations_carry_the_server_message() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply(
        "/infraestructura/42",
        failure("Error en modificar la infraestructura"),
    );

    let template: Equipment = serde_json::from_value(raw_equipment_42()).unwrap();
    let client = EquipsTicClient::new(transport);
    let error = client.update_equipment(&template).await.unwrap_err();
    match error {
        Error::RemoteOperation { message, .. } => {
            assert_eq!(message, "Error en modificar la infraestructura");
        }
        other => panic!("expected RemoteOperation, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_succeeds_on_a_success_envelope_without_payload() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply("/infraestructura/42", success(Value::Null));

    let client = EquipsTicClient::new(transport);
    assert!(client.delete_equipment(42).await.is_ok());
}

#[tokio::test]
async fn empty_reply_body_surfaces_as_a_transport_error() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply_empty("/campus/3");

    let client = EquipsTicClient::new(transport);
    let error = client.campus_by_id(3).await.unwrap_err();
    assert!(matches!(
        error,
        Error::Transport(TransportError::EmptyReply)
    ));
}

#[tokio::test]
async fn transport_failures_propagate_without_retry() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.reply_error(
        "/campus/3",
        TransportError::Timeout { timeout_ms: 30_000 },
    );

    let client = EquipsTicClient::new(transport.clone());
    let error = client.campus_by_id(3).await.unwrap_err();
    assert!(matches!(
        error,
        Error::Transport(TransportError::Timeout { .. })
    ));
    assert_eq!(transport.call_count(), 1);
}
