mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use chrono::{Duration, Utc};
use common::*;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn event_page_classifies_waves_and_phases() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let starts = Utc::now() + Duration::days(3);
    let event_id = create_test_event(
        &app_state,
        "torneio-verao-teste",
        starts,
        Some(starts + Duration::hours(6)),
    )
    .await;
    // One open wave, one sold out by quantity despite its stored status.
    create_test_wave(&app_state, event_id, None, 5, "ON_SALE").await;
    create_test_wave(&app_state, event_id, Some(10), 10, "ON_SALE").await;

    let query = r#"
        query EventPage($slug: String!) {
            event(slug: $slug) {
                title
                availability
                availabilityLabel
                waves { status available remaining }
                phases { key state }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "slug": "torneio-verao-teste" }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "Event query should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let event = &data["event"];
    assert_eq!(event["availability"], "ON_SALE");
    assert_eq!(event["availabilityLabel"], "Bilhetes à venda");

    let waves = event["waves"].as_array().unwrap();
    assert_eq!(waves.len(), 2);
    let sold_out = waves
        .iter()
        .find(|w| w["status"] == "SOLD_OUT")
        .expect("full wave should classify SOLD_OUT");
    assert_eq!(sold_out["available"], false);
    assert_eq!(sold_out["remaining"], 0);

    let phases = event["phases"].as_array().unwrap();
    assert_eq!(phases.len(), 3);
    assert_eq!(phases[0]["key"], "BEFORE");
    assert_eq!(phases[0]["state"], "ACTIVE");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn event_lookup_normalizes_the_slug() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let starts = Utc::now() + Duration::days(1);
    create_test_event(&app_state, "open-sao-joao", starts, None).await;

    let query = r#"
        query EventPage($slug: String!) {
            event(slug: $slug) { slug }
        }
    "#;

    // Accented, un-normalized input should still resolve.
    let variables = Variables::from_json(json!({ "slug": "Open São João" }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["event"]["slug"], "open-sao-joao");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn padel_snapshot_synthesizes_courts_and_timeline() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let starts = Utc::now() + Duration::days(2);
    let event_id = create_test_event(&app_state, "padel-snapshot-teste", starts, None).await;

    let query = r#"
        query Snapshot($eventId: Int!) {
            padelEventSnapshot(eventId: $eventId) {
                title
                clubName
                courts { name }
                timeline { key state label }
            }
        }
    "#;

    let variables = Variables::from_json(json!({ "eventId": event_id }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    let snapshot = &data["padelEventSnapshot"];

    // No padel config: location fields and a single synthesized court.
    assert_eq!(snapshot["clubName"], "Clube Teste");
    let courts = snapshot["courts"].as_array().unwrap();
    assert_eq!(courts.len(), 1);
    assert_eq!(courts[0]["name"], "Court 1");

    let timeline = snapshot["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0]["key"], "SIGNUP");
    assert_eq!(timeline[0]["state"], "ACTIVE");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn snapshot_of_missing_event_is_null() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let query = r#"
        query { padelEventSnapshot(eventId: 0) { title } }
    "#;

    let response = execute_graphql(&schema, query, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert!(data["padelEventSnapshot"].is_null());
}
