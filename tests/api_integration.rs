//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use solar_sizer::api::{AppState, router};
use solar_sizer::config::SizerConfig;

fn app() -> axum::Router {
    router(Arc::new(AppState::new(SizerConfig::default())))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn catalog_lists_loads_in_form_order() {
    let (status, json) = get("/catalog").await;
    assert_eq!(status, StatusCode::OK);
    let loads = json.as_array().unwrap();
    assert_eq!(loads.len(), 20);
    assert_eq!(loads[0]["name"], "Lamps");
    assert_eq!(loads[1]["power_w"], 150.0);
}

#[tokio::test]
async fn presets_endpoint_lists_and_evaluates() {
    let (status, json) = get("/presets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(4));

    let (status, json) = get("/presets/weekend_cabin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["station_model"], "A4");
    assert_eq!(json["result"]["required_autonomy_wh"], 2712.0);
}

#[tokio::test]
async fn calculate_mobile_chassis_scenario() {
    let body = json!({
        "project": { "type": "outdoor", "needs_mobile_chassis": true },
        "loads": [{ "name": "Refrigerator", "quantity": 2 }]
    });
    let (status, json) = post_json("/calculate", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["required_battery_wh"], 4500.0);
    assert_eq!(json["result"]["extra_battery_units"], 5);
    assert_eq!(json["result"]["station_model"], "A5");
    assert_eq!(json["project"], "Outdoor life");
}

#[tokio::test]
async fn calculate_large_load_links_encode_plus() {
    let body = json!({
        "project": { "type": "enterprise" },
        "loads": [{ "name": "Air conditioner", "quantity": 2 }]
    });
    let (status, json) = post_json("/calculate", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["station_model"], "A7+");
    let url = json["contacts"][0]["url"].as_str().unwrap_or_default();
    assert!(url.contains("A7%2B"), "url={url}");
}

#[tokio::test]
async fn calculate_other_without_description_is_rejected() {
    let body = json!({
        "project": { "type": "other" },
        "loads": [{ "name": "Fan", "power_w": 5000.0 }]
    });
    let (status, json) = post_json("/calculate", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert_eq!(
        fields,
        ["project.other_description", "loads.\"Fan\".power_w"]
    );
}

#[tokio::test]
async fn unknown_preset_is_not_found() {
    let (status, json) = get("/presets/castle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap_or_default().contains("castle"));
}

#[tokio::test]
async fn truncated_json_body_is_bad_request() {
    let (status, json) = send(
        Request::post("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"project": {"type": "domestic""#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"][0]["field"], "body");
    assert!(json["error"].as_str().unwrap_or_default().starts_with("malformed"));
}
