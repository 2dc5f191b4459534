//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::{info, warn};

use super::AppState;
use super::types::ErrorResponse;
use crate::catalog::LoadCatalogEntry;
use crate::report::SizingReport;
use crate::scenario::Scenario;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// `GET /catalog` → 200 + catalog entries in form order
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<Vec<LoadCatalogEntry>> {
    Json(state.catalog.iter().cloned().collect())
}

/// `GET /presets` → 200 + preset names
pub async fn list_presets() -> Json<Vec<&'static str>> {
    Json(Scenario::PRESETS.to_vec())
}

/// `GET /presets/{name}` → 200 + `SizingReport`, or 404 for an unknown preset
pub async fn get_preset(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<SizingReport> {
    let scenario = Scenario::from_preset(&name).map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.message)),
        )
    })?;
    evaluate(&state, &scenario)
}

/// `POST /calculate` → 200 + `SizingReport`, or 400 + `ErrorResponse` with
/// one detail per invalid field (a single `body` detail for unparsable JSON)
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Scenario>, JsonRejection>,
) -> ApiResult<SizingReport> {
    let Json(scenario) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "malformed request body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::malformed(rejection.body_text())),
        )
    })?;
    evaluate(&state, &scenario)
}

fn evaluate(state: &AppState, scenario: &Scenario) -> ApiResult<SizingReport> {
    match scenario.evaluate(&state.config) {
        Ok(report) => {
            info!(
                loads = report.loads.len(),
                station_model = report.result.station_model.code(),
                "calculated"
            );
            Ok(Json(report))
        }
        Err(errors) => {
            warn!(n_errors = errors.len(), "rejected scenario");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::invalid(errors)),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::SizerConfig;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(SizerConfig::default()))
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn catalog_returns_all_loads() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/catalog")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json.as_array().map(Vec::len), Some(20));
        assert_eq!(json[0]["name"], "Lamps");
    }

    #[tokio::test]
    async fn calculate_returns_report() {
        let app = router(make_test_state());

        let body = r#"{
            "project": {"type": "domestic"},
            "loads": [{"name": "Refrigerator", "quantity": 2}]
        }"#;
        let req = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["result"]["required_power_w"], 300.0);
        assert_eq!(json["result"]["required_battery_wh"], 4500.0);
        assert_eq!(json["result"]["station_model"], "A5");
        assert_eq!(json["contacts"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn calculate_invalid_returns_400() {
        let app = router(make_test_state());

        let body = r#"{"loads": [{"name": "Hot tub"}]}"#;
        let req = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
        assert_eq!(json["details"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn mistyped_body_returns_400_with_details() {
        let app = router(make_test_state());

        let body = r#"{
            "project": {"type": "domestic"},
            "loads": [{"name": "Fan", "quantity": -1}]
        }"#;
        let req = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json["error"].as_str().unwrap().starts_with("malformed request body"));
        assert_eq!(json["details"][0]["field"], "body");
    }

    #[tokio::test]
    async fn missing_content_type_returns_400() {
        let app = router(make_test_state());

        let req = Request::builder()
            .method("POST")
            .uri("/calculate")
            .body(Body::from("{}"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["details"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn unknown_preset_returns_404() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/presets/castle")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
