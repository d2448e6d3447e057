mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{starved_context, RecordingNotifier};
use jit_inventory::api::{build_app, AppState};
use jit_inventory::Notifier;
use serde_json::Value;
use tower::ServiceExt;

fn app_with(recorder: Arc<RecordingNotifier>) -> Router {
    let notifier: Arc<dyn Notifier> = recorder;
    build_app(AppState::new(starved_context(), notifier))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_ok() {
    let app = app_with(Arc::default());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn inventory_status_endpoint_alerts() {
    let recorder = Arc::new(RecordingNotifier::default());
    let (status, body) = get_json(app_with(recorder.clone()), "/api/inventory-status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["item_id"], "gloves_001");
    assert_eq!(body["inventory"], 0);
    assert_eq!(body["ROP"], 200.0);
    assert_eq!(body["recommended_order"], 31);
    assert_eq!(recorder.calls().len(), 1);
}

#[tokio::test]
async fn kpi_endpoint() {
    let (status, body) = get_json(app_with(Arc::default()), "/api/kpi-metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["EOQ"], 31);
    assert_eq!(body["total_cost"], 353.58);
    assert_eq!(body["turnover_rate"], 200.0);
    assert_eq!(body["stockout_risk"], 1.0);
}

#[tokio::test]
async fn daily_demand_endpoint_lists_every_day() {
    let (status, body) = get_json(app_with(Arc::default()), "/api/daily-demand").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["day"], 0);
    assert_eq!(rows[9]["day"], 9);
    assert_eq!(rows[9]["ROP"], 200.0);
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let app = app_with(Arc::default());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/kpi-metrics")
                .header(header::ORIGIN, "https://dashboard.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn preflight_is_answered() {
    let app = app_with(Arc::default());
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/inventory-status")
                .header(header::ORIGIN, "https://dashboard.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
