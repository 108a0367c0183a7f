//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

mod common;

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use swarm_forecast::api::{AppState, router};
use swarm_forecast::config::RunConfig;
use swarm_forecast::runner::run;

/// Run the sample config and return the API state.
fn build_api_state() -> Arc<AppState> {
    let config = RunConfig::from_toml_file(Path::new(common::SAMPLE_CONFIG))
        .expect("sample config should parse");
    let output = run(&config).expect("sample run should succeed");
    Arc::new(AppState { config, output })
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn forecast_endpoint_reports_sample_run() {
    let (status, json) = get_json("/forecast").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["swarm"]["particles"], 12);
    assert_eq!(json["compared"], 10);
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(10));
    assert!(json["mae"].as_f64().is_some_and(f64::is_finite));
}

#[tokio::test]
async fn series_endpoint_covers_training_and_horizon() {
    let (status, json) = get_json("/series").await;
    assert_eq!(status, StatusCode::OK);
    let points = json.as_array().cloned().unwrap_or_default();
    assert_eq!(points.len(), 70);
    assert!(points[59]["forecast"].is_null());
    assert!(points[60]["forecast"].is_number());
    assert!(points[60]["observed"].is_number());
}

#[tokio::test]
async fn series_endpoint_filters_range() {
    let (status, json) = get_json("/series?from=55&to=64").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(10));
    assert_eq!(json[0]["index"], 55);
}

#[tokio::test]
async fn trace_endpoint_is_non_increasing() {
    let (status, json) = get_json("/trace").await;
    assert_eq!(status, StatusCode::OK);
    let fitness: Vec<f64> = json
        .as_array()
        .map(|a| a.iter().filter_map(|p| p["global_best_fitness"].as_f64()).collect())
        .unwrap_or_default();
    assert_eq!(fitness.len(), 40);
    assert!(fitness.windows(2).all(|w| w[1] <= w[0]));
}
