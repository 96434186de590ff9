//! End-to-end tests against a live server bound to an ephemeral port.

use loadcast_config::{HttpConfig, LoadcastConfig};
use loadcast_model::{LinearModel, ModelSet, StandardScaler};
use loadcast_server::context::AppContext;
use loadcast_server::routes::WELCOME_MESSAGE;
use loadcast_server::server::{self, RunningServer};
use std::sync::Arc;

fn test_config() -> LoadcastConfig {
    LoadcastConfig {
        http: HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 2,
        },
        ..LoadcastConfig::default()
    }
}

/// Identity scaler with a heating model that reads feature 0 (relative
/// compactness) and a cooling model fixed at its intercept, so predictions
/// are known by construction.
fn fixture_models() -> ModelSet {
    let mut heating_coeffs = vec![0.0; 8];
    heating_coeffs[0] = 1.0;
    ModelSet::from_parts(
        StandardScaler {
            mean: vec![0.0; 8],
            scale: vec![1.0; 8],
        },
        LinearModel {
            coefficients: heating_coeffs,
            intercept: 15.0,
        },
        LinearModel {
            coefficients: vec![0.0; 8],
            intercept: 18.0,
        },
    )
    .unwrap()
}

fn start_with_models() -> RunningServer {
    let ctx = AppContext::new(test_config(), Some(Arc::new(fixture_models())));
    server::start(ctx).expect("server should bind an ephemeral port")
}

fn start_without_models() -> RunningServer {
    let ctx = AppContext::new(test_config(), None);
    server::start(ctx).expect("server should bind an ephemeral port")
}

fn base_url(running: &RunningServer) -> String {
    format!("http://127.0.0.1:{}", running.port())
}

fn example_payload() -> serde_json::Value {
    serde_json::json!({
        "relative_compactness": 0.71,
        "surface_area": 609.5,
        "wall_area": 300,
        "roof_area": 150.25,
        "overall_height": 3.5,
        "orientation": 2,
        "glazing_area": 0.25,
        "glazing_area_distribution": 2,
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn welcome_and_predict_end_to_end() {
    let running = start_with_models();
    let base = base_url(&running);
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*",
        "CORS header should be attached to every response"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], WELCOME_MESSAGE);

    let response = client
        .post(format!("{base}/predict"))
        .json(&example_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    // heating = compactness + 15, cooling = 18 with the fixture artifacts
    assert!((body["heating_load"].as_f64().unwrap() - 15.71).abs() < 1e-9);
    assert!((body["cooling_load"].as_f64().unwrap() - 18.0).abs() < 1e-9);
    assert_eq!(body["efficiency"], "High");
    assert_eq!(body["recommendation"], "Optimal performance achieved");

    running.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn invalid_field_yields_422_with_detail() {
    let running = start_with_models();
    let base = base_url(&running);

    let mut payload = example_payload();
    payload["relative_compactness"] = serde_json::json!(0.5);

    let response = reqwest::Client::new()
        .post(format!("{base}/predict"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"][0]["field"], "relative_compactness");

    running.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_models_serve_root_but_fail_predictions_opaquely() {
    let running = start_without_models();
    let base = base_url(&running);
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], WELCOME_MESSAGE);

    let response = client
        .post(format!("{base}/predict"))
        .json(&example_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Prediction failed");

    running.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn routing_rejects_unknown_paths_and_methods() {
    let running = start_with_models();
    let base = base_url(&running);
    let client = reqwest::Client::new();

    let response = client.get(format!("{base}/metrics")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    let response = client.get(format!("{base}/predict")).send().await.unwrap();
    assert_eq!(response.status(), 405);

    running.shutdown().await;
}
