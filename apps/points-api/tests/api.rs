//! End-to-end tests: a real listener on an ephemeral port, driven with reqwest.

use std::net::SocketAddr;

use points_api::handlers::{HealthResponse, PointsResponse, ProcessReceiptResponse};
use points_api::{create_router, ApiConfig, AppState, MissingReceiptPolicy};
use points_core::{compute_points, Receipt};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Starts the API on 127.0.0.1 with a random port and returns its base URL.
async fn spawn_server(policy: MissingReceiptPolicy) -> String {
    let config = ApiConfig {
        bind_addr: "127.0.0.1".to_string(),
        port: 0,
        missing_receipt: policy,
    };

    let listener = TcpListener::bind(config.bind_address()).await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(config));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn target_fixture() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

fn corner_market_fixture() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

async fn submit(client: &reqwest::Client, base: &str, body: &Value) -> String {
    let response = client
        .post(format!("{}/receipts/process", base))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ProcessReceiptResponse = response.json().await.unwrap();
    body.id
}

async fn points(client: &reqwest::Client, base: &str, id: &str) -> reqwest::Response {
    client
        .get(format!("{}/receipt/{}/points", base, id))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_submit_then_points_matches_calculator() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    for (fixture, expected) in [(target_fixture(), 28), (corner_market_fixture(), 109)] {
        let id = submit(&client, &base, &fixture).await;

        let response = points(&client, &base, &id).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: PointsResponse = response.json().await.unwrap();

        let receipt: Receipt = serde_json::from_value(fixture).unwrap();
        assert_eq!(body.points, compute_points(&receipt));
        assert_eq!(body.points, expected);
    }
}

#[tokio::test]
async fn test_response_shapes() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .json(&target_fixture())
        .send()
        .await
        .unwrap();
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body.as_object().unwrap().len(), 1);

    let body: Value = points(&client, &base, &id).await.json().await.unwrap();
    assert_eq!(body, json!({ "points": 28 }));
}

#[tokio::test]
async fn test_each_submission_gets_a_new_id() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let a = submit(&client, &base, &target_fixture()).await;
    let b = submit(&client, &base, &target_fixture()).await;
    assert_ne!(a, b);

    let health: HealthResponse = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.receipts, 2);
}

#[tokio::test]
async fn test_malformed_body_is_400_with_message() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_shape_is_400() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/receipts/process", base))
        .json(&json!({ "retailer": "Target", "items": "none" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("invalid type"));
}

#[tokio::test]
async fn test_malformed_fields_still_score() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    // Every field is well-formed JSON but none parses for scoring.
    let fixture = json!({
        "retailer": "Shop",
        "purchaseDate": "yesterday",
        "purchaseTime": "noon",
        "items": [{ "shortDescription": "abc", "price": "free" }],
        "total": "lots"
    });
    let id = submit(&client, &base, &fixture).await;

    let body: PointsResponse = points(&client, &base, &id).await.json().await.unwrap();
    // 4 (retailer) + 50 + 25 (total → 0.0) + 6 (date → 0001-01-01)
    assert_eq!(body.points, 85);
}

#[tokio::test]
async fn test_unknown_id_is_404_by_default() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let response = points(&client, &base, "never-submitted").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.text().await.unwrap(),
        "Receipt not found: never-submitted"
    );
}

#[tokio::test]
async fn test_unknown_id_scores_empty_receipt_when_configured() {
    let base = spawn_server(MissingReceiptPolicy::ScoreEmpty).await;
    let client = reqwest::Client::new();

    let response = points(&client, &base, "never-submitted").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: PointsResponse = response.json().await.unwrap();
    assert_eq!(body.points, compute_points(&Receipt::default()));
    assert_eq!(body.points, 81);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let base = spawn_server(MissingReceiptPolicy::NotFound).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/receipts/process", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
