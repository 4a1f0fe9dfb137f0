//! End-to-end HTTP tests.

mod common;

use truthlens::{Prediction, Verdict};

use common::harness::{ModelSetup, TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};

fn article(words: usize) -> String {
    let sentence = "The committee published its quarterly report on regional water usage.";
    let per_sentence = sentence.split_whitespace().count();
    let mut text = String::new();
    while text.split_whitespace().count() + per_sentence <= words {
        text.push_str(sentence);
        text.push(' ');
    }
    text.trim_end().to_string()
}

#[tokio::test]
async fn test_health_with_zero_models() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.models_loaded, 0);
}

#[tokio::test]
async fn test_health_with_loaded_model() {
    let server = spawn_test_server(TestServerConfig::with_model(ModelSetup::Formal(0.9)))
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let health = client.health().await.expect("Health check should succeed");

    assert_eq!(health.models_loaded, 1);
}

#[tokio::test]
async fn test_analyze_sensational_headline() {
    let server = spawn_test_server(TestServerConfig::with_model(ModelSetup::Formal(0.1)))
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let response = client
        .analyze("BREAKING: shocking urgent news, must read before it is deleted!")
        .await
        .expect("Analysis should succeed");

    assert_eq!(response.final_verdict, Verdict::Fake);
    assert_eq!(response.model_results.len(), 3);
    assert_eq!(response.model_results[0].prediction, Prediction::Fake);
    assert_eq!(response.model_results[1].prediction, Prediction::Fake);
    assert_eq!(response.model_results[2].prediction, Prediction::Fake);
    // fake bucket: 0.9, 0.6, 0.7
    assert!((response.confidence - 0.7333).abs() < 1e-3);
}

#[tokio::test]
async fn test_analyze_formal_article() {
    let server = spawn_test_server(TestServerConfig::with_model(ModelSetup::Formal(0.95)))
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let text = format!("Research shows steady progress. {}", article(150));
    let response = client.analyze(&text).await.expect("Analysis should succeed");

    assert_eq!(response.final_verdict, Verdict::Real);
    for result in &response.model_results {
        assert_eq!(result.prediction, Prediction::Real, "{}", result.model_name);
    }
    assert!(response.text_preview.ends_with("..."));
    assert_eq!(response.text_preview.chars().count(), 203);
}

#[tokio::test]
async fn test_analyze_without_model() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());
    let response = client
        .analyze("A brief note.")
        .await
        .expect("Analysis should succeed");

    let custom = &response.model_results[0];
    assert_eq!(custom.model_name, "Custom AI Model");
    assert_eq!(custom.prediction, Prediction::Unknown);
    assert_eq!(custom.error.as_deref(), Some("Model not loaded"));
}

#[tokio::test]
async fn test_analyze_with_failing_model() {
    let server = spawn_test_server(TestServerConfig::with_model(ModelSetup::Failing(
        "device lost".to_string(),
    )))
    .await
    .expect("Server should start");

    let client = TestClient::new(server.url());
    let response = client
        .analyze(&article(120))
        .await
        .expect("Inference failure should not fail the request");

    assert_eq!(response.model_results[0].prediction, Prediction::Error);
    assert_eq!(response.model_results[0].confidence, 0.0);
    assert_eq!(response.model_results[2].prediction, Prediction::Real);
}

#[tokio::test]
async fn test_analyze_empty_text_is_bad_request() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());

    for text in ["", "   ", "\n\t"] {
        match client.analyze(text).await {
            Err(TestClientError::BadRequest(body)) => {
                assert_eq!(body.error, "No text provided");
                assert!(body.details.is_none());
            }
            other => panic!("expected 400 for {text:?}, got {other:?}"),
        }
    }

    match client.analyze_json(serde_json::json!({})).await {
        Err(TestClientError::BadRequest(body)) => assert_eq!(body.error, "No text provided"),
        other => panic!("expected 400 for missing text, got {other:?}"),
    }
}

#[tokio::test]
async fn test_analyze_malformed_body_is_server_error() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let client = TestClient::new(server.url());

    match client.analyze_raw("{\"text\": ").await {
        Err(TestClientError::ServerError(body)) => {
            assert_eq!(body.error, "Analysis failed");
            assert!(body.details.is_some());
        }
        other => panic!("expected 500, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_one_analyzer() {
    let server = spawn_test_server(TestServerConfig::with_model(ModelSetup::Formal(0.5)))
        .await
        .expect("Server should start");

    let mut handles = Vec::new();
    for i in 0..8 {
        let url = server.url();
        handles.push(tokio::spawn(async move {
            let client = TestClient::new(url);
            client.analyze(&format!("Request number {i}")).await
        }));
    }

    for handle in handles {
        let response = handle
            .await
            .expect("task should not panic")
            .expect("Analysis should succeed");
        assert_eq!(response.model_results.len(), 3);
        assert_eq!(response.model_results[0].prediction, Prediction::Uncertain);
    }
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Server should start");

    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/analyze", server.url()))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Preflight should complete");

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
