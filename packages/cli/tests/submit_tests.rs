// ABOUTME: One-shot submit against a mocked recommendation service
// ABOUTME: Covers the printed output and the error exit path

use adstudio_cli::commands::run_submit;
use adstudio_config::Config;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        api_base: format!("{}/api", server.uri()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_submit_prints_previews_and_plan() {
    colored::control::set_override(false);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ads/segment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": {"objective": "conversions"},
            "preview": {"google_search_card": {"title": "iPhone 14 128GB"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rendered = run_submit(&config_for(&server)).await.unwrap();

    assert!(rendered.contains("iPhone 14 128GB"));
    assert!(rendered.contains("\"objective\": \"conversions\""));
    assert!(!rendered.contains("Meta Feed"));
}

#[tokio::test]
async fn test_submit_surfaces_service_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "personas required"})),
        )
        .mount(&server)
        .await;

    let err = run_submit(&config_for(&server)).await.unwrap_err();
    assert_eq!(err.to_string(), "personas required");
}
