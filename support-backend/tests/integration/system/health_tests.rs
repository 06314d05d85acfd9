// tests/integration/system/health_tests.rs

use axum::http::StatusCode;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::app_helper::setup_app;
use crate::common::request::{get_request, response_json};

#[tokio::test]
async fn test_health_reports_connected() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/opportunities"))
        .and(header("prefer", "count=exact"))
        .and(header("apikey", "test-service-key"))
        .and(header("authorization", "Bearer test-service-key"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "*/12"))
        .expect(1)
        .mount(&supabase)
        .await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "connected");
    assert!(json["timestamp"].as_str().is_some());
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_health_reports_disconnected_on_upstream_error() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/opportunities"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&supabase)
        .await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    // 疎通失敗でも 200 でエラー内容を返す
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["database"], "disconnected");
    assert!(json["error"].as_str().unwrap().contains("503"));
    assert!(json.get("timestamp").is_none());
}

#[tokio::test]
async fn test_root_describes_service() {
    let (app, _supabase) = setup_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["name"], "Soporte Oportunidades API");
    assert_eq!(json["version"], "1.0.0");
    assert!(json.get("documentation").is_none());
    assert_eq!(json["endpoints"]["health"], "/health");
    assert_eq!(json["endpoints"]["tickets"], "/api/tickets");
    assert_eq!(json["endpoints"]["recordings"], "/api/recordings");
}
