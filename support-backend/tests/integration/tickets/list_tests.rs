// tests/integration/tickets/list_tests.rs

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use crate::common::app_helper::setup_app;
use crate::common::request::{get_request, response_json};

fn ticket_rows() -> Value {
    json!([
        {
            "id": 101,
            "title": "Router reboot",
            "description": "Customer reports no DIAL TONE after storm",
            "status": "open",
            "priority": "high",
            "notes": null,
            "assigned_to": "ana"
        },
        {
            "id": 102,
            "title": "Billing question",
            "description": "Duplicate charge on invoice",
            "status": "open",
            "priority": "high",
            "notes": "called back",
            "assigned_to": null
        },
        {
            "id": 103,
            "title": "Dial-up legacy line",
            "description": null,
            "status": "open",
            "priority": "high",
            "notes": null,
            "assigned_to": null
        },
        {
            "id": 204,
            "title": "Callback",
            "description": "Intermittent dial tone",
            "status": "open",
            "priority": "high",
            "notes": null,
            "assigned_to": null,
            "customer_phone": "+34 600 000 000"
        }
    ])
}

fn ids(json: &Value) -> Vec<i64> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_tickets_without_filters() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .and(query_param("select", "*"))
        .and(query_param_is_missing("status"))
        .and(query_param_is_missing("priority"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_rows()))
        .expect(1)
        .mount(&supabase)
        .await;

    let response = app.oneshot(get_request("/api/tickets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(ids(&json), vec![101, 102, 103, 204]);
    // 未知の列もそのまま返す
    assert_eq!(json[3]["customer_phone"], "+34 600 000 000");
}

#[tokio::test]
async fn test_status_and_priority_pushed_to_query() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .and(query_param("status", "eq.open"))
        .and(query_param("priority", "eq.high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_rows()))
        .expect(1)
        .mount(&supabase)
        .await;

    let response = app
        .oneshot(get_request("/api/tickets?status=open&priority=high"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&response_json(response).await).len(), 4);
}

#[tokio::test]
async fn test_search_matches_description_case_insensitively() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .and(query_param("status", "eq.open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_rows()))
        .expect(1)
        .mount(&supabase)
        .await;

    // "dial tone" は 101 と 204 の description にのみ含まれる（103 の title は "Dial-up"）
    let response = app
        .oneshot(get_request("/api/tickets?status=open&search=DiAl%20ToNe"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&response_json(response).await), vec![101, 204]);
}

#[tokio::test]
async fn test_search_matches_id_and_title() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_rows()))
        .mount(&supabase)
        .await;

    let response = app
        .clone()
        .oneshot(get_request("/api/tickets?search=20"))
        .await
        .unwrap();
    assert_eq!(ids(&response_json(response).await), vec![204]);

    let response = app
        .oneshot(get_request("/api/tickets?search=billing"))
        .await
        .unwrap();
    assert_eq!(ids(&response_json(response).await), vec![102]);
}

#[tokio::test]
async fn test_empty_filters_are_ignored() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .and(query_param_is_missing("status"))
        .and(query_param_is_missing("priority"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_rows()))
        .expect(1)
        .mount(&supabase)
        .await;

    let response = app
        .oneshot(get_request("/api/tickets?status=&priority=&search="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&response_json(response).await).len(), 4);
}

#[tokio::test]
async fn test_rows_with_non_string_columns_are_returned_as_is() {
    let (app, supabase) = setup_app().await;

    let rows = json!([
        {
            "id": 301,
            "title": null,
            "description": "Line 7 keeps dropping",
            "status": "open",
            "priority": 2,
            "notes": null,
            "assigned_to": { "id": 9, "name": "ana" }
        },
        {
            "id": 302,
            "title": 2024,
            "description": null,
            "status": "closed",
            "priority": true,
            "notes": ["a", "b"],
            "assigned_to": null
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows.clone()))
        .mount(&supabase)
        .await;

    let response = app
        .clone()
        .oneshot(get_request("/api/tickets"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, rows);

    // 数値の title も文字列化して検索対象になる
    let response = app
        .oneshot(get_request("/api/tickets?search=202"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&response_json(response).await), vec![302]);
}

#[tokio::test]
async fn test_upstream_error_echoed_as_500() {
    let (app, supabase) = setup_app().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/opportunities"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "42P01",
            "message": "relation \"public.opportunities\" does not exist"
        })))
        .mount(&supabase)
        .await;

    let response = app.oneshot(get_request("/api/tickets")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("x-request-id"));

    let json = response_json(response).await;
    assert_eq!(
        json["detail"],
        "relation \"public.opportunities\" does not exist"
    );
}
