// src/api/handlers/system_handler.rs
use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use tracing::warn;

use crate::api::dto::system_dto::{EndpointMap, HealthResponse, ServiceInfoResponse};
use crate::api::AppState;

pub const SERVICE_NAME: &str = "Soporte Oportunidades API";

/// 外部サービスへ件数クエリを投げて疎通を確認する（失敗時も 200 で返す）
pub async fn health_check_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    match app_state.ticket_service.check_connection().await {
        Ok(_) => Json(HealthResponse::connected(Utc::now().to_rfc3339())),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            Json(HealthResponse::disconnected(e.to_string()))
        }
    }
}

pub async fn service_info_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            tickets: "/api/tickets".to_string(),
            recordings: "/api/recordings".to_string(),
        },
    })
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
