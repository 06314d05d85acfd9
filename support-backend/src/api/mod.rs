// support-backend/src/api/mod.rs
use axum::{middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::infrastructure::supabase::SupabaseClient;
use crate::logging::request_tracing;
use crate::middleware::cors::cors_layer;
use crate::repository::{
    recording_repository::RecordingRepository, ticket_repository::TicketRepository,
};
use crate::service::{
    recording_service::RecordingService,
    storage_service::{StorageService, SupabaseStorageService},
    ticket_service::TicketService,
};

pub mod dto;
pub mod handlers;

use handlers::{
    recording_handler::recording_router, system_handler::system_router,
    ticket_handler::ticket_router,
};

/// 統一されたアプリケーション状態
///
/// Supabase クライアントは起動時に一度だけ作られ、各サービスで読み取り専用に共有される。
#[derive(Clone)]
pub struct AppState {
    pub ticket_service: Arc<TicketService>,
    pub recording_service: Arc<RecordingService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let client = Arc::new(SupabaseClient::new(&config.supabase)?);
        let storage = Arc::new(SupabaseStorageService::new(
            client.clone(),
            config.supabase.storage_bucket.clone(),
        ));

        Ok(Self::with_storage(config, client, storage))
    }

    /// ストレージ実装を差し替えて状態を構築
    pub fn with_storage(
        config: AppConfig,
        client: Arc<SupabaseClient>,
        storage: Arc<dyn StorageService>,
    ) -> Self {
        let ticket_repo = Arc::new(TicketRepository::new(
            client.clone(),
            config.supabase.tickets_table.clone(),
        ));
        let recording_repo = Arc::new(RecordingRepository::new(
            client,
            config.supabase.recordings_table.clone(),
        ));

        Self {
            ticket_service: Arc::new(TicketService::new(ticket_repo)),
            recording_service: Arc::new(RecordingService::new(recording_repo, storage)),
            config: Arc::new(config),
        }
    }
}

/// 全ルートとミドルウェアを組み立てる
pub fn app_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_allowed_origins);

    Router::new()
        .merge(system_router(app_state.clone()))
        .merge(ticket_router(app_state.clone()))
        .merge(recording_router(app_state))
        .layer(axum_middleware::from_fn(request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
