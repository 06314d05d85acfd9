// src/api/handlers/recording_handler.rs
use axum::{
    extract::{DefaultBodyLimit, Json, Multipart, Path, Query, State},
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::api::dto::recording_dto::{
    DownloadUrlResponse, RecordingFilterDto, UploadRecordingQuery, UploadRecordingResponse,
};
use crate::api::AppState;
use crate::domain::recording_model::Recording;
use crate::error::{AppError, AppResult};

/// multipart から取り出したファイルパート
struct FilePart {
    file_name: String,
    content_type: Option<String>,
    data: Vec<u8>,
}

/// 音声ファイルのアップロードハンドラー
///
/// `ticket_id` はクエリパラメータ・フォームフィールドのどちらでも受け付ける（クエリ優先）。
pub async fn upload_recording_handler(
    State(app_state): State<AppState>,
    Query(query): Query<UploadRecordingQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadRecordingResponse>> {
    let mut file: Option<FilePart> = None;
    let mut form_ticket_id: Option<i64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart data: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file = Some(FilePart {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "ticket_id" => {
                let raw = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read ticket_id: {}", e))
                })?;
                let raw = raw.trim();
                if !raw.is_empty() {
                    form_ticket_id = Some(raw.parse().map_err(|_| {
                        AppError::BadRequest(format!("Invalid ticket_id: {}", raw))
                    })?);
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let ticket_id = query.ticket_id.or(form_ticket_id);

    info!(
        filename = %file.file_name,
        size = file.data.len(),
        ticket_id = ?ticket_id,
        "Starting recording upload"
    );

    let uploaded = app_state
        .recording_service
        .upload_recording(
            &file.file_name,
            file.content_type.as_deref(),
            file.data,
            ticket_id,
        )
        .await?;

    Ok(Json(uploaded.into()))
}

pub async fn list_recordings_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<RecordingFilterDto>,
) -> AppResult<Json<Vec<Recording>>> {
    info!(ticket_id = ?filter.ticket_id, "Listing recordings");

    let recordings = app_state
        .recording_service
        .list_recordings(filter.ticket_id)
        .await?;

    Ok(Json(recordings))
}

pub async fn download_recording_handler(
    State(app_state): State<AppState>,
    Path(recording_id): Path<i64>,
) -> AppResult<Json<DownloadUrlResponse>> {
    info!(recording_id = recording_id, "Resolving recording download URL");

    let link = app_state
        .recording_service
        .download_link(recording_id)
        .await?;

    Ok(Json(link.into()))
}

pub fn recording_router(app_state: AppState) -> Router {
    let body_limit = app_state.config.server.body_limit;

    Router::new()
        .route(
            "/api/recordings/upload",
            post(upload_recording_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/recordings", get(list_recordings_handler))
        .route(
            "/api/recordings/{id}/download",
            get(download_recording_handler),
        )
        .with_state(app_state)
}
