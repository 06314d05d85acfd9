// src/service/recording_service.rs
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::recording_model::{NewRecording, Recording};
use crate::error::AppResult;
use crate::repository::recording_repository::RecordingRepository;
use crate::service::storage_service::StorageService;
use crate::utils::error_helper::{bad_request_error, not_found_error};

/// 受け付ける音声ファイルの拡張子
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["mp3", "wav", "m4a", "ogg", "flac"];

const DEFAULT_MIME_TYPE: &str = "audio/mpeg";

/// アップロード完了時の結果
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedRecording {
    pub filename: String,
    pub storage_path: String,
    pub size: usize,
    pub recording_id: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadLink {
    pub download_url: String,
    pub storage_path: String,
}

pub struct RecordingService {
    repo: Arc<RecordingRepository>,
    storage: Arc<dyn StorageService>,
}

impl RecordingService {
    pub fn new(repo: Arc<RecordingRepository>, storage: Arc<dyn StorageService>) -> Self {
        Self { repo, storage }
    }

    /// 検証 → Storage 書き込み → メタデータ挿入
    ///
    /// 書き込み後に挿入が失敗しても Storage 側のオブジェクトは削除しない。
    pub async fn upload_recording(
        &self,
        filename: &str,
        content_type: Option<&str>,
        data: Vec<u8>,
        ticket_id: Option<i64>,
    ) -> AppResult<UploadedRecording> {
        if filename.is_empty() {
            return Err(bad_request_error(
                "File must have a name",
                "recording_service::upload_recording",
            ));
        }
        validate_extension(filename)?;
        if data.is_empty() {
            return Err(bad_request_error(
                "File is empty",
                "recording_service::upload_recording",
            ));
        }

        let storage_path = storage_path_for(filename, ticket_id);
        let mime_type = resolve_mime_type(content_type);
        let size = data.len();

        info!(
            filename = %filename,
            storage_path = %storage_path,
            size = size,
            ticket_id = ?ticket_id,
            "Uploading recording"
        );

        self.storage.upload(&storage_path, data, &mime_type).await?;

        let metadata = NewRecording {
            filename: filename.to_string(),
            size: size as i64,
            mime_type,
            storage_path: storage_path.clone(),
            ticket_id,
        };

        let created = self.repo.create(&metadata).await.inspect_err(|e| {
            warn!(
                storage_path = %storage_path,
                error = %e,
                "Metadata insert failed after object was stored"
            );
        })?;

        let recording_id = created.and_then(|recording| recording.id().cloned());

        info!(
            storage_path = %storage_path,
            recording_id = ?recording_id,
            "Recording uploaded successfully"
        );

        Ok(UploadedRecording {
            filename: filename.to_string(),
            storage_path,
            size,
            recording_id,
        })
    }

    /// `ticket_id` が 0 の場合は絞り込まない
    pub async fn list_recordings(&self, ticket_id: Option<i64>) -> AppResult<Vec<Recording>> {
        self.repo.find_all(linked_ticket(ticket_id)).await
    }

    pub async fn download_link(&self, id: i64) -> AppResult<DownloadLink> {
        let location = self.repo.find_location(id).await?.ok_or_else(|| {
            not_found_error(
                "Recording",
                &id.to_string(),
                "recording_service::download_link",
            )
        })?;

        Ok(DownloadLink {
            download_url: self.storage.public_url(&location.storage_path),
            storage_path: location.storage_path,
        })
    }
}

/// 拡張子（大文字小文字は区別しない）が許可リストにあるか検証
pub fn validate_extension(filename: &str) -> AppResult<()> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => {
            let allowed: Vec<String> = ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            Err(bad_request_error(
                &format!("File extension not allowed. Use: {}", allowed.join(", ")),
                "recording_service::validate_extension",
            ))
        }
    }
}

/// `recordings/{ticket_id}/{filename}` または `recordings/{filename}`（ticket_id が 0 なら後者）
pub fn storage_path_for(filename: &str, ticket_id: Option<i64>) -> String {
    match linked_ticket(ticket_id) {
        Some(ticket_id) => format!("recordings/{}/{}", ticket_id, filename),
        None => format!("recordings/{}", filename),
    }
}

// 0 はチケット未指定と同じ扱い（メタデータ行には 0 のまま書き込む）
fn linked_ticket(ticket_id: Option<i64>) -> Option<i64> {
    ticket_id.filter(|id| *id != 0)
}

// 解釈できない Content-Type は既定値に置き換える
fn resolve_mime_type(content_type: Option<&str>) -> String {
    content_type
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .map_or_else(|| DEFAULT_MIME_TYPE.to_string(), |m| m.to_string())
}
