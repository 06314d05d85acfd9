// src/api/dto/recording_dto.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::service::recording_service::{DownloadLink, UploadedRecording};

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RecordingFilterDto {
    pub ticket_id: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UploadRecordingQuery {
    pub ticket_id: Option<i64>,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug)]
pub struct UploadRecordingResponse {
    pub success: bool,
    pub filename: String,
    pub storage_path: String,
    pub size: usize,
    pub recording_id: Option<Value>,
}

impl From<UploadedRecording> for UploadRecordingResponse {
    fn from(uploaded: UploadedRecording) -> Self {
        Self {
            success: true,
            filename: uploaded.filename,
            storage_path: uploaded.storage_path,
            size: uploaded.size,
            recording_id: uploaded.recording_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DownloadUrlResponse {
    pub download_url: String,
    pub storage_path: String,
}

impl From<DownloadLink> for DownloadUrlResponse {
    fn from(link: DownloadLink) -> Self {
        Self {
            download_url: link.download_url,
            storage_path: link.storage_path,
        }
    }
}
