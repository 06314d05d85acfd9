// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ExternalServiceError(_)
            | AppError::InternalServerError(_)
            | AppError::HttpClient(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::ExternalServiceError(_) => "external_service_error",
            AppError::InternalServerError(_) => "internal_server_error",
            AppError::HttpClient(_) => "http_client_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    // error_helper 経由で生成されるエラーは生成時にログ済み
    fn logged_at_creation(&self) -> bool {
        !matches!(self, AppError::HttpClient(_) | AppError::Serialization(_))
    }
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // `?` で変換されたエラーはここで一度だけログに残す
        if status.is_server_error() && !self.logged_at_creation() {
            tracing::error!(error = %self, error_type = self.error_type(), "Request failed");
        }

        let error_response = ErrorResponse {
            success: false,
            detail: self.to_string(),
            error_type: self.error_type().to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub detail: String,
    pub error_type: String,
}
