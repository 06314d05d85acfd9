// support-backend/src/utils/error_helper.rs

//! エラーハンドリングの統一化ヘルパー
//!
//! サービス層とハンドラー層で共通して使用するエラー処理パターンを提供します。

use crate::error::AppError;
use tracing::{error, warn};

// =============================================================================
// ログ付きエラー変換パターン
// =============================================================================

/// 外部サービス（Supabase）のエラーをログ付きで生成
///
/// # Arguments
/// * `status` - 外部サービスが返したHTTPステータス
/// * `message` - 外部サービスのエラーメッセージ（そのままクライアントへ返す）
/// * `context` - エラーが発生したコンテキスト
pub fn external_service_error(status: u16, message: &str, context: &str) -> AppError {
    error!(
        status = status,
        context = %context,
        message = %message,
        "External service request failed"
    );
    AppError::ExternalServiceError(message.to_string())
}

/// 内部サーバーエラーをログ付きで生成
pub fn internal_server_error<E: std::fmt::Display>(error: E, context: &str) -> AppError {
    error!(
        error = %error,
        context = %context,
        "Internal server error occurred"
    );
    AppError::InternalServerError(error.to_string())
}

/// 入力エラーをログ付きで生成
pub fn bad_request_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Rejected client input"
    );
    AppError::BadRequest(message.to_string())
}

/// リソース未発見エラーをログ付きで生成
pub fn not_found_error(resource: &str, identifier: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        resource = %resource,
        identifier = %identifier,
        "Resource not found"
    );
    AppError::NotFound(format!("{} not found", resource))
}
