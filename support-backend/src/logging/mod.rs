// src/logging/mod.rs

//! リクエスト単位のトレース
//!
//! 各リクエストに `request_id` を割り当て、ハンドラーを `request` スパン内で実行する。
//! サービス層・エラーヘルパーのログはスパン経由で同じ `request_id` を持つ。

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info_span, Instrument, Level};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

/// ハンドラーから参照できるリクエスト情報
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub path: String,
    pub method: String,
}

/// request_id の割り当て・スパン付与・完了ログを行うミドルウェア
///
/// 呼び出し元が `x-request-id` を付けていればそれを引き継ぎ、レスポンスにも同じ値を返す。
pub async fn request_tracing(mut req: Request<Body>, next: Next) -> Response {
    let context = RequestContext {
        request_id: incoming_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string()),
        path: req.uri().path().to_string(),
        method: req.method().to_string(),
    };

    let span = info_span!(
        "request",
        request_id = %context.request_id,
        method = %context.method,
        path = %context.path,
    );

    req.extensions_mut().insert(context.clone());

    let start = Instant::now();
    let mut response = next.run(req).instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();

    span.in_scope(|| match completion_level(status) {
        Level::ERROR => tracing::error!(status, elapsed_ms, "Request completed"),
        Level::WARN => tracing::warn!(status, elapsed_ms, "Request completed"),
        _ => tracing::info!(status, elapsed_ms, "Request completed"),
    });

    if let Ok(value) = HeaderValue::from_str(&context.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

// ヘッダーに載せ直せる短いトークンのみ引き継ぐ
fn incoming_request_id(req: &Request<Body>) -> Option<String> {
    let value = req.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();

    let valid = !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    valid.then(|| value.to_string())
}

fn completion_level(status: u16) -> Level {
    match status {
        500.. => Level::ERROR,
        400..=499 => Level::WARN,
        _ => Level::INFO,
    }
}
