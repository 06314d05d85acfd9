// support-backend/src/infrastructure/supabase/mod.rs

//! Supabase（PostgREST テーブルAPI と Storage API）への薄いHTTPクライアント
//!
//! プロセス起動時に一度だけ生成し、`Arc` で全ハンドラーから共有する。

pub mod query;
pub mod storage;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::SupabaseConfig;
use crate::error::{AppError, AppResult};
use crate::utils::error_helper::{external_service_error, internal_server_error};

pub use query::TableQuery;
pub use storage::StorageBucket;

pub struct SupabaseClient {
    http: Client,
    base_url: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        let mut api_key = HeaderValue::from_str(&config.key)
            .map_err(|e| internal_server_error(e, "supabase_client::new"))?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|e| internal_server_error(e, "supabase_client::new"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("support-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// テーブルに対するクエリビルダーを開始
    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery::new(self, name)
    }

    /// Storage バケットのハンドルを取得
    pub fn storage(&self, bucket: &str) -> StorageBucket<'_> {
        StorageBucket::new(self, bucket)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn storage_url(&self, suffix: &str) -> String {
        format!("{}/storage/v1/{}", self.base_url, suffix)
    }
}

/// 2xx 以外のレスポンスを外部サービスエラーへ変換する
pub(crate) async fn error_from_response(response: Response, context: &str) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = extract_error_message(&body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.to_string()
        } else {
            body
        }
    });

    external_service_error(status.as_u16(), &message, context)
}

// PostgREST は {"message": ...}、Storage は {"error": ..., "message": ...} を返す
fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error_description", "msg", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
}
