// support-backend/src/service/storage_service.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use crate::infrastructure::supabase::SupabaseClient;

/// ストレージサービスのトレイト定義
#[async_trait]
pub trait StorageService: Send + Sync {
    /// ファイルを指定キーに書き込む
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> AppResult<()>;

    /// ダウンロード用の公開URLを生成
    fn public_url(&self, key: &str) -> String;
}

/// Supabase Storage の実装
pub struct SupabaseStorageService {
    client: Arc<SupabaseClient>,
    bucket: String,
}

impl SupabaseStorageService {
    pub fn new(client: Arc<SupabaseClient>, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl StorageService for SupabaseStorageService {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> AppResult<()> {
        self.client
            .storage(&self.bucket)
            .upload(key, data, content_type)
            .await
    }

    fn public_url(&self, key: &str) -> String {
        self.client.storage(&self.bucket).public_url(key)
    }
}
