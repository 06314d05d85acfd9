// support-backend/src/infrastructure/supabase/storage.rs

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::{error_from_response, SupabaseClient};
use crate::error::AppResult;

/// Storage API のバケット単位の操作
pub struct StorageBucket<'a> {
    client: &'a SupabaseClient,
    bucket: String,
}

impl<'a> StorageBucket<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }

    /// オブジェクトを書き込む（既存キーは上書きしない）
    pub async fn upload(&self, path: &str, data: Vec<u8>, content_type: &str) -> AppResult<()> {
        let url = self
            .client
            .storage_url(&format!("object/{}/{}", self.bucket, encode_object_path(path)));

        debug!(bucket = %self.bucket, path = %path, size = data.len(), "Uploading object");

        let response = self
            .client
            .http()
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "storage_bucket::upload").await);
        }

        Ok(())
    }

    /// 公開バケットのダウンロードURL（リクエストは発生しない）
    pub fn public_url(&self, path: &str) -> String {
        self.client.storage_url(&format!(
            "object/public/{}/{}",
            self.bucket,
            encode_object_path(path)
        ))
    }
}

// セグメント単位でエンコードし、区切りの '/' は残す
fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
