// src/repository/recording_repository.rs
use std::sync::Arc;

use crate::domain::recording_model::{NewRecording, Recording, RecordingLocation};
use crate::error::AppResult;
use crate::infrastructure::supabase::SupabaseClient;

pub struct RecordingRepository {
    client: Arc<SupabaseClient>,
    table: String,
}

impl RecordingRepository {
    pub fn new(client: Arc<SupabaseClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// メタデータ行を挿入し、挿入された行を返す（返却行がなければ None）
    pub async fn create(&self, recording: &NewRecording) -> AppResult<Option<Recording>> {
        let rows: Vec<Recording> = self.client.table(&self.table).insert(recording).await?;
        Ok(rows.into_iter().next())
    }

    /// 作成日時の新しい順に取得
    pub async fn find_all(&self, ticket_id: Option<i64>) -> AppResult<Vec<Recording>> {
        let mut query = self
            .client
            .table(&self.table)
            .order("created_at", true);

        if let Some(ticket_id) = ticket_id {
            query = query.eq("ticket_id", ticket_id);
        }

        query.fetch().await
    }

    pub async fn find_location(&self, id: i64) -> AppResult<Option<RecordingLocation>> {
        let rows: Vec<RecordingLocation> = self
            .client
            .table(&self.table)
            .select("storage_path")
            .eq("id", id)
            .fetch()
            .await?;
        Ok(rows.into_iter().next())
    }
}
