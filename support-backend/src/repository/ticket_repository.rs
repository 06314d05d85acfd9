// src/repository/ticket_repository.rs
use std::sync::Arc;

use crate::domain::ticket_model::{Ticket, TicketChanges};
use crate::error::AppResult;
use crate::infrastructure::supabase::SupabaseClient;

pub struct TicketRepository {
    client: Arc<SupabaseClient>,
    table: String,
}

impl TicketRepository {
    pub fn new(client: Arc<SupabaseClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// status / priority の完全一致フィルタで取得
    pub async fn find_with_filter(
        &self,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> AppResult<Vec<Ticket>> {
        let mut query = self.client.table(&self.table);

        if let Some(status) = status {
            query = query.eq("status", status);
        }
        if let Some(priority) = priority {
            query = query.eq("priority", priority);
        }

        query.fetch().await
    }

    pub async fn update(&self, id: i64, changes: &TicketChanges) -> AppResult<Vec<Ticket>> {
        self.client
            .table(&self.table)
            .eq("id", id)
            .update(changes)
            .await
    }

    pub async fn count(&self) -> AppResult<Option<u64>> {
        self.client.table(&self.table).count().await
    }
}
