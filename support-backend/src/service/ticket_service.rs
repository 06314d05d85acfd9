// src/service/ticket_service.rs
use std::sync::Arc;

use tracing::info;

use crate::domain::ticket_model::{Ticket, TicketChanges};
use crate::error::AppResult;
use crate::repository::ticket_repository::TicketRepository;
use crate::utils::error_helper::bad_request_error;

pub struct TicketService {
    repo: Arc<TicketRepository>,
}

impl TicketService {
    pub fn new(repo: Arc<TicketRepository>) -> Self {
        Self { repo }
    }

    /// status / priority は外部クエリで絞り込み、search は取得後にメモリ上で適用する
    pub async fn list_tickets(
        &self,
        status: Option<&str>,
        priority: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<Ticket>> {
        let status = non_empty(status);
        let priority = non_empty(priority);

        let tickets = self.repo.find_with_filter(status, priority).await?;

        let Some(search) = non_empty(search) else {
            return Ok(tickets);
        };

        let needle = search.to_lowercase();
        let matched: Vec<Ticket> = tickets
            .into_iter()
            .filter(|ticket| ticket.matches_search(&needle))
            .collect();

        info!(
            search = %search,
            matched = matched.len(),
            "Filtered tickets by search term"
        );

        Ok(matched)
    }

    pub async fn update_ticket(&self, id: i64, changes: TicketChanges) -> AppResult<Vec<Ticket>> {
        if changes.is_empty() {
            return Err(bad_request_error(
                "No fields to update",
                "ticket_service::update_ticket",
            ));
        }

        let updated = self.repo.update(id, &changes).await?;

        info!(ticket_id = id, updated = updated.len(), "Ticket updated");

        Ok(updated)
    }

    /// 外部サービスへの疎通確認（件数クエリ）
    pub async fn check_connection(&self) -> AppResult<Option<u64>> {
        self.repo.count().await
    }
}

// 空文字のクエリパラメータは未指定として扱う
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
