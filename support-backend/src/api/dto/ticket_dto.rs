// src/api/dto/ticket_dto.rs
use serde::{Deserialize, Serialize};

use crate::domain::ticket_model::TicketChanges;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TicketFilterDto {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
}

/// `id` は本文にも必須だが、更新対象はパスの id で決まる
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateTicketDto {
    pub id: i64,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
}

impl From<UpdateTicketDto> for TicketChanges {
    fn from(dto: UpdateTicketDto) -> Self {
        Self {
            status: dto.status,
            priority: dto.priority,
            notes: dto.notes,
            assigned_to: dto.assigned_to,
        }
    }
}
