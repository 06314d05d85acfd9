// src/api/handlers/ticket_handler.rs
use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, put},
    Router,
};
use tracing::info;

use crate::api::dto::ticket_dto::{TicketFilterDto, UpdateTicketDto};
use crate::api::AppState;
use crate::domain::ticket_model::Ticket;
use crate::error::AppResult;

pub async fn list_tickets_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<TicketFilterDto>,
) -> AppResult<Json<Vec<Ticket>>> {
    info!(
        status = ?filter.status,
        priority = ?filter.priority,
        search = ?filter.search,
        "Listing tickets"
    );

    let tickets = app_state
        .ticket_service
        .list_tickets(
            filter.status.as_deref(),
            filter.priority.as_deref(),
            filter.search.as_deref(),
        )
        .await?;

    Ok(Json(tickets))
}

pub async fn update_ticket_handler(
    State(app_state): State<AppState>,
    Path(ticket_id): Path<i64>,
    Json(payload): Json<UpdateTicketDto>,
) -> AppResult<Json<Vec<Ticket>>> {
    info!(ticket_id = ticket_id, body_id = payload.id, "Updating ticket");

    let updated = app_state
        .ticket_service
        .update_ticket(ticket_id, payload.into())
        .await?;

    Ok(Json(updated))
}

pub fn ticket_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/tickets", get(list_tickets_handler))
        .route("/api/tickets/{id}", put(update_ticket_handler))
        .with_state(app_state)
}
