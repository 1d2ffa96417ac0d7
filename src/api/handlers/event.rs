use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateEventRequest;
use crate::api::extractors::auth::AdminUser;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Event name is required".into()));
    }
    if payload.check_out_time <= payload.check_in_time {
        return Err(AppError::Validation("Check-out time must be after check-in time".into()));
    }

    info!("Creating event: {}", payload.name);

    let event = state.event_registry.create(
        payload.name,
        payload.event_date,
        payload.check_in_time,
        payload.check_out_time,
        payload.code,
    ).await?;

    Ok(Json(event))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_registry.list().await?;
    Ok(Json(events))
}

pub async fn activate_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.event_registry.activate(&event_id).await?;
    Ok(Json(serde_json::json!({ "status": "activated" })))
}
