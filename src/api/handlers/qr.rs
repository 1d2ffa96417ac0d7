use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::QrResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::qr_payload::build_qr_payload;
use crate::error::AppError;
use std::sync::Arc;

/// Rebuilds the caller's QR payload against whatever event is currently
/// active, so a payload issued at login does not go stale after an
/// activation swap.
pub async fn my_qr(
    State(state): State<Arc<AppState>>,
    AuthUser(principal): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let participant = state.participant_repo.find_by_id(&principal.id).await?
        .ok_or(AppError::Unauthorized)?;

    let group_name = match &participant.group_id {
        Some(group_id) => state.group_repo.find_by_id(group_id).await?.map(|g| g.name),
        None => None,
    };

    let active_event = state.event_registry.get_active().await?;
    let qr_data = build_qr_payload(&participant, group_name, active_event.as_ref());
    let message = qr_data.is_none().then(|| "No active event available".to_string());

    Ok(Json(QrResponse { qr_data, message }))
}
