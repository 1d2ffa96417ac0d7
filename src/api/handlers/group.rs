use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateGroupRequest;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::group::Group;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Public: the registration form needs the group list before any session
/// exists.
pub async fn list_groups(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let groups = state.group_repo.list().await?;
    Ok(Json(groups))
}

pub async fn create_group(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Group name is required".into()));
    }

    let group = state.group_repo.create(&Group::new(payload.name)).await?;
    info!("Created group {} ({})", group.name, group.id);

    Ok(Json(group))
}
