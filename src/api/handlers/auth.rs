use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::auth::{AuthResponse, UserProfile};
use crate::domain::models::participant::{NewParticipantParams, Participant};
use crate::domain::services::auth_service::ACCESS_TOKEN_HOURS;
use crate::domain::services::qr_payload::build_qr_payload;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2, PasswordHash, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    for (field, value) in [
        ("first_name", &payload.first_name),
        ("last_name", &payload.last_name),
        ("email", &payload.email),
        ("password", &payload.password),
        ("id_number", &payload.id_number),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
    }

    if state.participant_repo.exists_with_email_or_id_number(&payload.email, &payload.id_number).await? {
        return Err(AppError::Conflict("Email or ID number already registered".into()));
    }

    if let Some(group_id) = &payload.group_id {
        state.group_repo.find_by_id(group_id).await?
            .ok_or_else(|| AppError::Validation("Unknown group".into()))?;
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let participant = Participant::new(NewParticipantParams {
        id_number: payload.id_number,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        password_hash,
        year_level: payload.year_level,
        section: payload.section,
        group_id: payload.group_id,
    });
    let created = state.participant_repo.create(&participant).await?;

    info!("Registered participant {}", created.id);

    Ok(Json(serde_json::json!({
        "id": created.id,
        "id_number": created.id_number,
    })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let participant = state.participant_repo.find_by_id_number(&payload.id_number).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&participant.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let group_name = match &participant.group_id {
        Some(group_id) => state.group_repo.find_by_id(group_id).await?.map(|g| g.name),
        None => None,
    };

    let active_event = state.event_registry.get_active().await?;
    let qr_data = build_qr_payload(&participant, group_name, active_event.as_ref());
    let message = qr_data.is_none().then(|| "No active event available".to_string());

    let (access_jwt, csrf_token) = state.auth_service.issue_access_token(&participant)?;
    set_access_cookie(&cookies, &access_jwt);

    info!("Participant logged in: {}", participant.id);

    Ok(Json(AuthResponse {
        csrf_token,
        qr_data,
        message,
        user: UserProfile {
            id: participant.id,
            role: participant.role,
        },
    }))
}

pub async fn logout(cookies: Cookies) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build(("access_token", "")).path("/").into());

    info!("Participant logged out");

    Ok(StatusCode::OK)
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    AuthUser(principal): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.new_password.len() < 8 {
        return Err(AppError::Validation("New password must be at least 8 characters".into()));
    }

    let participant = state.participant_repo.find_by_id(&principal.id).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&participant.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.old_password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Validation("Old password is incorrect".into()))?;

    let salt = SaltString::generate(&mut OsRng);
    let new_hash = Argon2::default()
        .hash_password(payload.new_password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    state.participant_repo.update_password(&participant.id, &new_hash).await?;

    info!("Password changed for participant {}", participant.id);

    Ok(Json(serde_json::json!({ "status": "password_changed" })))
}

fn set_access_cookie(cookies: &Cookies, access: &str) {
    let mut access_c = Cookie::new("access_token", access.to_string());
    access_c.set_http_only(true);
    access_c.set_secure(true);
    access_c.set_same_site(SameSite::Strict);
    access_c.set_path("/");
    access_c.set_max_age(Duration::hours(ACCESS_TOKEN_HOURS));
    cookies.add(access_c);
}
