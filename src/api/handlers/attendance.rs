use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{AttendanceListQuery, EditAttendanceRequest, ScanRequest};
use crate::api::dtos::responses::{AttendanceListResponse, ParticipantHistoryResponse, ScanResponse};
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::domain::models::attendance::ScanOutcome;
use crate::domain::services::attendance_ledger::RecordOverride;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;

/// Check-in/check-out entry point for the scanning station. The body is the
/// (participant, event) pair decoded from a QR payload.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScanRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.ledger
        .record_scan(&payload.participant_id, &payload.event_id, Utc::now())
        .await?;

    let message = match outcome {
        ScanOutcome::CheckedIn => "Checked in successfully. Status: INCOMPLETE",
        ScanOutcome::CheckedOut => "Checked out successfully. Status: PRESENT",
        ScanOutcome::AlreadyComplete => "Attendance already completed. Status: PRESENT",
    };

    Ok(Json(ScanResponse { outcome, message: message.to_string() }))
}

pub async fn list_attendance(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<AttendanceListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.ledger.list_for_event(query.event_id.as_deref()).await?;
    Ok(Json(AttendanceListResponse { records }))
}

pub async fn edit_attendance(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(record_id): Path<String>,
    Json(payload): Json<EditAttendanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.ledger.override_record(&record_id, RecordOverride {
        first_name: payload.first_name,
        last_name: payload.last_name,
        check_in_time: payload.check_in_time,
        check_out_time: payload.check_out_time,
    }).await?;

    Ok(Json(updated))
}

pub async fn delete_attendance(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(record_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.ledger.delete(&record_id).await?;
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn my_attendance(
    State(state): State<Arc<AppState>>,
    AuthUser(principal): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let records = state.ledger.list_for_participant(&principal.id).await?;
    let message = records.is_empty().then(|| "No attendance records found".to_string());
    Ok(Json(ParticipantHistoryResponse { records, message }))
}
