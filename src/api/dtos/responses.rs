use serde::Serialize;

use crate::domain::models::attendance::{AttendanceRow, ParticipantAttendanceRow, ScanOutcome};
use crate::domain::models::qr::QrPayload;

#[derive(Serialize)]
pub struct ScanResponse {
    pub outcome: ScanOutcome,
    pub message: String,
}

#[derive(Serialize)]
pub struct QrResponse {
    pub qr_data: Option<QrPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRow>,
}

#[derive(Serialize)]
pub struct ParticipantHistoryResponse {
    pub records: Vec<ParticipantAttendanceRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
