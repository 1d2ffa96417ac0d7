use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub id_number: String,
    pub year_level: String,
    pub section: String,
    pub group_id: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub id_number: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub event_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub code: String,
}

#[derive(Deserialize)]
pub struct ScanRequest {
    pub participant_id: String,
    pub event_id: String,
}

#[derive(Deserialize)]
pub struct AttendanceListQuery {
    pub event_id: Option<String>,
}

#[derive(Deserialize)]
pub struct EditAttendanceRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}
