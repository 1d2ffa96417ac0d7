use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::participant::Participant;

pub const STATUS_INCOMPLETE: &str = "INCOMPLETE";
pub const STATUS_PRESENT: &str = "PRESENT";

/// One row per (participant, event) pair, enforced by a storage-level
/// uniqueness constraint. `check_in_time` is set once at creation;
/// `check_out_time` transitions from NULL exactly once, after which the
/// record is terminal. The participant name is snapshotted at check-in and
/// only changes through an administrative override.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AttendanceRecord {
    pub id: String,
    pub participant_id: String,
    pub event_id: String,
    pub first_name: String,
    pub last_name: String,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub status: String,
}

impl AttendanceRecord {
    pub fn check_in(participant: &Participant, event_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            participant_id: participant.id.clone(),
            event_id: event_id.to_string(),
            first_name: participant.first_name.clone(),
            last_name: participant.last_name.clone(),
            check_in_time: now,
            check_out_time: None,
            status: STATUS_INCOMPLETE.to_string(),
        }
    }
}

/// Result of a single scan for a (participant, event) pair.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanOutcome {
    CheckedIn,
    CheckedOut,
    AlreadyComplete,
}

/// Joined row for operator listings (record + participant + group + event).
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct AttendanceRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub group_name: Option<String>,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub status: String,
}

/// Joined row for a participant's own history view.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct ParticipantAttendanceRow {
    pub event_name: String,
    pub event_date: NaiveDate,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub status: String,
}
