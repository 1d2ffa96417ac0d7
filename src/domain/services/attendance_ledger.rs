use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::models::attendance::{
    AttendanceRecord, AttendanceRow, ParticipantAttendanceRow, ScanOutcome,
};
use crate::domain::ports::{AttendanceRepository, EventRepository, ParticipantRepository};
use crate::error::AppError;

/// Optional fields for an administrative override. `None` leaves the stored
/// value untouched. Status is never recomputed from the edited timestamps.
#[derive(Debug, Default)]
pub struct RecordOverride {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub check_in_time: Option<DateTime<Utc>>,
    pub check_out_time: Option<DateTime<Utc>>,
}

/// Owns the per-(participant, event) attendance state machine:
///
/// `ABSENT --scan--> INCOMPLETE --scan--> PRESENT --scan--> PRESENT (no-op)`
///
/// ABSENT is represented by the absence of a row. The UNIQUE constraint on
/// (participant_id, event_id) backstops the read-then-write logic under
/// concurrent identical scans.
pub struct AttendanceLedger {
    attendance: Arc<dyn AttendanceRepository>,
    participants: Arc<dyn ParticipantRepository>,
    events: Arc<dyn EventRepository>,
}

impl AttendanceLedger {
    pub fn new(
        attendance: Arc<dyn AttendanceRepository>,
        participants: Arc<dyn ParticipantRepository>,
        events: Arc<dyn EventRepository>,
    ) -> Self {
        Self { attendance, participants, events }
    }

    pub async fn record_scan(
        &self,
        participant_id: &str,
        event_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ScanOutcome, AppError> {
        if let Some(existing) = self.attendance.find_by_pair(participant_id, event_id).await? {
            return self.complete(existing, now).await;
        }

        let participant = self.participants.find_by_id(participant_id).await?
            .ok_or_else(|| AppError::NotFound("Participant not found".into()))?;
        self.events.find_by_id(event_id).await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

        let record = AttendanceRecord::check_in(&participant, event_id, now);
        if self.attendance.insert(&record).await? {
            info!("Checked in participant {} for event {}", participant_id, event_id);
            return Ok(ScanOutcome::CheckedIn);
        }

        // Lost the insert race to a concurrent scan for the same pair; the
        // row exists now, so fall through to the check-out path.
        warn!("Duplicate concurrent scan for participant {} event {}", participant_id, event_id);
        let existing = self.attendance.find_by_pair(participant_id, event_id).await?
            .ok_or_else(|| AppError::InternalWithMsg("attendance row missing after insert conflict".into()))?;
        self.complete(existing, now).await
    }

    async fn complete(&self, record: AttendanceRecord, now: DateTime<Utc>) -> Result<ScanOutcome, AppError> {
        if record.check_out_time.is_some() {
            return Ok(ScanOutcome::AlreadyComplete);
        }
        if self.attendance.set_check_out(&record.id, now).await? {
            info!("Checked out participant {} for event {}", record.participant_id, record.event_id);
            Ok(ScanOutcome::CheckedOut)
        } else {
            // Another scan completed the record between the read and the
            // guarded update.
            Ok(ScanOutcome::AlreadyComplete)
        }
    }

    pub async fn list_for_event(&self, event_id: Option<&str>) -> Result<Vec<AttendanceRow>, AppError> {
        self.attendance.list_rows(event_id).await
    }

    /// A participant's own history. An empty list is a normal answer, not an
    /// error.
    pub async fn list_for_participant(&self, participant_id: &str) -> Result<Vec<ParticipantAttendanceRow>, AppError> {
        self.attendance.list_for_participant(participant_id).await
    }

    /// Administrative override, deliberately bypassing the scan state
    /// machine so operators can correct bad scans. Only the supplied fields
    /// change; status stays whatever it was.
    pub async fn override_record(&self, record_id: &str, edit: RecordOverride) -> Result<AttendanceRecord, AppError> {
        let mut record = self.attendance.find_by_id(record_id).await?
            .ok_or_else(|| AppError::NotFound("Attendance record not found".into()))?;

        if let Some(val) = edit.first_name { record.first_name = val; }
        if let Some(val) = edit.last_name { record.last_name = val; }
        if let Some(val) = edit.check_in_time { record.check_in_time = val; }
        if let Some(val) = edit.check_out_time { record.check_out_time = Some(val); }

        self.attendance.override_fields(
            &record.id,
            &record.first_name,
            &record.last_name,
            record.check_in_time,
            record.check_out_time,
        ).await?;

        info!("Administrative override on attendance record {}", record.id);
        Ok(record)
    }

    pub async fn delete(&self, record_id: &str) -> Result<(), AppError> {
        self.attendance.delete(record_id).await?;
        info!("Deleted attendance record {}", record_id);
        Ok(())
    }
}
