use crate::domain::models::{
    attendance::{AttendanceRecord, AttendanceRow, ParticipantAttendanceRow},
    event::Event,
    group::Group,
    participant::Participant,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(&self, group: &Group) -> Result<Group, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, AppError>;
    async fn list(&self) -> Result<Vec<Group>, AppError>;
}

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, AppError>;
    async fn find_by_id_number(&self, id_number: &str) -> Result<Option<Participant>, AppError>;
    async fn exists_with_email_or_id_number(&self, email: &str, id_number: &str) -> Result<bool, AppError>;
    async fn update_password(&self, id: &str, password_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    /// The unique active event, if any.
    async fn find_active(&self) -> Result<Option<Event>, AppError>;
    /// All events, newest date first.
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    /// Exclusive activation: clears every active flag and sets the target's,
    /// in one transaction. `NotFound` if `id` does not exist; the clear still
    /// commits in that case, leaving zero events active.
    async fn activate(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<AttendanceRecord>, AppError>;
    async fn find_by_pair(&self, participant_id: &str, event_id: &str) -> Result<Option<AttendanceRecord>, AppError>;
    /// Conflict-tolerant insert. Returns `false` when a row for the
    /// (participant, event) pair already exists.
    async fn insert(&self, record: &AttendanceRecord) -> Result<bool, AppError>;
    /// Guarded check-out: only fires while `check_out_time` is still NULL.
    /// Returns `false` if the record was already terminal.
    async fn set_check_out(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError>;
    async fn list_rows(&self, event_id: Option<&str>) -> Result<Vec<AttendanceRow>, AppError>;
    async fn list_for_participant(&self, participant_id: &str) -> Result<Vec<ParticipantAttendanceRow>, AppError>;
    /// Administrative override: writes the given fields literally, never
    /// touching `status`.
    async fn override_fields(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
    ) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
