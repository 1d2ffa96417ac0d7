pub mod sqlite_attendance_repo;
pub mod sqlite_event_repo;
pub mod sqlite_group_repo;
pub mod sqlite_participant_repo;

pub mod postgres_attendance_repo;
pub mod postgres_event_repo;
pub mod postgres_group_repo;
pub mod postgres_participant_repo;
