use std::sync::Arc;
use crate::domain::ports::{GroupRepository, ParticipantRepository};
use crate::domain::services::attendance_ledger::AttendanceLedger;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::event_registry::EventRegistry;
use crate::config::Config;

/// Handlers read participants and groups directly; event and attendance
/// access goes through the registry and the ledger.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub group_repo: Arc<dyn GroupRepository>,
    pub participant_repo: Arc<dyn ParticipantRepository>,
    pub event_registry: Arc<EventRegistry>,
    pub ledger: Arc<AttendanceLedger>,
    pub auth_service: Arc<AuthService>,
}
