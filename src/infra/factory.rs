use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{AttendanceRepository, EventRepository, GroupRepository, ParticipantRepository};
use crate::domain::services::attendance_ledger::AttendanceLedger;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::event_registry::EventRegistry;
use crate::infra::repositories::{
    postgres_attendance_repo::PostgresAttendanceRepo, postgres_event_repo::PostgresEventRepo,
    postgres_group_repo::PostgresGroupRepo, postgres_participant_repo::PostgresParticipantRepo,
    sqlite_attendance_repo::SqliteAttendanceRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_group_repo::SqliteGroupRepo, sqlite_participant_repo::SqliteParticipantRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let group_repo: Arc<dyn GroupRepository> = Arc::new(PostgresGroupRepo::new(pool.clone()));
        let participant_repo: Arc<dyn ParticipantRepository> = Arc::new(PostgresParticipantRepo::new(pool.clone()));
        let event_repo: Arc<dyn EventRepository> = Arc::new(PostgresEventRepo::new(pool.clone()));
        let attendance_repo: Arc<dyn AttendanceRepository> = Arc::new(PostgresAttendanceRepo::new(pool.clone()));

        build_state(config, group_repo, participant_repo, event_repo, attendance_repo)
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let group_repo: Arc<dyn GroupRepository> = Arc::new(SqliteGroupRepo::new(pool.clone()));
        let participant_repo: Arc<dyn ParticipantRepository> = Arc::new(SqliteParticipantRepo::new(pool.clone()));
        let event_repo: Arc<dyn EventRepository> = Arc::new(SqliteEventRepo::new(pool.clone()));
        let attendance_repo: Arc<dyn AttendanceRepository> = Arc::new(SqliteAttendanceRepo::new(pool.clone()));

        build_state(config, group_repo, participant_repo, event_repo, attendance_repo)
    }
}

fn build_state(
    config: &Config,
    group_repo: Arc<dyn GroupRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    event_repo: Arc<dyn EventRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
) -> AppState {
    let event_registry = Arc::new(EventRegistry::new(event_repo.clone()));
    let ledger = Arc::new(AttendanceLedger::new(
        attendance_repo.clone(),
        participant_repo.clone(),
        event_repo.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(config.clone()));

    AppState {
        config: config.clone(),
        group_repo,
        participant_repo,
        event_registry,
        ledger,
        auth_service,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
