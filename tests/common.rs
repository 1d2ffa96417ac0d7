use attendance_backend::{
    api::router::create_router,
    config::Config,
    domain::models::participant::{NewParticipantParams, Participant, ROLE_ADMIN},
    domain::services::{
        attendance_ledger::AttendanceLedger, auth_service::AuthService,
        event_registry::EventRegistry,
    },
    infra::repositories::{
        sqlite_attendance_repo::SqliteAttendanceRepo, sqlite_event_repo::SqliteEventRepo,
        sqlite_group_repo::SqliteGroupRepo, sqlite_participant_repo::SqliteParticipantRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;
use tower::ServiceExt;
use serde_json::Value;

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let priv_key_pem = include_str!("../tests/keys/test_private.pem");
        let pub_key_pem = include_str!("../tests/keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
        };

        let group_repo = Arc::new(SqliteGroupRepo::new(pool.clone()));
        let participant_repo = Arc::new(SqliteParticipantRepo::new(pool.clone()));
        let event_repo = Arc::new(SqliteEventRepo::new(pool.clone()));
        let attendance_repo = Arc::new(SqliteAttendanceRepo::new(pool.clone()));

        let event_registry = Arc::new(EventRegistry::new(event_repo.clone()));
        let ledger = Arc::new(AttendanceLedger::new(
            attendance_repo.clone(),
            participant_repo.clone(),
            event_repo.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(config.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            group_repo,
            participant_repo,
            event_registry,
            ledger,
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a student through the HTTP surface, returning the new
    /// participant id.
    pub async fn register_student(
        &self,
        id_number: &str,
        email: &str,
        password: &str,
        group_id: Option<&str>,
    ) -> String {
        let payload = serde_json::json!({
            "first_name": "Ana",
            "last_name": "Reyes",
            "email": email,
            "password": password,
            "id_number": id_number,
            "year_level": "3",
            "section": "B",
            "group_id": group_id,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        assert!(response.status().is_success(), "registration failed: {}", response.status());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["id"].as_str().unwrap().to_string()
    }

    /// Inserts an operator account directly; there is no HTTP path that
    /// creates admins.
    pub async fn seed_admin(&self, id_number: &str, password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();

        let mut admin = Participant::new(NewParticipantParams {
            id_number: id_number.to_string(),
            first_name: "Opal".to_string(),
            last_name: "Perator".to_string(),
            email: format!("{}@admin.example.com", id_number),
            password_hash,
            year_level: "-".to_string(),
            section: "-".to_string(),
            group_id: None,
        });
        admin.role = ROLE_ADMIN.to_string();

        let created = self.state.participant_repo.create(&admin).await.unwrap();
        created.id
    }

    pub async fn login(&self, id_number: &str, password: &str) -> AuthHeaders {
        let payload = serde_json::json!({
            "id_number": id_number,
            "password": password,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start+end].to_string();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrf_token"].as_str().expect("No csrf_token in body").to_string();

        AuthHeaders {
            access_token,
            csrf_token,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
