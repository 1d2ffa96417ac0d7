use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Participant {
    pub id: String,
    pub id_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub year_level: String,
    pub section: String,
    pub group_id: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewParticipantParams {
    pub id_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub year_level: String,
    pub section: String,
    pub group_id: Option<String>,
}

impl Participant {
    pub fn new(params: NewParticipantParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            id_number: params.id_number,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            password_hash: params.password_hash,
            year_level: params.year_level,
            section: params.section,
            group_id: params.group_id,
            role: ROLE_STUDENT.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
