use crate::domain::{models::participant::Participant, ports::ParticipantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteParticipantRepo {
    pool: SqlitePool,
}

impl SqliteParticipantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepo {
    async fn create(&self, participant: &Participant) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            r#"INSERT INTO participants (
                id, id_number, first_name, last_name, email, password_hash,
                year_level, section, group_id, role, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&participant.id)
            .bind(&participant.id_number)
            .bind(&participant.first_name)
            .bind(&participant.last_name)
            .bind(&participant.email)
            .bind(&participant.password_hash)
            .bind(&participant.year_level)
            .bind(&participant.section)
            .bind(&participant.group_id)
            .bind(&participant.role)
            .bind(participant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id_number(&self, id_number: &str) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE id_number = ?",
        )
            .bind(id_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_with_email_or_id_number(&self, email: &str, id_number: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM participants WHERE email = ? OR id_number = ?",
        )
            .bind(email)
            .bind(id_number)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count > 0)
    }

    async fn update_password(&self, id: &str, password_hash: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE participants SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Participant not found".into()));
        }
        Ok(())
    }
}
