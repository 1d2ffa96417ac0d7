use crate::domain::models::attendance::{
    AttendanceRecord, AttendanceRow, ParticipantAttendanceRow, STATUS_PRESENT,
};
use crate::domain::ports::AttendanceRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteAttendanceRepo {
    pool: SqlitePool,
}

impl SqliteAttendanceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const LIST_ROWS_SQL: &str = r#"
    SELECT a.id, a.first_name, a.last_name, g.name AS group_name,
           e.name AS event_name, e.event_date,
           a.check_in_time, a.check_out_time, a.status
    FROM attendance a
    JOIN participants p ON a.participant_id = p.id
    JOIN events e ON a.event_id = e.id
    LEFT JOIN groups g ON p.group_id = g.id
"#;

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<AttendanceRecord>, AppError> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_pair(&self, participant_id: &str, event_id: &str) -> Result<Option<AttendanceRecord>, AppError> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance WHERE participant_id = ? AND event_id = ?",
        )
            .bind(participant_id)
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert(&self, record: &AttendanceRecord) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO attendance (
                id, participant_id, event_id, first_name, last_name,
                check_in_time, check_out_time, status
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (participant_id, event_id) DO NOTHING"#
        )
            .bind(&record.id)
            .bind(&record.participant_id)
            .bind(&record.event_id)
            .bind(&record.first_name)
            .bind(&record.last_name)
            .bind(record.check_in_time)
            .bind(record.check_out_time)
            .bind(&record.status)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() == 1)
    }

    async fn set_check_out(&self, id: &str, at: DateTime<Utc>) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE attendance SET check_out_time = ?, status = ? WHERE id = ? AND check_out_time IS NULL",
        )
            .bind(at)
            .bind(STATUS_PRESENT)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_rows(&self, event_id: Option<&str>) -> Result<Vec<AttendanceRow>, AppError> {
        match event_id {
            Some(event_id) => {
                let sql = format!("{} WHERE a.event_id = ? ORDER BY a.check_in_time DESC", LIST_ROWS_SQL);
                sqlx::query_as::<_, AttendanceRow>(&sql)
                    .bind(event_id)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                let sql = format!("{} ORDER BY a.check_in_time DESC", LIST_ROWS_SQL);
                sqlx::query_as::<_, AttendanceRow>(&sql)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn list_for_participant(&self, participant_id: &str) -> Result<Vec<ParticipantAttendanceRow>, AppError> {
        sqlx::query_as::<_, ParticipantAttendanceRow>(
            r#"SELECT e.name AS event_name, e.event_date,
                      a.check_in_time, a.check_out_time, a.status
               FROM attendance a
               JOIN events e ON a.event_id = e.id
               WHERE a.participant_id = ?
               ORDER BY a.check_in_time DESC"#
        )
            .bind(participant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn override_fields(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE attendance SET first_name = ?, last_name = ?, check_in_time = ?, check_out_time = ? WHERE id = ?",
        )
            .bind(first_name)
            .bind(last_name)
            .bind(check_in)
            .bind(check_out)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Attendance record not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Attendance record not found".into()));
        }
        Ok(())
    }
}
