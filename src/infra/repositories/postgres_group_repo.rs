use crate::domain::{models::group::Group, ports::GroupRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGroupRepo {
    pool: PgPool,
}

impl PostgresGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PostgresGroupRepo {
    async fn create(&self, group: &Group) -> Result<Group, AppError> {
        sqlx::query_as::<_, Group>(
            "INSERT INTO groups (id, name, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
            .bind(&group.id)
            .bind(&group.name)
            .bind(group.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>, AppError> {
        sqlx::query_as::<_, Group>(
            "SELECT * FROM groups WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Group>, AppError> {
        sqlx::query_as::<_, Group>(
            "SELECT * FROM groups ORDER BY name",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
