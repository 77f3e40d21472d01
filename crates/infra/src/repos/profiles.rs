use crate::{db::Db, models::ProfileRow, pagination::LimitOffset};
use sqlx::Result as SqlxResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProfileRepo {
    pool: Db,
}

impl ProfileRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> SqlxResult<Option<ProfileRow>> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, full_name, avatar_url, visibility, created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_by_username(&self, username: &str) -> SqlxResult<Option<ProfileRow>> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, full_name, avatar_url, visibility, created_at, updated_at
            FROM profiles
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn username_taken(&self, username: &str, exclude: Uuid) -> SqlxResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM profiles
            WHERE username = $1 AND id <> $2
            "#,
        )
        .bind(username)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    pub async fn set_username(&self, id: Uuid, username: &str) -> SqlxResult<Option<ProfileRow>> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET username = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, username, full_name, avatar_url, visibility, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Stable id-ordered page, used by the username repair sweep.
    pub async fn list_page(&self, page: LimitOffset) -> SqlxResult<Vec<ProfileRow>> {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT id, username, full_name, avatar_url, visibility, created_at, updated_at
            FROM profiles
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
    }
}
