use crate::db::Db;
use sqlx::Result as SqlxResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct FollowRepo {
    pool: Db,
}

impl FollowRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn is_following(&self, follower: Uuid, followee: Uuid) -> SqlxResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM follows
            WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower)
        .bind(followee)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Flip the follow edge; returns true when the caller now follows.
    pub async fn toggle(&self, follower: Uuid, followee: Uuid) -> SqlxResult<bool> {
        let removed = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower)
        .bind(followee)
        .execute(&self.pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followee_id, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(follower)
        .bind(followee)
        .execute(&self.pool)
        .await?;
        Ok(true)
    }

    pub async fn count_followers(&self, followee: Uuid) -> SqlxResult<i64> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM follows WHERE followee_id = $1
            "#,
        )
        .bind(followee)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn count_following(&self, follower: Uuid) -> SqlxResult<i64> {
        sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM follows WHERE follower_id = $1
            "#,
        )
        .bind(follower)
        .fetch_one(&self.pool)
        .await
    }
}
