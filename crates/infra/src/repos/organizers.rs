use crate::{db::Db, models::OrganizerRow};
use sqlx::Result as SqlxResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrganizerRepo {
    pool: Db,
}

impl OrganizerRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: Uuid) -> SqlxResult<Option<OrganizerRow>> {
        sqlx::query_as::<_, OrganizerRow>(
            r#"
            SELECT id, username, public_name, business_name,
                   branding_avatar_url, public_listing_enabled, status
            FROM organizers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Batch lookup for the dataloader.
    pub async fn list_by_ids(&self, ids: &[Uuid]) -> SqlxResult<Vec<OrganizerRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, OrganizerRow>(
            r#"
            SELECT id, username, public_name, business_name,
                   branding_avatar_url, public_listing_enabled, status
            FROM organizers
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }
}
