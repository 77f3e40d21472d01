use crate::{db::Db, models::EventRow, pagination::LimitOffset, slug::slugify};
use chrono::{DateTime, Utc};
use sqlx::Result as SqlxResult;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub organizer_id: Option<Uuid>,
    pub template_type: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

const EVENT_COLUMNS: &str = r#"
    id, slug, title, description, status, template_type, pricing_mode,
    starts_at, ends_at, location_name, location_city, cover_image_url,
    timezone, organizer_id, is_deleted, created_at, updated_at
"#;

#[derive(Clone)]
pub struct EventRepo {
    pool: Db,
}

impl EventRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> SqlxResult<Option<EventRow>> {
        sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE id = $1 AND is_deleted = FALSE
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> SqlxResult<Option<EventRow>> {
        sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE slug = $1 AND is_deleted = FALSE
            "#
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
    }

    /// Slug lookup with a second chance: when the raw slug misses and its
    /// normalized form differs, retry with the normalized one.
    pub async fn get_by_slug_normalized(&self, raw: &str) -> SqlxResult<Option<EventRow>> {
        if let Some(event) = self.get_by_slug(raw).await? {
            return Ok(Some(event));
        }
        let normalized = slugify(raw);
        if normalized.is_empty() || normalized == raw {
            return Ok(None);
        }
        tracing::debug!("slug {raw:?} missed, retrying as {normalized:?}");
        self.get_by_slug(&normalized).await
    }

    /// Public listing: drafts and deleted rows stay out.
    pub async fn list(
        &self,
        filter: EventFilter,
        page: Option<LimitOffset>,
    ) -> SqlxResult<Vec<EventRow>> {
        let p = page.unwrap_or_default();

        // Dynamic WHERE via null-guarded binds, keeps a single prepared statement
        sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE is_deleted = FALSE
              AND status <> 'DRAFT'
              AND ($1::uuid IS NULL OR organizer_id = $1)
              AND ($2::text IS NULL OR template_type = $2)
              AND ($3::timestamptz IS NULL OR starts_at >= $3)
              AND ($4::timestamptz IS NULL OR starts_at <= $4)
            ORDER BY starts_at ASC
            LIMIT $5 OFFSET $6
            "#
        ))
        .bind(filter.organizer_id)
        .bind(filter.template_type)
        .bind(filter.from)
        .bind(filter.to)
        .bind(p.limit)
        .bind(p.offset)
        .fetch_all(&self.pool)
        .await
    }
}
