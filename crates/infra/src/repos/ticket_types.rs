use crate::{db::Db, models::TicketTypeRow};
use sqlx::Result as SqlxResult;

#[derive(Clone)]
pub struct TicketTypeRepo {
    pool: Db,
}

impl TicketTypeRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// All waves of an event, hidden ones included; display filtering and
    /// ordering happen in `availability::order_waves`.
    pub async fn list_by_event(&self, event_id: i64) -> SqlxResult<Vec<TicketTypeRow>> {
        sqlx::query_as::<_, TicketTypeRow>(
            r#"
            SELECT id, event_id, name, description, price_cents, currency,
                   status, starts_at, ends_at, total_quantity, sold_quantity,
                   sort_order, is_visible, created_at, updated_at
            FROM ticket_types
            WHERE event_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
    }
}
