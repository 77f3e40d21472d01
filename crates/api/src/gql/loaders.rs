use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::Loader;
use uuid::Uuid;

use infra::db::Db;
use infra::models::OrganizerRow;
use infra::repos::OrganizerRepo;

/// Batches organizer lookups across a request.
pub struct OrganizerLoader {
    pool: Db,
}

impl OrganizerLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for OrganizerLoader {
    type Value = OrganizerRow;
    type Error = Arc<sqlx::Error>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let rows = OrganizerRepo::new(self.pool.clone())
            .list_by_ids(keys)
            .await
            .map_err(Arc::new)?;
        Ok(rows.into_iter().map(|row| (row.id, row)).collect())
    }
}
