use crate::{
    db::Db,
    models::{PadelClubRow, PadelTournamentConfigRow},
};
use sqlx::Result as SqlxResult;

#[derive(Clone)]
pub struct PadelConfigRepo {
    pool: Db,
}

impl PadelConfigRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get_by_event(&self, event_id: i64) -> SqlxResult<Option<PadelTournamentConfigRow>> {
        sqlx::query_as::<_, PadelTournamentConfigRow>(
            r#"
            SELECT event_id, number_of_courts, club_id, partner_club_ids, advanced_settings
            FROM padel_tournament_configs
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[derive(Clone)]
pub struct PadelClubRepo {
    pool: Db,
}

impl PadelClubRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i64) -> SqlxResult<Option<PadelClubRow>> {
        sqlx::query_as::<_, PadelClubRow>(
            r#"
            SELECT id, name, city, address
            FROM padel_clubs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_by_ids(&self, ids: &[i64]) -> SqlxResult<Vec<PadelClubRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, PadelClubRow>(
            r#"
            SELECT id, name, city, address
            FROM padel_clubs
            WHERE id = ANY($1)
            ORDER BY name ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_all(&self) -> SqlxResult<Vec<PadelClubRow>> {
        sqlx::query_as::<_, PadelClubRow>(
            r#"
            SELECT id, name, city, address
            FROM padel_clubs
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
