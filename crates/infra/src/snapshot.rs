use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Result as SqlxResult;

use crate::db::Db;
use crate::models::{PadelClubRow, PadelTournamentConfigRow};
use crate::repos::{EventRepo, PadelClubRepo, PadelConfigRepo};
use crate::status::EventStatus;
use crate::timeline::{build_timeline, TimelineStep};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtInfo {
    pub name: String,
    pub club_name: Option<String>,
    pub indoor: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerClub {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
}

impl From<PadelClubRow> for PartnerClub {
    fn from(row: PadelClubRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            city: row.city,
        }
    }
}

/// Read-only per-request projection of a padel event for display.
#[derive(Debug, Clone, Serialize)]
pub struct PadelEventSnapshot {
    pub event_id: i64,
    pub title: String,
    pub status: EventStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub club_name: Option<String>,
    pub club_city: Option<String>,
    pub partner_clubs: Vec<PartnerClub>,
    pub courts: Vec<CourtInfo>,
    pub timeline: [TimelineStep; 3],
}

/// Shape of one entry under `advanced_settings.courtsFromClubs`.
#[derive(Debug, Clone, Deserialize)]
struct CourtSetting {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "clubName", default)]
    club_name: Option<String>,
    #[serde(default)]
    indoor: Option<bool>,
}

/// Courts picked in the organizer's advanced settings, when present.
pub fn courts_from_settings(
    advanced: Option<&serde_json::Value>,
    fallback_club: Option<&str>,
) -> Vec<CourtInfo> {
    let Some(entries) = advanced
        .and_then(|v| v.get("courtsFromClubs"))
        .and_then(|v| v.as_array())
    else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let setting: CourtSetting = serde_json::from_value(entry.clone()).ok()?;
            Some(CourtInfo {
                name: setting
                    .name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| format!("Court {}", idx + 1)),
                club_name: setting
                    .club_name
                    .filter(|n| !n.trim().is_empty())
                    .or_else(|| fallback_club.map(str::to_string)),
                indoor: setting.indoor,
            })
        })
        .collect()
}

/// Generic "Court N" list when no explicit courts were configured.
/// Always at least one court.
pub fn synthesize_courts(number_of_courts: Option<i32>, club_name: Option<&str>) -> Vec<CourtInfo> {
    let count = number_of_courts.unwrap_or(1).max(1) as usize;
    (1..=count)
        .map(|n| CourtInfo {
            name: format!("Court {n}"),
            club_name: club_name.map(str::to_string),
            indoor: None,
        })
        .collect()
}

fn resolve_courts(
    config: Option<&PadelTournamentConfigRow>,
    club_name: Option<&str>,
) -> Vec<CourtInfo> {
    let configured = courts_from_settings(
        config.and_then(|c| c.advanced_settings.as_ref()),
        club_name,
    );
    if !configured.is_empty() {
        return configured;
    }
    synthesize_courts(config.and_then(|c| c.number_of_courts), club_name)
}

/// Assemble the snapshot for one event. None when the event is missing,
/// soft-deleted, or not a padel event.
pub async fn build_padel_event_snapshot(
    pool: &Db,
    event_id: i64,
    now: DateTime<Utc>,
) -> SqlxResult<Option<PadelEventSnapshot>> {
    let events = EventRepo::new(pool.clone());
    let Some(event) = events.get(event_id).await? else {
        return Ok(None);
    };
    if event.template_type.as_deref() != Some("PADEL") {
        return Ok(None);
    }

    let config = PadelConfigRepo::new(pool.clone())
        .get_by_event(event.id)
        .await?;

    let clubs = PadelClubRepo::new(pool.clone());
    let club = match config.as_ref().and_then(|c| c.club_id) {
        Some(club_id) => clubs.get(club_id).await?,
        None => None,
    };

    let partner_ids = config
        .as_ref()
        .map(|c| c.partner_club_ids.clone())
        .unwrap_or_default();
    let partner_clubs = clubs
        .list_by_ids(&partner_ids)
        .await?
        .into_iter()
        .map(PartnerClub::from)
        .collect();

    let club_name = club
        .as_ref()
        .map(|c| c.name.clone())
        .or_else(|| event.location_name.clone());
    let club_city = club
        .as_ref()
        .and_then(|c| c.city.clone())
        .or_else(|| event.location_city.clone());

    let courts = resolve_courts(config.as_ref(), club_name.as_deref());

    let status = EventStatus::parse_or_draft(&event.status);
    let timeline = build_timeline(
        status,
        Some(event.starts_at),
        event.ends_at.or(Some(event.starts_at)),
        now,
    );

    Ok(Some(PadelEventSnapshot {
        event_id: event.id,
        title: event.title,
        status,
        starts_at: event.starts_at,
        ends_at: event.ends_at,
        club_name,
        club_city,
        partner_clubs,
        courts,
        timeline,
    }))
}
