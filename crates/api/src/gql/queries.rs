use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use infra::availability::{classify_wave, order_waves, summarize_waves, WaveInput};
use infra::card::{derive_is_free, to_public_event_card};
use infra::models::{EventRow, OrganizerRow, TicketTypeRow};
use infra::pagination::LimitOffset;
use infra::repos::{
    EventFilter, EventRepo, FollowRepo, OrganizerRepo, PadelClubRepo, ProfileRepo, TicketTypeRepo,
};
use infra::snapshot::build_padel_event_snapshot;
use infra::status::EventStatus;
use infra::timeline::build_phase_timeline;

use crate::gql::scalars::Money;
use crate::gql::types::{EventCard, EventPage, PadelClub, PadelSnapshot, Profile, TicketWave};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Current server time (UTC).
    async fn server_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Event page by slug. A slug that misses is retried in its
    /// normalized form before giving up.
    async fn event(&self, ctx: &Context<'_>, slug: String) -> Result<Option<EventPage>> {
        let state = ctx.data::<AppState>()?;
        let repo = EventRepo::new(state.db.clone());
        let Some(event) = repo.get_by_slug_normalized(&slug).await? else {
            return Ok(None);
        };

        let waves = TicketTypeRepo::new(state.db.clone())
            .list_by_event(event.id)
            .await?;

        Ok(Some(assemble_event_page(event, waves, Utc::now())?))
    }

    /// Public discovery feed of event cards.
    async fn events(
        &self,
        ctx: &Context<'_>,
        template_type: Option<String>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<EventCard>> {
        let state = ctx.data::<AppState>()?;
        let repo = EventRepo::new(state.db.clone());
        let filter = EventFilter {
            organizer_id: None,
            template_type,
            from,
            to,
        };
        let page = Some(LimitOffset::clamped(limit, offset));
        let events = repo.list(filter, page).await?;

        let organizer_ids: Vec<Uuid> = {
            let mut ids: Vec<Uuid> = events.iter().filter_map(|e| e.organizer_id).collect();
            ids.sort();
            ids.dedup();
            ids
        };
        let organizers = OrganizerRepo::new(state.db.clone())
            .list_by_ids(&organizer_ids)
            .await?;

        let wave_repo = TicketTypeRepo::new(state.db.clone());
        let now = Utc::now();
        let mut cards = Vec::with_capacity(events.len());
        for event in events {
            let waves = order_waves(wave_repo.list_by_event(event.id).await?);
            let organizer = find_organizer(&organizers, event.organizer_id);
            cards.push(EventCard::from(to_public_event_card(
                &event, &waves, organizer, now,
            )));
        }
        Ok(cards)
    }

    /// Read-only padel event snapshot (club, courts, timeline).
    async fn padel_event_snapshot(
        &self,
        ctx: &Context<'_>,
        event_id: i64,
    ) -> Result<Option<PadelSnapshot>> {
        let state = ctx.data::<AppState>()?;
        let snapshot = build_padel_event_snapshot(&state.db, event_id, Utc::now()).await?;
        Ok(snapshot.map(PadelSnapshot::from))
    }

    async fn profile(&self, ctx: &Context<'_>, username: String) -> Result<Option<Profile>> {
        let state = ctx.data::<AppState>()?;
        let repo = ProfileRepo::new(state.db.clone());
        let Some(row) = repo.get_by_username(&username).await? else {
            return Ok(None);
        };

        let follows = FollowRepo::new(state.db.clone());
        let followers = follows.count_followers(row.id).await?;
        let following = follows.count_following(row.id).await?;
        Ok(Some(Profile::from_row(row, followers, following)))
    }

    async fn padel_clubs(&self, ctx: &Context<'_>) -> Result<Vec<PadelClub>> {
        let state = ctx.data::<AppState>()?;
        let rows = PadelClubRepo::new(state.db.clone()).list_all().await?;
        Ok(rows.into_iter().map(PadelClub::from).collect())
    }
}

fn find_organizer(organizers: &[OrganizerRow], id: Option<Uuid>) -> Option<&OrganizerRow> {
    let id = id?;
    organizers.iter().find(|o| o.id == id)
}

/// Compose the page view-model from already-fetched rows. Pure given `now`.
fn assemble_event_page(
    event: EventRow,
    waves: Vec<TicketTypeRow>,
    now: DateTime<Utc>,
) -> Result<EventPage> {
    let status = EventStatus::parse_or_draft(&event.status);
    // Page phases treat a missing end as ending when it starts.
    let effective_end = event.ends_at.unwrap_or(event.starts_at);
    let event_ended = effective_end < now;

    let ordered = order_waves(waves);
    let mut ui_waves = Vec::with_capacity(ordered.len());
    let mut statuses = Vec::with_capacity(ordered.len());
    for (index, row) in ordered.iter().enumerate() {
        let classified = classify_wave(&WaveInput::from_row(row), event_ended, now)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        statuses.push(classified.status);

        let name = row.name.trim();
        ui_waves.push(TicketWave {
            id: row.id.into(),
            name: if name.is_empty() {
                format!("Wave {}", index + 1)
            } else {
                name.to_string()
            },
            price: Money(row.price_cents as i64),
            currency: row.currency.clone(),
            total_quantity: row.total_quantity,
            sold_quantity: row.sold_quantity,
            remaining: classified.remaining,
            status: classified.status.into(),
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            available: classified.available,
        });
    }

    let summary = summarize_waves(&statuses, event_ended);
    let prices: Vec<i32> = ordered.iter().map(|w| w.price_cents).collect();
    let is_free = derive_is_free(event.pricing_mode.as_deref(), &prices);
    let price_from = if is_free {
        Some(Money(0))
    } else {
        prices.iter().copied().min().map(|c| Money(c as i64))
    };

    let phases = build_phase_timeline(event.starts_at, effective_end, now);

    Ok(EventPage {
        id: event.id.into(),
        slug: event.slug,
        title: event.title,
        description: event.description,
        status: status.into(),
        starts_at: event.starts_at,
        ends_at: event.ends_at,
        location_name: event.location_name,
        location_city: event.location_city,
        cover_image_url: event.cover_image_url,
        is_free,
        price_from,
        availability: summary.into(),
        availability_label: summary.label().to_string(),
        waves: ui_waves,
        phases: phases.into_iter().map(Into::into).collect(),
        organizer_id: event.organizer_id,
    })
}
