use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Enum, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use infra::availability::{AvailabilitySummary, WaveStatus};
use infra::card::{PublicEventCard, PublicEventStatus};
use infra::models::{OrganizerRow, PadelClubRow, ProfileRow};
use infra::snapshot::{CourtInfo, PadelEventSnapshot, PartnerClub};
use infra::status::EventStatus;
use infra::timeline::{PhaseKey, PhaseStep, StepKey, StepState, TimelineStep};

use crate::gql::loaders::OrganizerLoader;
use crate::gql::scalars::Money;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum EventLifecycle {
    Draft,
    Published,
    Finished,
    Cancelled,
}

impl From<EventStatus> for EventLifecycle {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Draft => Self::Draft,
            EventStatus::Published => Self::Published,
            EventStatus::Finished => Self::Finished,
            EventStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TicketWaveStatus {
    OnSale,
    Upcoming,
    Closed,
    SoldOut,
}

impl From<WaveStatus> for TicketWaveStatus {
    fn from(status: WaveStatus) -> Self {
        match status {
            WaveStatus::OnSale => Self::OnSale,
            WaveStatus::Upcoming => Self::Upcoming,
            WaveStatus::Closed => Self::Closed,
            WaveStatus::SoldOut => Self::SoldOut,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TimelineState {
    Pending,
    Active,
    Done,
}

impl From<StepState> for TimelineState {
    fn from(state: StepState) -> Self {
        match state {
            StepState::Pending => Self::Pending,
            StepState::Active => Self::Active,
            StepState::Done => Self::Done,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum TimelineKey {
    Signup,
    Games,
    Finish,
}

impl From<StepKey> for TimelineKey {
    fn from(key: StepKey) -> Self {
        match key {
            StepKey::Signup => Self::Signup,
            StepKey::Games => Self::Games,
            StepKey::Finish => Self::Finish,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct EventTimelineStep {
    pub key: TimelineKey,
    pub label: String,
    pub state: TimelineState,
    pub cancelled: bool,
    pub date: Option<DateTime<Utc>>,
}

impl From<TimelineStep> for EventTimelineStep {
    fn from(step: TimelineStep) -> Self {
        Self {
            key: step.key.into(),
            label: step.label.to_string(),
            state: step.state.into(),
            cancelled: step.cancelled,
            date: step.date,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum EventPhaseKey {
    Before,
    During,
    After,
}

impl From<PhaseKey> for EventPhaseKey {
    fn from(key: PhaseKey) -> Self {
        match key {
            PhaseKey::Before => Self::Before,
            PhaseKey::During => Self::During,
            PhaseKey::After => Self::After,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct EventPhaseStep {
    pub key: EventPhaseKey,
    pub label: String,
    pub hint: String,
    pub state: TimelineState,
}

impl From<PhaseStep> for EventPhaseStep {
    fn from(step: PhaseStep) -> Self {
        Self {
            key: step.key.into(),
            label: step.label.to_string(),
            hint: step.hint.to_string(),
            state: step.state.into(),
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum AvailabilityBadge {
    EventEnded,
    SoldOut,
    OnSale,
    SalesUpcoming,
    SalesClosed,
    Tickets,
}

impl From<AvailabilitySummary> for AvailabilityBadge {
    fn from(summary: AvailabilitySummary) -> Self {
        match summary {
            AvailabilitySummary::EventEnded => Self::EventEnded,
            AvailabilitySummary::SoldOut => Self::SoldOut,
            AvailabilitySummary::OnSale => Self::OnSale,
            AvailabilitySummary::SalesUpcoming => Self::SalesUpcoming,
            AvailabilitySummary::SalesClosed => Self::SalesClosed,
            AvailabilitySummary::Tickets => Self::Tickets,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct TicketWave {
    pub id: ID,
    pub name: String,
    pub price: Money,
    pub currency: String,
    pub total_quantity: Option<i32>,
    pub sold_quantity: i32,
    pub remaining: Option<i32>,
    pub status: TicketWaveStatus,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub available: bool,
}

/// Full event page view: classified waves, phase progression, badge.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct EventPage {
    pub id: ID,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub status: EventLifecycle,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    pub location_city: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_free: bool,
    pub price_from: Option<Money>,
    pub availability: AvailabilityBadge,
    pub availability_label: String,
    pub waves: Vec<TicketWave>,
    pub phases: Vec<EventPhaseStep>,
    #[graphql(skip)]
    pub organizer_id: Option<Uuid>,
}

#[ComplexObject]
impl EventPage {
    async fn organizer(&self, ctx: &Context<'_>) -> Result<Option<Organizer>> {
        let Some(organizer_id) = self.organizer_id else {
            return Ok(None);
        };
        let loader = ctx.data::<DataLoader<OrganizerLoader>>()?;
        let row = loader
            .load_one(organizer_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(row.map(Organizer::from))
    }
}

#[derive(SimpleObject, Clone)]
pub struct Organizer {
    pub id: ID,
    /// Only exposed for listed, active organizations.
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<OrganizerRow> for Organizer {
    fn from(row: OrganizerRow) -> Self {
        let listed = row.public_listing_enabled && row.status == "ACTIVE";
        Self {
            id: row.id.into(),
            username: if listed { row.username } else { None },
            display_name: row.public_name.or(row.business_name),
            avatar_url: row.branding_avatar_url,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum EventCardStatus {
    Active,
    Cancelled,
    Past,
    Draft,
}

impl From<PublicEventStatus> for EventCardStatus {
    fn from(status: PublicEventStatus) -> Self {
        match status {
            PublicEventStatus::Active => Self::Active,
            PublicEventStatus::Cancelled => Self::Cancelled,
            PublicEventStatus::Past => Self::Past,
            PublicEventStatus::Draft => Self::Draft,
        }
    }
}

/// Discovery-feed projection of an event.
#[derive(SimpleObject, Clone)]
pub struct EventCard {
    pub id: ID,
    pub slug: String,
    pub title: String,
    pub short_description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    pub location_city: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_free: bool,
    pub price_from: Option<Money>,
    pub categories: Vec<String>,
    pub host_name: Option<String>,
    pub host_username: Option<String>,
    pub status: EventCardStatus,
    pub is_highlighted: bool,
}

impl From<PublicEventCard> for EventCard {
    fn from(card: PublicEventCard) -> Self {
        Self {
            id: card.id.into(),
            slug: card.slug,
            title: card.title,
            short_description: card.short_description,
            starts_at: card.starts_at,
            ends_at: card.ends_at,
            location_name: card.location_name,
            location_city: card.location_city,
            cover_image_url: card.cover_image_url,
            is_free: card.is_free,
            price_from: card.price_from_cents.map(|c| Money(c as i64)),
            categories: card.categories,
            host_name: card.host_name,
            host_username: card.host_username,
            status: card.status.into(),
            is_highlighted: card.is_highlighted,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Court {
    pub name: String,
    pub club_name: Option<String>,
    pub indoor: Option<bool>,
}

impl From<CourtInfo> for Court {
    fn from(court: CourtInfo) -> Self {
        Self {
            name: court.name,
            club_name: court.club_name,
            indoor: court.indoor,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct SnapshotClub {
    pub id: ID,
    pub name: String,
    pub city: Option<String>,
}

impl From<PartnerClub> for SnapshotClub {
    fn from(club: PartnerClub) -> Self {
        Self {
            id: club.id.into(),
            name: club.name,
            city: club.city,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct PadelSnapshot {
    pub event_id: ID,
    pub title: String,
    pub status: EventLifecycle,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub club_name: Option<String>,
    pub club_city: Option<String>,
    pub partner_clubs: Vec<SnapshotClub>,
    pub courts: Vec<Court>,
    pub timeline: Vec<EventTimelineStep>,
}

impl From<PadelEventSnapshot> for PadelSnapshot {
    fn from(snapshot: PadelEventSnapshot) -> Self {
        Self {
            event_id: snapshot.event_id.into(),
            title: snapshot.title,
            status: snapshot.status.into(),
            starts_at: snapshot.starts_at,
            ends_at: snapshot.ends_at,
            club_name: snapshot.club_name,
            club_city: snapshot.club_city,
            partner_clubs: snapshot.partner_clubs.into_iter().map(Into::into).collect(),
            courts: snapshot.courts.into_iter().map(Into::into).collect(),
            timeline: snapshot.timeline.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct PadelClub {
    pub id: ID,
    pub name: String,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl From<PadelClubRow> for PadelClub {
    fn from(row: PadelClubRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            city: row.city,
            address: row.address,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Profile {
    pub id: ID,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub visibility: String,
    pub followers: i64,
    pub following: i64,
}

impl Profile {
    pub fn from_row(row: ProfileRow, followers: i64, following: i64) -> Self {
        Self {
            id: row.id.into(),
            username: row.username,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            visibility: row.visibility,
            followers,
            following,
        }
    }
}

#[derive(InputObject)]
pub struct ToggleFollowInput {
    /// Profile being followed/unfollowed.
    pub profile_id: ID,
    /// Acting user. Identity plumbing lives outside this service.
    pub user_id: ID,
}

#[derive(SimpleObject, Clone)]
pub struct FollowPayload {
    pub profile_id: ID,
    pub following: bool,
    pub follower_count: i64,
}

#[derive(SimpleObject, Clone)]
pub struct FollowEvent {
    pub follower_id: ID,
    pub followee_id: ID,
    pub following: bool,
}

#[derive(InputObject)]
pub struct SetUsernameInput {
    pub user_id: ID,
    pub username: String,
}
