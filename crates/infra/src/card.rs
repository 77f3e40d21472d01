use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::{EventRow, OrganizerRow, TicketTypeRow};
use crate::status::EventStatus;

/// Public-facing lifecycle of an event card. CANCELLED and DRAFT pass
/// through; otherwise an event past its end is PAST, else ACTIVE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicEventStatus {
    Active,
    Cancelled,
    Past,
    Draft,
}

pub fn resolve_public_status(
    status: EventStatus,
    ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PublicEventStatus {
    match status {
        EventStatus::Cancelled => PublicEventStatus::Cancelled,
        EventStatus::Draft => PublicEventStatus::Draft,
        _ => {
            if ends_at.is_some_and(|e| e < now) {
                PublicEventStatus::Past
            } else {
                PublicEventStatus::Active
            }
        }
    }
}

/// An event is free when its pricing mode says so, or when every ticket
/// it sells costs nothing.
pub fn derive_is_free(pricing_mode: Option<&str>, ticket_prices_cents: &[i32]) -> bool {
    if matches!(pricing_mode, Some(mode) if mode.eq_ignore_ascii_case("FREE")) {
        return true;
    }
    !ticket_prices_cents.is_empty() && ticket_prices_cents.iter().all(|p| *p == 0)
}

pub fn resolve_categories(template_type: Option<&str>) -> Vec<String> {
    let category = match template_type {
        Some("PARTY") => "FESTA",
        Some("PADEL") => "PADEL",
        Some("TALK") => "PALESTRA",
        Some("VOLUNTEERING") => "VOLUNTARIADO",
        _ => "GERAL",
    };
    vec![category.to_string()]
}

/// Highlighted cards: active, starting within the discovery window
/// (24h grace behind, 10 days ahead), and carrying a cover image.
pub fn resolve_is_highlighted(
    status: EventStatus,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    cover_image_url: Option<&str>,
    now: DateTime<Utc>,
) -> bool {
    if resolve_public_status(status, ends_at, now) != PublicEventStatus::Active {
        return false;
    }
    let within_window =
        starts_at >= now - Duration::hours(24) && starts_at <= now + Duration::days(10);
    within_window && cover_image_url.is_some_and(|url| !url.trim().is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicEventCard {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub template_type: Option<String>,
    pub location_name: Option<String>,
    pub location_city: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_free: bool,
    pub price_from_cents: Option<i32>,
    pub categories: Vec<String>,
    pub host_name: Option<String>,
    pub host_username: Option<String>,
    pub status: PublicEventStatus,
    pub is_highlighted: bool,
}

pub fn to_public_event_card(
    event: &EventRow,
    waves: &[TicketTypeRow],
    organizer: Option<&OrganizerRow>,
    now: DateTime<Utc>,
) -> PublicEventCard {
    let status = EventStatus::parse_or_draft(&event.status);
    let prices: Vec<i32> = waves.iter().map(|w| w.price_cents).collect();

    let is_free = derive_is_free(event.pricing_mode.as_deref(), &prices);
    let price_from_cents = if is_free {
        Some(0)
    } else {
        prices.iter().copied().min()
    };

    let host_name = organizer.and_then(|o| {
        o.public_name
            .clone()
            .or_else(|| o.business_name.clone())
    });
    let host_username = organizer.and_then(|o| {
        if o.public_listing_enabled && o.status == "ACTIVE" {
            o.username.clone()
        } else {
            None
        }
    });

    PublicEventCard {
        id: event.id,
        slug: event.slug.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        short_description: event
            .description
            .as_deref()
            .map(|d| d.chars().take(200).collect()),
        starts_at: event.starts_at,
        ends_at: event.ends_at,
        template_type: event.template_type.clone(),
        location_name: event.location_name.clone(),
        location_city: event.location_city.clone(),
        cover_image_url: event.cover_image_url.clone(),
        is_free,
        price_from_cents,
        categories: resolve_categories(event.template_type.as_deref()),
        host_name,
        host_username,
        status: resolve_public_status(status, event.ends_at, now),
        is_highlighted: resolve_is_highlighted(
            status,
            event.starts_at,
            event.ends_at,
            event.cover_image_url.as_deref(),
            now,
        ),
    }
}
