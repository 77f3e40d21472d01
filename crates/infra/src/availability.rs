use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::TicketTypeRow;
use crate::status::StoredWaveStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Effective sale status of a wave, after overrides and inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveStatus {
    OnSale,
    Upcoming,
    Closed,
    SoldOut,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WaveInput {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub total_quantity: Option<i32>,
    pub sold_quantity: i32,
    pub stored_status: Option<StoredWaveStatus>,
}

impl WaveInput {
    pub fn from_row(row: &TicketTypeRow) -> Self {
        Self {
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            total_quantity: row.total_quantity,
            sold_quantity: row.sold_quantity,
            stored_status: StoredWaveStatus::parse(&row.status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveAvailability {
    pub status: WaveStatus,
    pub available: bool,
    /// Seats left under the cap, clamped at zero. None means unlimited.
    pub remaining: Option<i32>,
}

/// Classify one wave. Precedence: a full wave is SOLD_OUT no matter what
/// the stored status says; then explicit closed-ish / sold-out / upcoming
/// statuses; everything else is inferred from the sale window.
pub fn classify_wave(
    wave: &WaveInput,
    event_ended: bool,
    now: DateTime<Utc>,
) -> Result<WaveAvailability, DomainError> {
    if wave.sold_quantity < 0 {
        return Err(DomainError::InvalidInput("sold_quantity is negative"));
    }
    if matches!(wave.total_quantity, Some(total) if total < 0) {
        return Err(DomainError::InvalidInput("total_quantity is negative"));
    }

    let full = wave
        .total_quantity
        .is_some_and(|total| wave.sold_quantity >= total);

    let status = if full {
        WaveStatus::SoldOut
    } else {
        match wave.stored_status {
            Some(StoredWaveStatus::Closed)
            | Some(StoredWaveStatus::Ended)
            | Some(StoredWaveStatus::OffSale) => WaveStatus::Closed,
            Some(StoredWaveStatus::SoldOut) => WaveStatus::SoldOut,
            Some(StoredWaveStatus::Upcoming) => WaveStatus::Upcoming,
            // ON_SALE and unknown both defer to the sale window.
            Some(StoredWaveStatus::OnSale) | None => infer_from_window(wave, now),
        }
    };

    let remaining = wave
        .total_quantity
        .map(|total| (total - wave.sold_quantity).max(0));

    let available = status == WaveStatus::OnSale
        && remaining.map_or(true, |r| r > 0)
        && !event_ended;

    Ok(WaveAvailability {
        status,
        available,
        remaining,
    })
}

fn infer_from_window(wave: &WaveInput, now: DateTime<Utc>) -> WaveStatus {
    if wave
        .total_quantity
        .is_some_and(|total| wave.sold_quantity >= total)
    {
        return WaveStatus::SoldOut;
    }
    if matches!(wave.starts_at, Some(starts) if now < starts) {
        return WaveStatus::Upcoming;
    }
    if matches!(wave.ends_at, Some(ends) if now > ends) {
        return WaveStatus::Closed;
    }
    WaveStatus::OnSale
}

/// Visible waves in display order: sort_order first, price breaks ties.
pub fn order_waves(mut waves: Vec<TicketTypeRow>) -> Vec<TicketTypeRow> {
    waves.retain(|w| w.is_visible);
    waves.sort_by(|a, b| {
        let ao = a.sort_order.unwrap_or(0);
        let bo = b.sort_order.unwrap_or(0);
        ao.cmp(&bo).then(a.price_cents.cmp(&b.price_cents))
    });
    waves
}

/// Event-level availability badge derived from its waves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilitySummary {
    EventEnded,
    SoldOut,
    OnSale,
    SalesUpcoming,
    SalesClosed,
    Tickets,
}

impl AvailabilitySummary {
    pub fn label(&self) -> &'static str {
        match self {
            Self::EventEnded => "Evento terminado",
            Self::SoldOut => "Esgotado",
            Self::OnSale => "Bilhetes à venda",
            Self::SalesUpcoming => "Vendas em breve",
            Self::SalesClosed => "Vendas encerradas",
            Self::Tickets => "Bilhetes",
        }
    }
}

pub fn summarize_waves(statuses: &[WaveStatus], event_ended: bool) -> AvailabilitySummary {
    let any_on_sale = statuses.iter().any(|s| *s == WaveStatus::OnSale);
    let any_upcoming = statuses.iter().any(|s| *s == WaveStatus::Upcoming);
    let all_closed = !statuses.is_empty() && statuses.iter().all(|s| *s == WaveStatus::Closed);
    let all_sold_out = !statuses.is_empty() && statuses.iter().all(|s| *s == WaveStatus::SoldOut);

    if event_ended {
        AvailabilitySummary::EventEnded
    } else if all_sold_out {
        AvailabilitySummary::SoldOut
    } else if any_on_sale {
        AvailabilitySummary::OnSale
    } else if any_upcoming {
        AvailabilitySummary::SalesUpcoming
    } else if all_closed {
        AvailabilitySummary::SalesClosed
    } else {
        AvailabilitySummary::Tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn wave(total: Option<i32>, sold: i32, status: Option<StoredWaveStatus>) -> WaveInput {
        WaveInput {
            starts_at: None,
            ends_at: None,
            total_quantity: total,
            sold_quantity: sold,
            stored_status: status,
        }
    }

    #[test]
    fn full_wave_overrides_explicit_status() {
        // A sold-out cap wins over any stored status, ON_SALE included.
        let w = wave(Some(10), 10, Some(StoredWaveStatus::OnSale));
        let out = classify_wave(&w, false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::SoldOut);
        assert!(!out.available);
        assert_eq!(out.remaining, Some(0));

        let w = wave(Some(5), 9, Some(StoredWaveStatus::Upcoming));
        let out = classify_wave(&w, false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::SoldOut);
        // Oversold data clamps to zero remaining, never negative.
        assert_eq!(out.remaining, Some(0));
    }

    #[test]
    fn unlimited_wave_in_window_is_on_sale_and_available() {
        let w = WaveInput {
            starts_at: Some(now() - Duration::hours(1)),
            ends_at: Some(now() + Duration::hours(1)),
            total_quantity: None,
            sold_quantity: 5,
            stored_status: Some(StoredWaveStatus::OnSale),
        };
        let out = classify_wave(&w, false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::OnSale);
        assert!(out.available);
        assert_eq!(out.remaining, None);
    }

    #[test]
    fn unlimited_wave_is_never_unavailable_by_quantity() {
        let w = wave(None, 1_000_000, Some(StoredWaveStatus::OnSale));
        let out = classify_wave(&w, false, now()).unwrap();
        assert!(out.available);
    }

    #[test]
    fn explicit_statuses_take_priority_over_window() {
        let in_window = |status| WaveInput {
            starts_at: Some(now() - Duration::hours(1)),
            ends_at: Some(now() + Duration::hours(1)),
            total_quantity: Some(100),
            sold_quantity: 10,
            stored_status: Some(status),
        };

        for stored in [
            StoredWaveStatus::Closed,
            StoredWaveStatus::Ended,
            StoredWaveStatus::OffSale,
        ] {
            let out = classify_wave(&in_window(stored), false, now()).unwrap();
            assert_eq!(out.status, WaveStatus::Closed);
            assert!(!out.available);
        }

        let out = classify_wave(&in_window(StoredWaveStatus::SoldOut), false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::SoldOut);

        let out = classify_wave(&in_window(StoredWaveStatus::Upcoming), false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::Upcoming);
    }

    #[test]
    fn unknown_status_falls_back_to_window_inference() {
        let mut w = wave(Some(100), 10, None);
        w.starts_at = Some(now() + Duration::hours(2));
        let out = classify_wave(&w, false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::Upcoming);

        let mut w = wave(Some(100), 10, None);
        w.ends_at = Some(now() - Duration::hours(2));
        let out = classify_wave(&w, false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::Closed);

        let out = classify_wave(&wave(Some(100), 10, None), false, now()).unwrap();
        assert_eq!(out.status, WaveStatus::OnSale);
    }

    #[test]
    fn ended_event_blocks_availability_but_not_status() {
        let w = wave(Some(100), 10, Some(StoredWaveStatus::OnSale));
        let out = classify_wave(&w, true, now()).unwrap();
        assert_eq!(out.status, WaveStatus::OnSale);
        assert!(!out.available);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let out = classify_wave(&wave(Some(10), -1, None), false, now());
        assert_eq!(
            out,
            Err(DomainError::InvalidInput("sold_quantity is negative"))
        );

        let out = classify_wave(&wave(Some(-10), 0, None), false, now());
        assert_eq!(
            out,
            Err(DomainError::InvalidInput("total_quantity is negative"))
        );
    }

    #[test]
    fn classification_is_pure() {
        let w = WaveInput {
            starts_at: Some(now() - Duration::hours(1)),
            ends_at: Some(now() + Duration::hours(1)),
            total_quantity: Some(50),
            sold_quantity: 12,
            stored_status: Some(StoredWaveStatus::OnSale),
        };
        let a = classify_wave(&w, false, now()).unwrap();
        let b = classify_wave(&w, false, now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn summary_follows_badge_priority() {
        use AvailabilitySummary as S;
        use WaveStatus as W;

        assert_eq!(summarize_waves(&[W::OnSale], true), S::EventEnded);
        assert_eq!(summarize_waves(&[W::SoldOut, W::SoldOut], false), S::SoldOut);
        assert_eq!(summarize_waves(&[W::SoldOut, W::OnSale], false), S::OnSale);
        assert_eq!(summarize_waves(&[W::Closed, W::Upcoming], false), S::SalesUpcoming);
        assert_eq!(summarize_waves(&[W::Closed, W::Closed], false), S::SalesClosed);
        assert_eq!(summarize_waves(&[], false), S::Tickets);
        assert_eq!(summarize_waves(&[W::OnSale], false).label(), "Bilhetes à venda");
    }

    #[test]
    fn waves_order_by_sort_order_then_price() {
        use chrono::Utc;
        let row = |id: i64, sort: Option<i32>, price: i32, visible: bool| TicketTypeRow {
            id,
            event_id: 1,
            name: format!("Wave {id}"),
            description: None,
            price_cents: price,
            currency: "EUR".into(),
            status: "ON_SALE".into(),
            starts_at: None,
            ends_at: None,
            total_quantity: None,
            sold_quantity: 0,
            sort_order: sort,
            is_visible: visible,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let ordered = order_waves(vec![
            row(1, Some(2), 1000, true),
            row(2, None, 500, true),
            row(3, None, 200, true),
            row(4, Some(1), 9000, false),
        ]);
        let ids: Vec<i64> = ordered.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
