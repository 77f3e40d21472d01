use serde::{Deserialize, Serialize};

/// Event lifecycle as stored in `events.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Finished,
    Cancelled,
}

impl EventStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Some(Self::Draft),
            "PUBLISHED" => Some(Self::Published),
            "FINISHED" => Some(Self::Finished),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Rows with an unrecognized status stay out of public surfaces,
    /// so Draft is the safe reading.
    pub fn parse_or_draft(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Draft)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Explicit sale status as stored in `ticket_types.status`.
///
/// Unrecognized strings parse to `None`; the classifier then falls back to
/// sale-window inference instead of failing, so legacy rows keep rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredWaveStatus {
    OnSale,
    Upcoming,
    Closed,
    SoldOut,
    OffSale,
    Ended,
}

impl StoredWaveStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ON_SALE" => Some(Self::OnSale),
            "UPCOMING" => Some(Self::Upcoming),
            "CLOSED" => Some(Self::Closed),
            "SOLD_OUT" => Some(Self::SoldOut),
            "OFF_SALE" => Some(Self::OffSale),
            "ENDED" => Some(Self::Ended),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_status_parses_case_insensitively() {
        assert_eq!(EventStatus::parse("published"), Some(EventStatus::Published));
        assert_eq!(EventStatus::parse(" CANCELLED "), Some(EventStatus::Cancelled));
        assert_eq!(EventStatus::parse("archived"), None);
        assert_eq!(EventStatus::parse_or_draft("???"), EventStatus::Draft);
    }

    #[test]
    fn wave_status_parses_known_variants_only() {
        assert_eq!(StoredWaveStatus::parse("off_sale"), Some(StoredWaveStatus::OffSale));
        assert_eq!(StoredWaveStatus::parse("SOLD_OUT"), Some(StoredWaveStatus::SoldOut));
        assert_eq!(StoredWaveStatus::parse("paused"), None);
    }
}
