use super::coordinate::Coordinate;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Event as delivered by the event source (`GET /events` shape).
///
/// Nothing here is trusted yet: the date is still text and the coordinates are
/// unchecked. Convert with `EventRecord::try_from`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawEvent {
    pub id: i64,
    pub name: String,
    pub host: String,
    pub date: String, // "YYYY-MM-DD", no time component
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A validated event. Owned by the caller; proximity results and clusters only borrow it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    pub host: String,
    pub date: NaiveDate,
    pub location_label: String,
    pub coordinates: Option<Coordinate>,
    pub description: String,
}

impl EventRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}

impl TryFrom<RawEvent> for EventRecord {
    type Error = AppError;

    fn try_from(raw: RawEvent) -> AppResult<Self> {
        let date = date::parse_date(&raw.date).ok_or_else(|| AppError::InvalidDate(raw.date.clone()))?;

        // Both axes are required; a half-filled pair counts as "no coordinates".
        let coordinates = match (raw.latitude, raw.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)?),
            _ => None,
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            host: raw.host,
            date,
            location_label: raw.location,
            coordinates,
            description: raw
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        })
    }
}

impl From<&EventRecord> for RawEvent {
    fn from(ev: &EventRecord) -> Self {
        Self {
            id: ev.id,
            name: ev.name.clone(),
            host: ev.host.clone(),
            date: ev.date_str(),
            location: ev.location_label.clone(),
            latitude: ev.coordinates.map(|c| c.latitude()),
            longitude: ev.coordinates.map(|c| c.longitude()),
            description: Some(ev.description.clone()),
        }
    }
}
