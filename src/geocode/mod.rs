//! Free-text location lookup.

pub mod nominatim;

use crate::errors::{AppError, AppResult};
use crate::models::coordinate::{Coordinate, parse_degrees};
use serde::{Deserialize, Serialize};

pub use nominatim::NominatimResolver;

/// One answer to a location query. Used verbatim once the caller picks it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub label: String,
    pub coordinate: Coordinate,
}

/// Resolves a free-text query into zero or more candidates, best match first.
pub trait LocationResolver {
    fn resolve(&self, query: &str, limit: usize) -> AppResult<Vec<Candidate>>;
}

/// Wire shape of one geocoder hit; coordinates arrive as numeric strings.
#[derive(Debug, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl TryFrom<Place> for Candidate {
    type Error = AppError;

    fn try_from(p: Place) -> AppResult<Self> {
        let coordinate = Coordinate::new(parse_degrees(&p.lat)?, parse_degrees(&p.lon)?)?;
        Ok(Self {
            label: p.display_name,
            coordinate,
        })
    }
}

/// Convert geocoder hits, dropping the ones with unusable coordinates.
pub fn candidates_from_places(places: Vec<Place>) -> Vec<Candidate> {
    places
        .into_iter()
        .filter_map(|p| {
            let name = p.display_name.clone();
            match Candidate::try_from(p) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("dropping location candidate '{}': {}", name, e);
                    None
                }
            }
        })
        .collect()
}

/// Parse a raw geocoder response body.
pub fn parse_candidates(body: &str) -> AppResult<Vec<Candidate>> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    Ok(candidates_from_places(places))
}

/// Reject blank queries before any network traffic.
pub fn normalize_query(query: &str) -> AppResult<&str> {
    let q = query.trim();
    if q.is_empty() {
        return Err(AppError::InvalidQuery("query is empty".to_string()));
    }
    Ok(q)
}
