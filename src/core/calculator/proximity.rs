use super::distance::distance_miles;
use super::temporal::is_upcoming;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::models::position::ReferencePosition;
use crate::models::proximity::ProximityResult;
use chrono::NaiveDate;

pub const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// Parameters of one proximity pass.
#[derive(Debug, Clone, Copy)]
pub struct ProximityQuery {
    pub radius_miles: f64,
    pub exclude_past: bool,
    /// Local calendar day used when `exclude_past` is set.
    pub today: NaiveDate,
}

impl ProximityQuery {
    pub fn new(radius_miles: f64, exclude_past: bool, today: NaiveDate) -> AppResult<Self> {
        validate_radius(radius_miles)?;
        Ok(Self {
            radius_miles,
            exclude_past,
            today,
        })
    }
}

pub fn validate_radius(radius_miles: f64) -> AppResult<f64> {
    if radius_miles.is_finite() && radius_miles >= 0.0 {
        Ok(radius_miles)
    } else {
        Err(AppError::InvalidRadius(radius_miles))
    }
}

/// Select the geotagged events within `query.radius_miles` of `reference`.
///
/// Output is sorted by ascending distance; equal distances are ordered by
/// ascending event id. Events without coordinates are skipped silently.
pub fn filter<'a>(
    reference: &ReferencePosition,
    events: &'a [EventRecord],
    query: &ProximityQuery,
) -> Vec<ProximityResult<'a>> {
    let origin = reference.coordinate;

    let mut results: Vec<ProximityResult<'a>> = events
        .iter()
        .filter(|e| !query.exclude_past || is_upcoming(e, query.today))
        .filter_map(|e| {
            let c = e.coordinates?;
            Some(ProximityResult {
                event: e,
                coordinate: c,
                distance_miles: distance_miles(origin, c),
            })
        })
        .filter(|r| r.distance_miles <= query.radius_miles)
        .collect();

    results.sort_by(|a, b| {
        a.distance_miles
            .total_cmp(&b.distance_miles)
            .then(a.event.id.cmp(&b.event.id))
    });

    log::debug!(
        "proximity from {} ({}): {} of {} events within {} mi",
        origin,
        reference.source.as_str(),
        results.len(),
        events.len(),
        query.radius_miles
    );

    results
}
