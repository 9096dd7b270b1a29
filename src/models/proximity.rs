use super::coordinate::{Coordinate, CoordinateKey};
use super::event::EventRecord;
use serde::Serialize;

/// One event inside the search radius, with its distance from the reference.
///
/// `coordinate` is the event's own position, copied out when the result is
/// built so that clustering never has to deal with an untagged event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProximityResult<'a> {
    pub event: &'a EventRecord,
    pub coordinate: Coordinate,
    pub distance_miles: f64,
}

/// Events sharing one rounded coordinate, rendered as a single map marker.
#[derive(Debug, Clone, Serialize)]
pub struct LocationCluster<'a> {
    pub key: CoordinateKey,
    pub representative: Coordinate,
    /// More than one member: drawn as a shared marker.
    pub multi: bool,
    pub members: Vec<ProximityResult<'a>>,
}

impl LocationCluster<'_> {
    pub fn is_multi(&self) -> bool {
        self.multi
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
