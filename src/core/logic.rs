use crate::core::calculator::cluster::cluster;
use crate::core::calculator::proximity::{ProximityQuery, filter};
use crate::core::calculator::temporal::{Partition, partition};
use crate::models::event::EventRecord;
use crate::models::position::ReferencePosition;
use crate::models::proximity::{LocationCluster, ProximityResult};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the map page needs for one reference position.
#[derive(Debug, Serialize)]
pub struct MapView<'a> {
    pub reference: ReferencePosition,
    pub radius_miles: f64,
    pub results: Vec<ProximityResult<'a>>,
    pub clusters: Vec<LocationCluster<'a>>,
}

impl MapView<'_> {
    pub fn multi_count(&self) -> usize {
        self.clusters.iter().filter(|c| c.is_multi()).count()
    }
}

pub struct Core;

impl Core {
    /// Full recomputation: filter, then cluster. Nothing is cached between calls.
    pub fn build_map_view<'a>(
        reference: ReferencePosition,
        events: &'a [EventRecord],
        query: &ProximityQuery,
    ) -> MapView<'a> {
        let results = filter(&reference, events, query);
        let clusters = cluster(&results);

        MapView {
            reference,
            radius_miles: query.radius_miles,
            results,
            clusters,
        }
    }

    pub fn build_list_view(events: &[EventRecord], today: NaiveDate) -> Partition<'_> {
        partition(events, today)
    }
}
