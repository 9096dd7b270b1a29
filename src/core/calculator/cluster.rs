use crate::models::coordinate::CoordinateKey;
use crate::models::proximity::{LocationCluster, ProximityResult};
use std::collections::HashMap;

/// Group results that share a rounded coordinate.
///
/// Clusters appear in the order their first member appears in `results`, and
/// members keep their input order. Every result lands in exactly one cluster.
pub fn cluster<'a>(results: &[ProximityResult<'a>]) -> Vec<LocationCluster<'a>> {
    let mut index: HashMap<CoordinateKey, usize> = HashMap::new();
    let mut clusters: Vec<LocationCluster<'a>> = Vec::new();

    for r in results {
        let key = r.coordinate.key();

        match index.get(&key) {
            Some(&i) => {
                let c = &mut clusters[i];
                c.members.push(*r);
                c.multi = true;
            }
            None => {
                index.insert(key, clusters.len());
                clusters.push(LocationCluster {
                    key,
                    representative: r.coordinate,
                    multi: false,
                    members: vec![*r],
                });
            }
        }
    }

    log::debug!(
        "clustered {} results into {} markers ({} shared)",
        results.len(),
        clusters.len(),
        clusters.iter().filter(|c| c.is_multi()).count()
    );

    clusters
}
