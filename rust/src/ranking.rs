//! Route deduplication and ordering.

use rustc_hash::FxHashSet;

use crate::models::Route;

/// Drop repeated routes and order the rest by ascending hop count.
///
/// The sort is stable, so routes of equal length keep discovery order.
pub fn rank_routes(routes: &[Route]) -> Vec<Route> {
    let mut seen: FxHashSet<&Route> = FxHashSet::default();
    let mut ranked: Vec<Route> = routes
        .iter()
        .filter(|route| seen.insert(*route))
        .cloned()
        .collect();
    ranked.sort_by_key(|route| route.hop_count());
    ranked
}
