//! Greedy ant-to-route assignment.
//!
//! Ants are placed one at a time on the route where they would arrive
//! earliest. Routes are independent lanes: two routes sharing a room do not
//! block each other.

use thiserror::Error;

use crate::log_detail;
use crate::models::{AntId, Assignment, Route};

/// Errors that can occur during ant assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No routes to assign ants to")]
    NoRoutes,
}

/// Projected arrival turn for the next ant on a lane.
#[inline]
fn projected_finish(route: &Route, queued: usize) -> usize {
    route.hop_count() + queued
}

/// Assign ants `1..=ant_count` across ranked routes.
///
/// Each ant goes to the route minimizing `hop_count + ants already queued`;
/// ties go to the earliest route in ranked order.
pub fn assign_ants(
    ant_count: usize,
    routes: &[Route],
    verbosity: u8,
) -> Result<Assignment, ScheduleError> {
    if routes.is_empty() {
        return Err(ScheduleError::NoRoutes);
    }

    let mut queues: Vec<Vec<AntId>> = vec![Vec::new(); routes.len()];
    for ant in 1..=ant_count {
        let mut best_index = 0;
        let mut best_finish = projected_finish(&routes[0], queues[0].len());
        for (index, route) in routes.iter().enumerate().skip(1) {
            let finish = projected_finish(route, queues[index].len());
            if finish < best_finish {
                best_finish = finish;
                best_index = index;
            }
        }
        log_detail!(
            verbosity,
            "  ant {} -> route {} (arrives turn {})",
            ant,
            best_index,
            best_finish
        );
        queues[best_index].push(ant);
    }

    let assignment = Assignment::new(routes.to_vec(), queues);
    debug_assert_eq!(assignment.ant_count(), ant_count);
    Ok(assignment)
}
