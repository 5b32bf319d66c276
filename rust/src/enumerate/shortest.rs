//! Shortest-remaining-path route enumeration.
//!
//! Each round collects every simple path from start to end that avoids
//! visited rooms, keeps the shortest one, and marks its interior visited so
//! the next round has to find a route around it.

use crate::graph::{ColonyGraph, GraphError};
use crate::interner::RoomId;
use crate::models::Route;
use crate::{log_debug, log_detail};

use super::describe;

/// Collect every simple path from `start` to `end` that avoids visited
/// rooms, appending them to `candidates` in discovery order.
fn collect_candidates(
    graph: &ColonyGraph,
    start: RoomId,
    end: RoomId,
    candidates: &mut Vec<Vec<RoomId>>,
) {
    if start == end {
        return;
    }

    let mut on_path = vec![false; graph.room_count()];
    let mut path = vec![start];
    // Next connection index to try, one per room on `path`
    let mut cursors = vec![0usize];
    on_path[start as usize] = true;

    while let Some(&current) = path.last() {
        let depth = path.len() - 1;
        let Some(next) = graph.connection_at(current, cursors[depth]) else {
            cursors.pop();
            path.pop();
            on_path[current as usize] = false;
            continue;
        };
        cursors[depth] += 1;

        if on_path[next as usize] || graph.is_visited(next) {
            continue;
        }
        if next == end {
            let mut candidate = path.clone();
            candidate.push(end);
            candidates.push(candidate);
        } else {
            path.push(next);
            cursors.push(0);
            on_path[next as usize] = true;
        }
    }
}

/// First candidate with the fewest rooms.
fn shortest_candidate(candidates: Vec<Vec<RoomId>>) -> Option<Vec<RoomId>> {
    candidates.into_iter().min_by_key(Vec::len)
}

/// Enumerate routes by repeatedly taking the shortest path through unvisited rooms.
///
/// One round runs per unvisited connection of the start room. A round that
/// finds a route already recorded adds nothing.
pub fn enumerate_shortest(
    graph: &mut ColonyGraph,
    verbosity: u8,
) -> Result<Vec<Route>, GraphError> {
    let start = graph.start_id()?;
    let end = graph.end_id()?;

    let rounds = graph
        .connections(start)
        .iter()
        .filter(|&&id| !graph.is_visited(id))
        .count();

    let mut routes: Vec<Route> = Vec::new();
    for round in 0..rounds {
        let mut candidates = Vec::new();
        collect_candidates(graph, start, end, &mut candidates);
        log_debug!(
            verbosity,
            "  shortest: round {} has {} candidates",
            round,
            candidates.len()
        );

        let Some(best) = shortest_candidate(candidates) else {
            continue;
        };

        let interior_len = best.len().saturating_sub(1);
        for &room in best.iter().take(interior_len).skip(1) {
            graph.mark_visited(room);
        }

        let route = Route::new(best);
        if routes.contains(&route) {
            continue;
        }
        log_detail!(verbosity, "  shortest: route {}", describe(graph, &route));
        routes.push(route);
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{graph, names};
    use super::*;

    fn run(graph: &mut ColonyGraph) -> Vec<Vec<String>> {
        let routes = enumerate_shortest(graph, 0).unwrap();
        routes.iter().map(|r| names(graph, r)).collect()
    }

    #[test]
    fn test_collect_candidates_finds_all_simple_paths() {
        let g = graph(
            &["start", "a", "b", "end"],
            &[("start", "a"), ("start", "b"), ("a", "b"), ("a", "end"), ("b", "end")],
        );
        let start = g.start_id().unwrap();
        let end = g.end_id().unwrap();

        let mut candidates = Vec::new();
        collect_candidates(&g, start, end, &mut candidates);

        // start-a-end, start-a-b-end, start-b-a-end, start-b-end
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|c| c.first() == Some(&start)));
        assert!(candidates.iter().all(|c| c.last() == Some(&end)));
    }

    #[test]
    fn test_shortest_candidate_prefers_first_on_tie() {
        let picked = shortest_candidate(vec![vec![0, 5, 6, 1], vec![0, 2, 1], vec![0, 3, 1]]);
        assert_eq!(picked, Some(vec![0, 2, 1]));
        assert_eq!(shortest_candidate(Vec::new()), None);
    }

    #[test]
    fn test_shorter_route_taken_before_longer() {
        // start-a-x-end is discovered first but start-b-end is shorter
        let mut g = graph(
            &["start", "a", "x", "b", "end"],
            &[
                ("start", "a"),
                ("start", "b"),
                ("a", "x"),
                ("x", "end"),
                ("b", "end"),
            ],
        );
        assert_eq!(
            run(&mut g),
            vec![vec!["start", "b", "end"], vec!["start", "a", "x", "end"]]
        );
    }

    #[test]
    fn test_interior_rooms_are_consumed() {
        let mut g = graph(
            &["start", "a", "b", "c", "end"],
            &[
                ("start", "a"),
                ("start", "b"),
                ("a", "c"),
                ("b", "c"),
                ("c", "end"),
            ],
        );
        assert_eq!(run(&mut g), vec![vec!["start", "a", "c", "end"]]);
        assert!(g.lookup("a").unwrap().visited);
        assert!(g.lookup("c").unwrap().visited);
        assert!(!g.lookup("b").unwrap().visited);
        assert!(!g.lookup("end").unwrap().visited);
    }

    #[test]
    fn test_direct_link_shadows_other_routes() {
        // The direct route has no interior, so every round finds it again.
        let mut g = graph(
            &["start", "a", "end"],
            &[("start", "a"), ("a", "end"), ("start", "end")],
        );
        assert_eq!(run(&mut g), vec![vec!["start", "end"]]);
    }

    #[test]
    fn test_no_routes_when_end_unreachable() {
        let mut g = graph(&["start", "a", "end"], &[("start", "a")]);
        assert!(run(&mut g).is_empty());
    }
}
