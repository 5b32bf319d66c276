//! Route enumeration strategies.
//!
//! Each strategy takes ownership of a working copy of the graph so that
//! visit flags set during one enumeration never leak into another.

mod exhaustive;
mod shortest;

pub use exhaustive::enumerate_exhaustive;
pub use shortest::enumerate_shortest;

use crate::graph::{ColonyGraph, GraphError};
use crate::models::{Route, Strategy};

/// Run one strategy on its own clone of `graph`.
pub fn enumerate_routes(
    graph: &ColonyGraph,
    strategy: Strategy,
    verbosity: u8,
) -> Result<Vec<Route>, GraphError> {
    let mut working = graph.clone();
    match strategy {
        Strategy::Exhaustive => enumerate_exhaustive(&mut working, verbosity),
        Strategy::ShortestPath => enumerate_shortest(&mut working, verbosity),
    }
}

/// Render a route with room names for log output.
pub(crate) fn describe(graph: &ColonyGraph, route: &Route) -> String {
    route
        .rooms()
        .iter()
        .map(|&id| graph.name_of(id).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::graph::ColonyGraph;
    use crate::models::Route;

    /// Graph with rooms declared in order and the given links.
    pub fn graph(rooms: &[&str], links: &[(&str, &str)]) -> ColonyGraph {
        let mut graph = ColonyGraph::new(1, "start", "end");
        for room in rooms {
            graph.add_room(room).unwrap();
        }
        for (a, b) in links {
            graph.add_link(a, b).unwrap();
        }
        graph
    }

    /// Route names including the start room.
    pub fn names(graph: &ColonyGraph, route: &Route) -> Vec<String> {
        route
            .rooms()
            .iter()
            .map(|&id| graph.name_of(id).unwrap().to_string())
            .collect()
    }

    /// Single corridor start-r0-r1-...-end with `len` interior rooms.
    pub fn corridor(len: usize, ant_count: usize) -> ColonyGraph {
        let mut graph = ColonyGraph::new(ant_count, "start", "end");
        let names: Vec<String> = (0..len).map(|i| format!("r{}", i)).collect();
        graph.add_room("start").unwrap();
        for name in &names {
            graph.add_room(name).unwrap();
        }
        graph.add_room("end").unwrap();

        let mut previous = "start";
        for name in &names {
            graph.add_link(previous, name).unwrap();
            previous = name.as_str();
        }
        graph.add_link(previous, "end").unwrap();
        graph
    }

    pub fn route(graph: &ColonyGraph, rooms: &[&str]) -> Route {
        Route::new(rooms.iter().map(|r| graph.id_of(r).unwrap()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{corridor, graph, names};
    use super::*;
    use rustc_hash::FxHashSet;

    fn diamond() -> ColonyGraph {
        graph(
            &["start", "A", "B", "end"],
            &[("start", "A"), ("start", "B"), ("A", "end"), ("B", "end")],
        )
    }

    #[test]
    fn test_both_strategies_find_diamond_routes() {
        let graph = diamond();
        for strategy in Strategy::ALL {
            let routes = enumerate_routes(&graph, strategy, 0).unwrap();
            let found: Vec<Vec<String>> = routes.iter().map(|r| names(&graph, r)).collect();
            assert_eq!(found.len(), 2, "{strategy}");
            assert!(found.contains(&vec!["start".into(), "A".into(), "end".into()]));
            assert!(found.contains(&vec!["start".into(), "B".into(), "end".into()]));
        }
    }

    #[test]
    fn test_enumeration_leaves_source_graph_untouched() {
        let graph = diamond();
        enumerate_routes(&graph, Strategy::Exhaustive, 0).unwrap();
        enumerate_routes(&graph, Strategy::ShortestPath, 0).unwrap();

        for name in ["start", "A", "B", "end"] {
            assert!(!graph.lookup(name).unwrap().visited);
        }
        let start = graph.start_id().unwrap();
        assert_eq!(graph.connections(start).len(), 2);
    }

    #[test]
    fn test_enumeration_is_idempotent_on_fresh_clones() {
        let graph = graph(
            &["start", "a", "b", "c", "d", "end"],
            &[
                ("start", "a"),
                ("start", "b"),
                ("a", "c"),
                ("b", "c"),
                ("c", "d"),
                ("d", "end"),
                ("a", "end"),
            ],
        );

        for strategy in Strategy::ALL {
            let first: FxHashSet<Route> = enumerate_routes(&graph, strategy, 0)
                .unwrap()
                .into_iter()
                .collect();
            let second: FxHashSet<Route> = enumerate_routes(&graph, strategy, 0)
                .unwrap()
                .into_iter()
                .collect();
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_unreachable_end_yields_no_routes() {
        // end only links to a room that nothing reaches from start
        let graph = graph(
            &["start", "a", "b", "c", "end"],
            &[("start", "a"), ("b", "c"), ("c", "end")],
        );

        for strategy in Strategy::ALL {
            assert!(enumerate_routes(&graph, strategy, 0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_long_corridor_does_not_exhaust_the_stack() {
        let graph = corridor(100_000, 1);
        for strategy in Strategy::ALL {
            let routes = enumerate_routes(&graph, strategy, 0).unwrap();
            assert_eq!(routes.len(), 1, "{strategy}");
            assert_eq!(routes[0].hop_count(), 100_001);
        }
    }

    #[test]
    fn test_describe_joins_names() {
        let graph = diamond();
        let route = super::test_support::route(&graph, &["start", "A", "end"]);
        assert_eq!(describe(&graph, &route), "start-A-end");
    }
}
