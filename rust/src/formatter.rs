//! Turn-by-turn move synthesis and schedule selection.

use crate::graph::{ColonyGraph, GraphError};
use crate::models::{Assignment, Move, MoveSchedule, Strategy};

/// Expand an assignment into per-turn moves.
///
/// The ant at queue position `j` on a route enters hop `k` at turn `j + k`.
/// Within a turn, moves are ordered by ant id.
pub fn build_schedule(
    graph: &ColonyGraph,
    assignment: &Assignment,
) -> Result<MoveSchedule, GraphError> {
    let mut turns: Vec<Vec<Move>> = Vec::with_capacity(assignment.makespan());

    for (route, queue) in assignment.lanes() {
        let hop_names = route
            .hops()
            .iter()
            .map(|&id| {
                graph
                    .name_of(id)
                    .ok_or_else(|| GraphError::UnknownRoom(format!("#{}", id)))
            })
            .collect::<Result<Vec<&str>, GraphError>>()?;

        for (position, &ant) in queue.iter().enumerate() {
            for (hop, name) in hop_names.iter().enumerate() {
                let turn = position + hop;
                if turn >= turns.len() {
                    turns.resize_with(turn + 1, Vec::new);
                }
                turns[turn].push(Move {
                    ant,
                    room: (*name).to_string(),
                });
            }
        }
    }

    for turn in &mut turns {
        turn.sort_by_key(|mv| mv.ant);
    }

    Ok(MoveSchedule::new(turns))
}

/// Pick the schedule with fewer turns; the exhaustive one wins ties.
///
/// Returns `None` if neither schedule has any turns.
pub fn select_shorter(
    exhaustive: MoveSchedule,
    shortest: MoveSchedule,
) -> Option<(Strategy, MoveSchedule)> {
    match (exhaustive.is_empty(), shortest.is_empty()) {
        (true, true) => None,
        (false, true) => Some((Strategy::Exhaustive, exhaustive)),
        (true, false) => Some((Strategy::ShortestPath, shortest)),
        (false, false) => {
            if exhaustive.turn_count() > shortest.turn_count() {
                Some((Strategy::ShortestPath, shortest))
            } else {
                Some((Strategy::Exhaustive, exhaustive))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::test_support::{graph, route};
    use crate::scheduler::assign_ants;

    #[test]
    fn test_two_room_colony_moves_one_ant_per_turn() {
        let g = graph(&["start", "end"], &[("start", "end")]);
        let assignment = assign_ants(3, &[route(&g, &["start", "end"])], 0).unwrap();

        let schedule = build_schedule(&g, &assignment).unwrap();
        assert_eq!(schedule.lines(), vec!["L1-end", "L2-end", "L3-end"]);
    }

    #[test]
    fn test_diamond_moves_in_parallel() {
        let g = graph(
            &["start", "A", "B", "end"],
            &[("start", "A"), ("start", "B"), ("A", "end"), ("B", "end")],
        );
        let routes = [
            route(&g, &["start", "A", "end"]),
            route(&g, &["start", "B", "end"]),
        ];
        let assignment = assign_ants(2, &routes, 0).unwrap();

        let schedule = build_schedule(&g, &assignment).unwrap();
        assert_eq!(schedule.lines(), vec!["L1-A L2-B", "L1-end L2-end"]);
    }

    #[test]
    fn test_ants_sorted_numerically_within_turn() {
        let g = graph(
            &["start", "a", "b", "c", "end"],
            &[("start", "a"), ("a", "end"), ("start", "b"), ("b", "c"), ("c", "end")],
        );
        let routes = [
            route(&g, &["start", "a", "end"]),
            route(&g, &["start", "b", "c", "end"]),
        ];
        let assignment = assign_ants(12, &routes, 0).unwrap();
        let schedule = build_schedule(&g, &assignment).unwrap();

        for turn in schedule.turns() {
            let ants: Vec<usize> = turn.iter().map(|mv| mv.ant).collect();
            let mut sorted = ants.clone();
            sorted.sort_unstable();
            assert_eq!(ants, sorted);
        }
        // Lane 0 pushes ants 8 and 10 before lane 1 pushes 9 and 11
        assert_eq!(schedule.lines()[5], "L8-end L9-end L10-a L11-c");
        assert_eq!(schedule.turn_count(), assignment.makespan());
    }

    #[test]
    fn test_select_shorter() {
        let one = MoveSchedule::new(vec![vec![Move {
            ant: 1,
            room: "end".to_string(),
        }]]);
        let two = MoveSchedule::new(vec![one.turns()[0].clone(), one.turns()[0].clone()]);

        assert_eq!(
            select_shorter(two.clone(), one.clone()).map(|(s, _)| s),
            Some(Strategy::ShortestPath)
        );
        assert_eq!(
            select_shorter(one.clone(), two.clone()).map(|(s, _)| s),
            Some(Strategy::Exhaustive)
        );
        assert_eq!(
            select_shorter(one.clone(), one.clone()).map(|(s, _)| s),
            Some(Strategy::Exhaustive)
        );
        assert_eq!(
            select_shorter(MoveSchedule::default(), two).map(|(s, _)| s),
            Some(Strategy::ShortestPath)
        );
        assert!(select_shorter(MoveSchedule::default(), MoveSchedule::default()).is_none());
    }
}
