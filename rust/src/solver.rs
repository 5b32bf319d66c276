//! End-to-end solve: enumerate, rank, assign and format for both strategies,
//! then keep the schedule with fewer turns.

use thiserror::Error;

use crate::config::SolverConfig;
use crate::enumerate::enumerate_routes;
use crate::formatter::{build_schedule, select_shorter};
use crate::graph::{ColonyGraph, GraphError};
use crate::models::{Colony, MoveSchedule, Route, Strategy};
use crate::ranking::rank_routes;
use crate::scheduler::{assign_ants, ScheduleError};
use crate::{log_detail, log_summary};

/// Errors that can occur while solving a colony.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("No schedule: {}", failed_list(.failed))]
    Unsolvable { failed: Vec<Strategy> },
}

fn failed_list(failed: &[Strategy]) -> String {
    failed
        .iter()
        .map(|s| format!("{} strategy failed", s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-strategy result kept for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    /// Ranked routes the ants were assigned to.
    pub routes: Vec<Route>,
    pub schedule: MoveSchedule,
}

/// The winning schedule plus both strategies' outcomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub strategy: Strategy,
    pub schedule: MoveSchedule,
    pub outcomes: Vec<StrategyOutcome>,
}

impl Solution {
    pub fn turn_count(&self) -> usize {
        self.schedule.turn_count()
    }

    pub fn lines(&self) -> Vec<String> {
        self.schedule.lines()
    }
}

/// Run one strategy on its own working copy of the graph.
///
/// Returns `Ok(None)` when the strategy finds no usable schedule.
pub fn run_strategy(
    graph: &ColonyGraph,
    strategy: Strategy,
    verbosity: u8,
) -> Result<Option<StrategyOutcome>, GraphError> {
    let found = enumerate_routes(graph, strategy, verbosity)?;
    let routes = rank_routes(&found);
    log_summary!(
        verbosity,
        "{}: {} routes ({} before dedup)",
        strategy,
        routes.len(),
        found.len()
    );

    let assignment = match assign_ants(graph.ant_count(), &routes, verbosity) {
        Ok(assignment) => assignment,
        Err(ScheduleError::NoRoutes) => {
            log_summary!(verbosity, "{}: no routes to the end room", strategy);
            return Ok(None);
        }
    };

    let schedule = build_schedule(graph, &assignment)?;
    log_summary!(verbosity, "{}: {} turns", strategy, schedule.turn_count());
    if schedule.is_empty() {
        return Ok(None);
    }

    Ok(Some(StrategyOutcome {
        strategy,
        routes,
        schedule,
    }))
}

/// Solve a graph with both strategies and pick the shorter schedule.
///
/// If either strategy fails, no schedule is produced and every failed
/// strategy is reported.
pub fn solve_graph(graph: &ColonyGraph, config: &SolverConfig) -> Result<Solution, SolveError> {
    let verbosity = config.verbosity;
    log_summary!(
        verbosity,
        "Solving {} rooms, {} ants, {} -> {}",
        graph.room_count(),
        graph.ant_count(),
        graph.start_name(),
        graph.end_name()
    );

    let mut outcomes = Vec::with_capacity(Strategy::ALL.len());
    let mut failed = Vec::new();
    for strategy in Strategy::ALL {
        match run_strategy(graph, strategy, verbosity)? {
            Some(outcome) => outcomes.push(outcome),
            None => failed.push(strategy),
        }
    }

    if !failed.is_empty() {
        return Err(SolveError::Unsolvable { failed });
    }

    let schedule_of = |strategy: Strategy| {
        outcomes
            .iter()
            .find(|o| o.strategy == strategy)
            .map(|o| o.schedule.clone())
            .unwrap_or_default()
    };
    let (strategy, schedule) = select_shorter(
        schedule_of(Strategy::Exhaustive),
        schedule_of(Strategy::ShortestPath),
    )
    .ok_or_else(|| SolveError::Unsolvable {
        failed: Strategy::ALL.to_vec(),
    })?;

    log_summary!(
        verbosity,
        "Chose {} strategy ({} turns)",
        strategy,
        schedule.turn_count()
    );
    for outcome in &outcomes {
        log_detail!(
            verbosity,
            "  {}: {} turns over {} routes",
            outcome.strategy,
            outcome.schedule.turn_count(),
            outcome.routes.len()
        );
    }

    Ok(Solution {
        strategy,
        schedule,
        outcomes,
    })
}

/// Build the graph for a validated colony and solve it.
pub fn solve(colony: &Colony, config: &SolverConfig) -> Result<Solution, SolveError> {
    let graph = ColonyGraph::from_colony(colony)?;
    solve_graph(&graph, config)
}
