//! Ant colony route scheduler.
//!
//! Finds routes from a colony's start room to its end room with two
//! independent strategies, spreads the ants over each strategy's routes, and
//! keeps whichever schedule needs fewer turns.

pub mod config;
pub mod enumerate;
pub mod formatter;
pub mod graph;
pub mod interner;
pub mod logging;
mod models;
pub mod parser;
pub mod ranking;
pub mod report;
pub mod scheduler;
pub mod solver;

#[cfg(feature = "python")]
mod python;

pub use config::SolverConfig;
pub use graph::{ColonyGraph, GraphError, Room};
pub use interner::RoomId;
pub use models::{AntId, Assignment, Colony, Move, MoveSchedule, RoomDecl, Route, Strategy};
pub use parser::{parse_colony, ParseError};
pub use report::{render, RunReport};
pub use scheduler::ScheduleError;
pub use solver::{solve, solve_graph, Solution, SolveError, StrategyOutcome};
