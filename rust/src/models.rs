//! Core data types for the colony solver.

use std::fmt;

use crate::interner::RoomId;

/// Ant identifier, 1-based.
pub type AntId = usize;

/// A room declaration as it appears in the colony file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDecl {
    pub name: String,
    pub x: i64,
    pub y: i64,
}

impl RoomDecl {
    pub fn new(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// A validated colony: ant count, start/end rooms, rooms and tunnels in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colony {
    pub ant_count: usize,
    pub start: String,
    pub end: String,
    pub rooms: Vec<RoomDecl>,
    pub tunnels: Vec<(String, String)>,
}

/// A simple path from the start room to the end room, both inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    rooms: Vec<RoomId>,
}

impl Route {
    pub fn new(rooms: Vec<RoomId>) -> Self {
        Self { rooms }
    }

    /// All rooms, start first and end last.
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Rooms an ant moves into, i.e. everything after the start room.
    pub fn hops(&self) -> &[RoomId] {
        self.rooms.get(1..).unwrap_or(&[])
    }

    /// Number of moves needed to walk the route.
    pub fn hop_count(&self) -> usize {
        self.hops().len()
    }
}

/// The two route discovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first enumeration with end-room preference.
    Exhaustive,
    /// Repeated shortest remaining path.
    ShortestPath,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Exhaustive, Strategy::ShortestPath];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::ShortestPath => "shortest-path",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ants queued on each ranked route.
///
/// `queues[i]` holds the ants travelling `routes[i]`, in departure order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    routes: Vec<Route>,
    queues: Vec<Vec<AntId>>,
}

impl Assignment {
    pub(crate) fn new(routes: Vec<Route>, queues: Vec<Vec<AntId>>) -> Self {
        debug_assert_eq!(routes.len(), queues.len());
        Self { routes, queues }
    }

    #[cfg(test)]
    pub(crate) fn queue(&self, route_index: usize) -> &[AntId] {
        self.queues
            .get(route_index)
            .map(|q| q.as_slice())
            .unwrap_or(&[])
    }

    /// Routes paired with their ant queues, in ranked order.
    pub fn lanes(&self) -> impl Iterator<Item = (&Route, &[AntId])> {
        self.routes
            .iter()
            .zip(self.queues.iter().map(|q| q.as_slice()))
    }

    pub fn ant_count(&self) -> usize {
        self.queues.iter().map(|q| q.len()).sum()
    }

    /// Number of turns until the last ant arrives.
    pub fn makespan(&self) -> usize {
        self.lanes()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|(route, queue)| route.hop_count() + queue.len() - 1)
            .max()
            .unwrap_or(0)
    }
}

/// One ant entering one room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub ant: AntId,
    pub room: String,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-{}", self.ant, self.room)
    }
}

/// Simultaneous moves per turn, ants ascending within each turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSchedule {
    turns: Vec<Vec<Move>>,
}

impl MoveSchedule {
    pub(crate) fn new(turns: Vec<Vec<Move>>) -> Self {
        Self { turns }
    }

    #[cfg(test)]
    pub(crate) fn turns(&self) -> &[Vec<Move>] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render each turn as a line of space-separated `L{ant}-{room}` tokens.
    pub fn lines(&self) -> Vec<String> {
        self.turns
            .iter()
            .map(|turn| {
                turn.iter()
                    .map(|mv| mv.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for MoveSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
