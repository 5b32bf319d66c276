//! Room graph with start/end directionality and per-traversal visit flags.

use thiserror::Error;

use crate::interner::{RoomId, RoomIdInterner};
use crate::models::Colony;

/// Errors raised while building or querying the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate room: {0}")]
    DuplicateRoom(String),
    #[error("Room doesn't exist: {0}")]
    UnknownRoom(String),
    #[error("Room links to itself: {0}")]
    SelfLink(String),
    #[error("Duplicate link: {0}-{1}")]
    DuplicateLink(String, String),
}

/// A room and the rooms reachable from it in one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Outgoing connections in discovery order.
    pub connections: Vec<RoomId>,
    pub visited: bool,
}

/// The colony as a graph. Cloning yields an independent working copy.
#[derive(Clone, Debug)]
pub struct ColonyGraph {
    names: RoomIdInterner,
    rooms: Vec<Room>,
    start_name: String,
    end_name: String,
    ant_count: usize,
}

impl ColonyGraph {
    /// Create an empty graph. Rooms and links are added afterwards.
    pub fn new(ant_count: usize, start_name: &str, end_name: &str) -> Self {
        Self {
            names: RoomIdInterner::default(),
            rooms: Vec::new(),
            start_name: start_name.to_string(),
            end_name: end_name.to_string(),
            ant_count,
        }
    }

    /// Build the graph from a validated colony: rooms first, then tunnels, in file order.
    pub fn from_colony(colony: &Colony) -> Result<Self, GraphError> {
        let mut graph = Self::new(colony.ant_count, &colony.start, &colony.end);
        graph.names = RoomIdInterner::with_capacity(colony.rooms.len());
        for room in &colony.rooms {
            graph.add_room(&room.name)?;
        }
        for (a, b) in &colony.tunnels {
            graph.add_link(a, b)?;
        }
        Ok(graph)
    }

    pub fn add_room(&mut self, name: &str) -> Result<RoomId, GraphError> {
        let id = self
            .names
            .insert_new(name)
            .ok_or_else(|| GraphError::DuplicateRoom(name.to_string()))?;
        self.rooms.push(Room {
            id,
            name: name.to_string(),
            connections: Vec::new(),
            visited: false,
        });
        Ok(id)
    }

    /// Connect two rooms.
    ///
    /// Edges touching the end room only lead into it, edges touching the
    /// start room only lead out of it; every other edge goes both ways.
    pub fn add_link(&mut self, a: &str, b: &str) -> Result<(), GraphError> {
        let from = self.id_of(a)?;
        let to = self.id_of(b)?;
        if from == to {
            return Err(GraphError::SelfLink(a.to_string()));
        }
        if self.rooms[from as usize].connections.contains(&to)
            || self.rooms[to as usize].connections.contains(&from)
        {
            return Err(GraphError::DuplicateLink(a.to_string(), b.to_string()));
        }

        if a == self.end_name {
            self.rooms[to as usize].connections.push(from);
        } else if b == self.end_name {
            self.rooms[from as usize].connections.push(to);
        } else if b == self.start_name {
            self.rooms[to as usize].connections.push(from);
        } else if a == self.start_name {
            self.rooms[from as usize].connections.push(to);
        } else {
            self.rooms[from as usize].connections.push(to);
            self.rooms[to as usize].connections.push(from);
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Room> {
        self.names.get(name).map(|id| &self.rooms[id as usize])
    }

    pub fn id_of(&self, name: &str) -> Result<RoomId, GraphError> {
        self.names
            .get(name)
            .ok_or_else(|| GraphError::UnknownRoom(name.to_string()))
    }

    pub fn start_id(&self) -> Result<RoomId, GraphError> {
        self.id_of(&self.start_name)
    }

    pub fn end_id(&self) -> Result<RoomId, GraphError> {
        self.id_of(&self.end_name)
    }

    pub fn start_name(&self) -> &str {
        &self.start_name
    }

    pub fn end_name(&self) -> &str {
        &self.end_name
    }

    pub fn ant_count(&self) -> usize {
        self.ant_count
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Name of a room id; ids only come from this graph or its clones.
    pub fn name_of(&self, id: RoomId) -> Option<&str> {
        self.names.resolve(id)
    }

    pub fn connections(&self, id: RoomId) -> &[RoomId] {
        &self.rooms[id as usize].connections
    }

    /// Connection at `index`, if the room has that many.
    #[inline]
    pub fn connection_at(&self, id: RoomId, index: usize) -> Option<RoomId> {
        self.rooms[id as usize].connections.get(index).copied()
    }

    #[inline]
    pub fn is_visited(&self, id: RoomId) -> bool {
        self.rooms[id as usize].visited
    }

    pub fn mark_visited(&mut self, id: RoomId) {
        self.rooms[id as usize].visited = true;
    }

    /// Move `target` to the front of a room's connections, if present.
    pub fn promote_connection(&mut self, id: RoomId, target: RoomId) {
        let connections = &mut self.rooms[id as usize].connections;
        if let Some(pos) = connections.iter().position(|&c| c == target) {
            connections.swap(0, pos);
        }
    }
}
