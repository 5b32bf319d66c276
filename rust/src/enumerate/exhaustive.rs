//! Depth-first route enumeration.
//!
//! Rooms are marked visited as the walk enters them and stay marked for the
//! rest of the enumeration, so later routes only use rooms no earlier walk
//! has touched. After every route the walk restarts from the start room.

use crate::graph::{ColonyGraph, GraphError};
use crate::interner::RoomId;
use crate::models::Route;
use crate::{log_debug, log_detail};

use super::describe;

/// A room on the walk stack.
struct Frame {
    room: RoomId,
    /// Offset in the shared path where this frame's walk begins.
    base: usize,
    /// Next connection index to try.
    cursor: usize,
    promoted: bool,
}

/// Walk state scoped to a single enumeration.
///
/// The walk keeps its own frame stack so path length is bounded by memory,
/// not by the thread stack.
struct DepthFirstWalk<'g> {
    graph: &'g mut ColonyGraph,
    start: RoomId,
    end: RoomId,
    /// Set once a route is recorded: the start room no longer offers a
    /// direct move into the end room.
    direct_detached: bool,
    frames: Vec<Frame>,
    /// Rooms of every open frame. A restart from the start room continues
    /// on top of the path that reached the end room.
    path: Vec<RoomId>,
    routes: Vec<Route>,
    verbosity: u8,
}

impl DepthFirstWalk<'_> {
    /// Push `room` onto the walk. `restart` begins a fresh path at `room`.
    fn enter(&mut self, room: RoomId, restart: bool) {
        if room != self.start && room != self.end {
            self.graph.mark_visited(room);
        }
        let base = match self.frames.last() {
            Some(parent) if !restart => parent.base,
            _ => self.path.len(),
        };
        self.path.push(room);
        self.frames.push(Frame {
            room,
            base,
            cursor: 0,
            promoted: false,
        });
        log_debug!(
            self.verbosity,
            "  dfs: enter {} (depth {})",
            self.graph.name_of(room).unwrap_or("?"),
            self.path.len() - 1 - base
        );

        if room == self.end {
            let route = Route::new(self.path[base..].to_vec());
            log_detail!(
                self.verbosity,
                "  dfs: route {}",
                describe(&*self.graph, &route)
            );
            self.routes.push(route);
            self.direct_detached = true;
            self.enter(self.start, true);
        }
    }

    fn run(&mut self) {
        self.enter(self.start, true);

        while let Some(frame) = self.frames.last_mut() {
            let current = frame.room;
            if !frame.promoted {
                frame.promoted = true;
                self.graph.promote_connection(current, self.end);
            }

            // Cursor by index: nested restarts may reorder the start room's list.
            let mut child = None;
            while let Some(next) = self.graph.connection_at(current, frame.cursor) {
                frame.cursor += 1;
                if current == self.start && next == self.end && self.direct_detached {
                    continue;
                }
                if !self.graph.is_visited(next) {
                    child = Some(next);
                    break;
                }
            }

            match child {
                Some(next) => self.enter(next, false),
                None => {
                    self.frames.pop();
                    self.path.pop();
                }
            }
        }
    }
}

/// Enumerate routes depth-first, preferring moves into the end room.
///
/// Routes found from a partially explored prefix may share interior rooms
/// with the route that prefix first led to.
pub fn enumerate_exhaustive(
    graph: &mut ColonyGraph,
    verbosity: u8,
) -> Result<Vec<Route>, GraphError> {
    let start = graph.start_id()?;
    let end = graph.end_id()?;

    let mut walk = DepthFirstWalk {
        graph,
        start,
        end,
        direct_detached: false,
        frames: Vec::new(),
        path: Vec::new(),
        routes: Vec::new(),
        verbosity,
    };
    walk.run();

    Ok(walk.routes)
}
