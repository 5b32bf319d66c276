//! Colony file parsing and validation.
//!
//! Format:
//! ```text
//! 3            <- number of ants
//! ##start
//! s 0 0        <- room: name x y
//! m 1 0
//! ##end
//! e 2 0
//! s-m          <- tunnels, after all rooms
//! m-e
//! ```
//! Lines starting with `#` are comments, except the `##start` and `##end`
//! markers.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::models::{Colony, RoomDecl};

const START_MARKER: &str = "##start";
const END_MARKER: &str = "##end";

/// Errors reported for malformed colony input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid data format, not enough lines")]
    TooFewLines,
    #[error("invalid data format, invalid number of ants: {0:?}")]
    InvalidAntCount(String),
    #[error("invalid data format, no {0} room found")]
    MissingMarker(&'static str),
    #[error("invalid data format, more than one {0} marker")]
    RepeatedMarker(&'static str),
    #[error("invalid data format, {0} is not followed by a room")]
    MarkerWithoutRoom(&'static str),
    #[error("invalid data format, invalid room line: {0:?}")]
    InvalidRoom(String),
    #[error("invalid data format, invalid room name: {0:?}")]
    InvalidRoomName(String),
    #[error("invalid data format, unrecognized line: {0:?}")]
    InvalidLine(String),
    #[error("invalid data format, room declared after tunnels: {0:?}")]
    RoomAfterTunnel(String),
    #[error("invalid data format, duplicate line: {0:?}")]
    DuplicateLine(String),
    #[error("invalid data format, duplicate room name: {0}")]
    DuplicateRoom(String),
    #[error("invalid data format, duplicate coordinates: {0} {1}")]
    DuplicateCoordinates(i64, i64),
    #[error("invalid data format, tunnel to unknown room: {0}")]
    UnknownRoom(String),
    #[error("invalid data format, tunnel from a room to itself: {0}")]
    SelfTunnel(String),
    #[error("invalid data format, duplicate tunnel: {0}-{1}")]
    DuplicateTunnel(String, String),
    #[error("invalid data format, no tunnels")]
    NoTunnels,
    #[error("invalid data format, room {0} is not connected to the colony")]
    UnconnectedRoom(String),
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') && line != START_MARKER && line != END_MARKER
}

fn parse_ant_count(line: &str) -> Result<usize, ParseError> {
    match line.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        _ => Err(ParseError::InvalidAntCount(line.to_string())),
    }
}

fn is_valid_room_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('L') && !name.starts_with('#') && !name.contains('-')
}

/// Parse `name x y`, single-space separated.
fn parse_room(line: &str) -> Result<RoomDecl, ParseError> {
    let parts: Vec<&str> = line.split(' ').collect();
    let [name, x, y] = parts.as_slice() else {
        return Err(ParseError::InvalidRoom(line.to_string()));
    };
    let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
        return Err(ParseError::InvalidRoom(line.to_string()));
    };
    if !is_valid_room_name(name) {
        return Err(ParseError::InvalidRoomName(name.to_string()));
    }
    Ok(RoomDecl::new(*name, x, y))
}

/// Parse `a-b` with exactly one dash.
fn parse_tunnel(line: &str) -> Result<(String, String), ParseError> {
    match line.split_once('-') {
        Some((a, b)) if !a.is_empty() && !b.is_empty() && !b.contains('-') => {
            Ok((a.to_string(), b.to_string()))
        }
        _ => Err(ParseError::InvalidLine(line.to_string())),
    }
}

fn count_marker(lines: &[&str], marker: &'static str) -> Result<(), ParseError> {
    match lines.iter().filter(|&&l| l == marker).count() {
        0 => Err(ParseError::MissingMarker(marker)),
        1 => Ok(()),
        _ => Err(ParseError::RepeatedMarker(marker)),
    }
}

/// Accumulates rooms and tunnels while walking the body lines.
#[derive(Default)]
struct ColonyBuilder {
    start: Option<String>,
    end: Option<String>,
    rooms: Vec<RoomDecl>,
    tunnels: Vec<(String, String)>,
    room_names: FxHashSet<String>,
    coordinates: FxHashSet<(i64, i64)>,
    tunnel_pairs: FxHashSet<(String, String)>,
}

impl ColonyBuilder {
    fn add_room(&mut self, room: RoomDecl) -> Result<(), ParseError> {
        if !self.room_names.insert(room.name.clone()) {
            return Err(ParseError::DuplicateRoom(room.name));
        }
        if !self.coordinates.insert((room.x, room.y)) {
            return Err(ParseError::DuplicateCoordinates(room.x, room.y));
        }
        self.rooms.push(room);
        Ok(())
    }

    fn add_tunnel(&mut self, a: String, b: String) -> Result<(), ParseError> {
        for name in [&a, &b] {
            if !self.room_names.contains(name) {
                return Err(ParseError::UnknownRoom(name.clone()));
            }
        }
        if a == b {
            return Err(ParseError::SelfTunnel(a));
        }
        let key = if a < b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        if !self.tunnel_pairs.insert(key) {
            return Err(ParseError::DuplicateTunnel(a, b));
        }
        self.tunnels.push((a, b));
        Ok(())
    }

    fn finish(self, ant_count: usize) -> Result<Colony, ParseError> {
        let start = self.start.ok_or(ParseError::MissingMarker(START_MARKER))?;
        let end = self.end.ok_or(ParseError::MissingMarker(END_MARKER))?;
        if self.tunnels.is_empty() {
            return Err(ParseError::NoTunnels);
        }

        let mut connected: FxHashSet<&str> = FxHashSet::default();
        for (a, b) in &self.tunnels {
            connected.insert(a);
            connected.insert(b);
        }
        if let Some(lonely) = self
            .rooms
            .iter()
            .find(|r| r.name != start && r.name != end && !connected.contains(r.name.as_str()))
        {
            return Err(ParseError::UnconnectedRoom(lonely.name.clone()));
        }

        Ok(Colony {
            ant_count,
            start,
            end,
            rooms: self.rooms,
            tunnels: self.tunnels,
        })
    }
}

/// Parse and validate a colony description.
pub fn parse_colony(input: &str) -> Result<Colony, ParseError> {
    let lines: Vec<&str> = input.lines().filter(|l| !is_comment(l)).collect();
    // ants, ##start, room, ##end, room, tunnel
    if lines.len() < 6 {
        return Err(ParseError::TooFewLines);
    }

    let ant_count = parse_ant_count(lines[0])?;
    let body = &lines[1..];

    count_marker(body, START_MARKER)?;
    count_marker(body, END_MARKER)?;

    let mut seen_lines: FxHashSet<&str> = FxHashSet::default();
    for &line in body {
        if !seen_lines.insert(line) {
            return Err(ParseError::DuplicateLine(line.to_string()));
        }
    }

    let mut builder = ColonyBuilder::default();
    let mut pending_marker: Option<&'static str> = None;
    let mut in_tunnels = false;

    for &line in body {
        if line == START_MARKER || line == END_MARKER {
            if let Some(marker) = pending_marker {
                return Err(ParseError::MarkerWithoutRoom(marker));
            }
            pending_marker = Some(if line == START_MARKER {
                START_MARKER
            } else {
                END_MARKER
            });
        } else if line.contains(' ') {
            if in_tunnels {
                return Err(ParseError::RoomAfterTunnel(line.to_string()));
            }
            let room = parse_room(line)?;
            match pending_marker.take() {
                Some(START_MARKER) => builder.start = Some(room.name.clone()),
                Some(_) => builder.end = Some(room.name.clone()),
                None => {}
            }
            builder.add_room(room)?;
        } else if line.contains('-') {
            if let Some(marker) = pending_marker {
                return Err(ParseError::MarkerWithoutRoom(marker));
            }
            in_tunnels = true;
            let (a, b) = parse_tunnel(line)?;
            builder.add_tunnel(a, b)?;
        } else {
            return Err(ParseError::InvalidLine(line.to_string()));
        }
    }

    if let Some(marker) = pending_marker {
        return Err(ParseError::MarkerWithoutRoom(marker));
    }

    builder.finish(ant_count)
}
