//! Room name table.
//!
//! Room names map to dense ids in declaration order, so a `RoomId` doubles
//! as the index of the room in the graph's room list.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

/// Dense room id, assigned in declaration order.
pub type RoomId = u32;

/// Bidirectional room name table. Names are never reassigned.
#[derive(Debug, Clone, Default)]
pub struct RoomIdInterner {
    ids: FxHashMap<String, RoomId>,
    names: Vec<String>,
}

impl RoomIdInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Register a new name and return its id.
    ///
    /// Returns `None` if the name is already registered; the existing id is
    /// left untouched.
    pub fn insert_new(&mut self, name: &str) -> Option<RoomId> {
        let next = self.names.len() as RoomId;
        match self.ids.entry(name.to_string()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(next);
                self.names.push(name.to_string());
                Some(next)
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<RoomId> {
        self.ids.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, id: RoomId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }
}
