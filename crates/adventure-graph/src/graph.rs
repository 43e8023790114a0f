//! The room arena and its invariant checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    GraphError, MAX_CONNECTIONS, MIN_CONNECTIONS, Role, Room, RoomBank, RoomId, SELECTED_ROOMS,
};

/// Owns every room of a map.
///
/// Rooms are stored in a `Vec` and addressed by [`RoomId`], which is always
/// the room's index in that `Vec`. Connections are ids into the same arena.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    rooms: Vec<Room>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a room with no connections and returns its id.
    pub fn add_room(&mut self, name: impl Into<String>, role: Role) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, name, role));
        id
    }

    /// Adds a single directed edge `from -> to`.
    ///
    /// Rejects self-loops, repeated targets, and rooms already holding
    /// [`MAX_CONNECTIONS`]. Used when assembling a graph from stored data,
    /// where each direction is listed separately.
    pub fn add_edge(&mut self, from: RoomId, to: RoomId) -> Result<(), GraphError> {
        let target_name = self.get(to)?.name().to_string();
        let room = self.get(from)?;
        if from == to {
            return Err(GraphError::SelfLoop(target_name));
        }
        if room.is_connected_to(to) {
            return Err(GraphError::DuplicateConnection {
                room: room.name().to_string(),
                target: target_name,
            });
        }
        if !room.has_capacity() {
            return Err(GraphError::DegreeOutOfRange {
                room: room.name().to_string(),
                degree: room.connect_count() + 1,
            });
        }
        self.rooms[from.index()].push_connection(to);
        Ok(())
    }

    /// Adds `a -> b` and `b -> a` together. The caller has already checked
    /// that the pair is eligible.
    pub(crate) fn connect_pair(&mut self, a: RoomId, b: RoomId) {
        debug_assert!(self.is_eligible_pair(a, b));
        self.rooms[a.index()].push_connection(b);
        self.rooms[b.index()].push_connection(a);
    }

    pub(crate) fn set_role(&mut self, id: RoomId, role: Role) {
        self.rooms[id.index()].set_role(role);
    }

    /// `true` if an edge `a <-> b` could be added right now.
    pub fn is_eligible_pair(&self, a: RoomId, b: RoomId) -> bool {
        match (self.room(a), self.room(b)) {
            (Some(ra), Some(rb)) => {
                a != b && ra.has_capacity() && rb.has_capacity() && !ra.is_connected_to(b)
            }
            _ => false,
        }
    }

    /// `true` if any pair of rooms could still be connected.
    pub fn has_eligible_pair(&self) -> bool {
        self.ids()
            .any(|a| self.ids().any(|b| self.is_eligible_pair(a, b)))
    }

    /// `true` once every room has at least [`MIN_CONNECTIONS`] connections.
    ///
    /// The upper bound is not part of fullness; it is enforced when edges
    /// are added.
    pub fn is_full(&self) -> bool {
        self.rooms
            .iter()
            .all(|room| room.connect_count() >= MIN_CONNECTIONS)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over every id in arena order.
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(RoomId)
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    fn get(&self, id: RoomId) -> Result<&Room, GraphError> {
        self.room(id).ok_or(GraphError::UnknownRoom(id))
    }

    /// Looks a room up by its exact name.
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name() == name)
    }

    /// Names of `id`'s neighbours, in connection order.
    pub fn connection_names(&self, id: RoomId) -> Vec<&str> {
        self.room(id)
            .map(|room| {
                room.connections()
                    .iter()
                    .filter_map(|&c| self.room(c).map(Room::name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the neighbour of `from` called `name`, if there is one.
    pub fn neighbour_named(&self, from: RoomId, name: &str) -> Option<RoomId> {
        self.room(from)?
            .connections()
            .iter()
            .copied()
            .find(|&c| self.room(c).is_some_and(|room| room.name() == name))
    }

    /// The unique room with `role`.
    pub fn with_role(&self, role: Role) -> Result<&Room, GraphError> {
        let mut matches = self.rooms.iter().filter(|room| room.role() == role);
        let first = matches.next().ok_or(GraphError::MissingRole(role))?;
        if matches.next().is_some() {
            return Err(GraphError::DuplicateRole(role));
        }
        Ok(first)
    }

    pub fn start(&self) -> Result<&Room, GraphError> {
        self.with_role(Role::Start)
    }

    pub fn end(&self) -> Result<&Room, GraphError> {
        self.with_role(Role::End)
    }

    /// Checks every map invariant: room count, catalog names, degree
    /// bounds, symmetry, no self-loops or repeated targets, and one
    /// start plus one end room.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.rooms.len() != SELECTED_ROOMS {
            return Err(GraphError::RoomCount {
                expected: SELECTED_ROOMS,
                found: self.rooms.len(),
            });
        }

        let mut names = HashSet::new();
        for room in &self.rooms {
            if !RoomBank::contains(room.name()) {
                return Err(GraphError::UnknownName(room.name().to_string()));
            }
            if !names.insert(room.name()) {
                return Err(GraphError::DuplicateName(room.name().to_string()));
            }
        }

        for room in &self.rooms {
            let degree = room.connect_count();
            if !(MIN_CONNECTIONS..=MAX_CONNECTIONS).contains(&degree) {
                return Err(GraphError::DegreeOutOfRange {
                    room: room.name().to_string(),
                    degree,
                });
            }
            let mut seen = HashSet::new();
            for &target in room.connections() {
                let other = self.get(target)?;
                if target == room.id() {
                    return Err(GraphError::SelfLoop(room.name().to_string()));
                }
                if !seen.insert(target) {
                    return Err(GraphError::DuplicateConnection {
                        room: room.name().to_string(),
                        target: other.name().to_string(),
                    });
                }
                if !other.is_connected_to(room.id()) {
                    return Err(GraphError::Asymmetric {
                        from: room.name().to_string(),
                        to: other.name().to_string(),
                    });
                }
            }
        }

        let start = self.start()?;
        let end = self.end()?;
        debug_assert_ne!(start.id(), end.id());
        Ok(())
    }
}
