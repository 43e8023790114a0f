//! Error types for the graph layer.

use crate::{Role, RoomId};

/// Errors raised when a graph does not satisfy the map invariants.
///
/// The builder never produces these for its own output; they surface when
/// validating a graph or assembling one from external data.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A map must contain exactly [`SELECTED_ROOMS`](crate::SELECTED_ROOMS) rooms.
    #[error("expected {expected} rooms, found {found}")]
    RoomCount { expected: usize, found: usize },

    /// Two rooms share the same name.
    #[error("duplicate room name {0:?}")]
    DuplicateName(String),

    /// A room name is not part of the bank.
    #[error("room name {0:?} is not in the room bank")]
    UnknownName(String),

    /// An id does not refer to a room in this graph.
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    /// A room lists itself as a connection.
    #[error("room {0:?} connects to itself")]
    SelfLoop(String),

    /// A room lists the same target twice.
    #[error("room {room:?} connects to {target:?} more than once")]
    DuplicateConnection { room: String, target: String },

    /// A room has too few or too many connections.
    #[error("room {room:?} has {degree} connections")]
    DegreeOutOfRange { room: String, degree: usize },

    /// `from` connects to `to` but not the other way around.
    #[error("connection {from:?} -> {to:?} has no reverse edge")]
    Asymmetric { from: String, to: String },

    /// No room carries the given role.
    #[error("no room has role {0}")]
    MissingRole(Role),

    /// More than one room carries a role that must be unique.
    #[error("more than one room has role {0}")]
    DuplicateRole(Role),

    /// A role token could not be parsed.
    #[error("unknown room type {0:?}")]
    UnknownRole(String),
}
